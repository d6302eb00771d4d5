// Event browser: the presentation-facing controller over the canonical collection.
//
// Purpose
// - Hold the user criteria, derive the view and expose the revealed window.
//
// Responsibilities
// - Recompute the view when the canonical collection Arc changes or the criteria change.
// - Reset the window on every recomputation. Grow it on visibility triggers only.
// - Only writer of the view and of the reveal cursor.

use crate::modules::events::application::remote_event_store::StoreSnapshot;
use crate::modules::events::core::criteria::FilterCriteria;
use crate::modules::events::core::event_record::EventRecord;
use crate::modules::events::core::view::derive_view;
use crate::modules::events::core::window::PaginationWindow;
use std::sync::Arc;
use tracing::debug;

pub struct EventBrowser {
    criteria: FilterCriteria,
    source: Arc<Vec<EventRecord>>,
    window: PaginationWindow<EventRecord>,
}

impl EventBrowser {
    pub fn new(increment: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            source: Arc::new(Vec::new()),
            window: PaginationWindow::new(increment),
        }
    }

    /// Adopt the collection of a store snapshot. Returns whether the view was recomputed.
    pub fn sync(&mut self, snapshot: &StoreSnapshot) -> bool {
        if Arc::ptr_eq(&self.source, &snapshot.events) {
            return false;
        }
        self.source = Arc::clone(&snapshot.events);
        self.recompute();
        true
    }

    /// Returns whether the view was recomputed.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> bool {
        if criteria == self.criteria {
            return false;
        }
        self.criteria = criteria;
        self.recompute();
        true
    }

    pub fn on_last_item_visible(&mut self) -> bool {
        self.window.on_last_item_visible()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn window(&self) -> &[EventRecord] {
        self.window.window()
    }

    pub fn view_len(&self) -> usize {
        self.window.view_len()
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more()
    }

    fn recompute(&mut self) {
        let view = derive_view(&self.source, &self.criteria);
        debug!(
            source = self.source.len(),
            view = view.len(),
            "event view recomputed"
        );
        self.window.reset(Arc::new(view));
    }
}
