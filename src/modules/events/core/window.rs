// Incremental reveal over a view (infinite scroll without refetching).
//
// Invariants
// - 0 <= revealed <= view length, always.
// - revealed only decreases when a new view is installed, where it resets to min(increment, len).
// - The window is always a prefix of the view.

use std::sync::Arc;

pub const DEFAULT_INCREMENT: usize = 12;

#[derive(Debug, Clone)]
pub struct PaginationWindow<T> {
    view: Arc<Vec<T>>,
    revealed: usize,
    increment: usize,
}

impl<T> PaginationWindow<T> {
    /// An increment of zero is raised to one so the window can always grow.
    pub fn new(increment: usize) -> Self {
        Self {
            view: Arc::new(Vec::new()),
            revealed: 0,
            increment: increment.max(1),
        }
    }

    pub fn reset(&mut self, view: Arc<Vec<T>>) {
        self.revealed = self.increment.min(view.len());
        self.view = view;
    }

    /// Visibility trigger for the last revealed item. Returns whether the window grew.
    pub fn on_last_item_visible(&mut self) -> bool {
        if self.revealed >= self.view.len() {
            return false;
        }
        self.revealed = (self.revealed + self.increment).min(self.view.len());
        true
    }

    pub fn window(&self) -> &[T] {
        &self.view[..self.revealed]
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    pub fn has_more(&self) -> bool {
        self.revealed < self.view.len()
    }
}

impl<T> Default for PaginationWindow<T> {
    fn default() -> Self {
        Self::new(DEFAULT_INCREMENT)
    }
}
