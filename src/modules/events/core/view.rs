// Derive the ordered view from the canonical collection and the active criteria.
//
// Purpose
// - Filter by category and case-insensitive name search, then optionally sort by ticket price.
//
// Boundaries
// - Pure and deterministic. No input or output, no shared state.
// - Sorting is stable: equal prices keep their canonical relative order.

use crate::modules::events::core::criteria::{FilterCriteria, SortDirective};
use crate::modules::events::core::event_record::EventRecord;

pub fn derive_view(collection: &[EventRecord], criteria: &FilterCriteria) -> Vec<EventRecord> {
    let term = criteria.search_term();
    let mut view: Vec<EventRecord> = collection
        .iter()
        .filter(|record| criteria.category.accepts(record.details.category))
        .filter(|record| match &term {
            Some(term) => record.details.name.to_lowercase().contains(term.as_str()),
            None => true,
        })
        .cloned()
        .collect();

    match criteria.sort {
        SortDirective::None => {}
        SortDirective::PriceAscending => {
            view.sort_by(|a, b| a.details.ticket_price.total_cmp(&b.details.ticket_price))
        }
        SortDirective::PriceDescending => {
            view.sort_by(|a, b| b.details.ticket_price.total_cmp(&a.details.ticket_price))
        }
    }
    view
}
