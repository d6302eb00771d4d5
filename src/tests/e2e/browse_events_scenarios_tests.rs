use crate::modules::events::adapters::outbound::events_remote_in_memory::InMemoryEventsRemote;
use crate::modules::events::application::remote_event_store::{FetchStatus, RemoteEventStore};
use crate::modules::events::core::criteria::{CategoryFilter, FilterCriteria, SortDirective};
use crate::modules::events::core::event_record::Category;
use crate::modules::events::core::window::DEFAULT_INCREMENT;
use crate::modules::events::use_cases::browse_events::browser::EventBrowser;
use crate::tests::fixtures::events::{make_collection, make_record};
use std::sync::Arc;

fn ids(browser: &EventBrowser) -> Vec<&str> {
    browser.window().iter().map(|r| r.id.as_str()).collect()
}

#[tokio::test]
async fn reveals_twenty_records_in_two_steps() {
    let remote = Arc::new(InMemoryEventsRemote::with_records(make_collection(20)));
    let store = RemoteEventStore::new(remote);
    let mut browser = EventBrowser::new(DEFAULT_INCREMENT);

    store.fetch().await;
    browser.sync(&store.snapshot());
    assert_eq!(browser.window().len(), 12);

    assert!(browser.on_last_item_visible());
    assert_eq!(browser.window().len(), 20);
    assert!(!browser.has_more());
}

#[tokio::test]
async fn narrows_to_a_category_and_stops_growing() {
    let records = (0..20)
        .map(|i| {
            let category = if i % 7 == 0 {
                Category::Conference
            } else {
                Category::Festival
            };
            make_record(&format!("ev-{i}"), &format!("Event {i}"), category, 10.0)
        })
        .collect();
    let store = RemoteEventStore::new(Arc::new(InMemoryEventsRemote::with_records(records)));
    let mut browser = EventBrowser::new(DEFAULT_INCREMENT);
    store.fetch().await;
    browser.sync(&store.snapshot());
    browser.on_last_item_visible();

    browser.set_criteria(
        FilterCriteria::default().with_category(CategoryFilter::Only(Category::Conference)),
    );

    assert_eq!(browser.view_len(), 3);
    assert_eq!(ids(&browser), vec!["ev-0", "ev-7", "ev-14"]);
    assert!(!browser.on_last_item_visible());
    assert!(!browser.on_last_item_visible());
    assert_eq!(browser.window().len(), 3);
}

#[tokio::test]
async fn sorts_by_price_descending_and_keeps_ties_in_order() {
    let records = vec![
        make_record("ev-1", "First ten", Category::Conference, 10.0),
        make_record("ev-2", "Fifty", Category::Festival, 50.0),
        make_record("ev-3", "Second ten", Category::Playground, 10.0),
        make_record("ev-4", "Thirty", Category::Conference, 30.0),
    ];
    let store = RemoteEventStore::new(Arc::new(InMemoryEventsRemote::with_records(records)));
    let mut browser = EventBrowser::new(DEFAULT_INCREMENT);
    store.fetch().await;
    browser.sync(&store.snapshot());

    browser.set_criteria(FilterCriteria::default().with_sort(SortDirective::PriceDescending));

    assert_eq!(ids(&browser), vec!["ev-2", "ev-4", "ev-1", "ev-3"]);
}

#[tokio::test]
async fn keeps_showing_the_last_good_records_when_a_fetch_fails() {
    let remote = Arc::new(InMemoryEventsRemote::with_records(make_collection(5)));
    let store = RemoteEventStore::new(remote.clone());
    let mut browser = EventBrowser::new(DEFAULT_INCREMENT);
    store.fetch().await;
    browser.sync(&store.snapshot());

    remote.set_offline(true);
    let status = store.fetch().await;

    assert_eq!(status, FetchStatus::Failed);
    let snapshot = store.snapshot();
    assert_eq!(snapshot.status, FetchStatus::Failed);
    assert!(snapshot.error.is_some());
    assert!(!browser.sync(&snapshot));
    assert_eq!(browser.window().len(), 5);
}

#[tokio::test]
async fn search_and_category_compose_before_windowing() {
    let records = vec![
        make_record("ev-1", "Rust Meetup", Category::Conference, 0.0),
        make_record("ev-2", "rust festival", Category::Festival, 0.0),
        make_record("ev-3", "Go Meetup", Category::Conference, 0.0),
        make_record("ev-4", "TRUSTED builds", Category::Conference, 0.0),
    ];
    let store = RemoteEventStore::new(Arc::new(InMemoryEventsRemote::with_records(records)));
    let mut browser = EventBrowser::new(DEFAULT_INCREMENT);
    store.fetch().await;
    browser.sync(&store.snapshot());

    browser.set_criteria(
        FilterCriteria::default()
            .with_search("RUST")
            .with_category(CategoryFilter::Only(Category::Conference)),
    );

    assert_eq!(ids(&browser), vec!["ev-1", "ev-4"]);
}
