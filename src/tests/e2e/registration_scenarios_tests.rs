use crate::modules::events::adapters::outbound::events_remote_in_memory::InMemoryEventsRemote;
use crate::modules::events::application::remote_event_store::RemoteEventStore;
use crate::modules::events::core::event_record::Category;
use crate::modules::events::core::merge::IntegrityWarning;
use crate::modules::events::core::window::DEFAULT_INCREMENT;
use crate::modules::events::use_cases::browse_events::browser::EventBrowser;
use crate::modules::events::use_cases::register_for_event::handler::RegisterForEventHandler;
use crate::tests::fixtures::events::{EventDetailsBuilder, make_collection, make_record};
use std::sync::Arc;

#[tokio::test]
async fn registering_for_an_unknown_local_event_only_warns() {
    let remote = Arc::new(InMemoryEventsRemote::with_records(make_collection(3)));
    let store = Arc::new(RemoteEventStore::new(remote.clone()));
    let handler = RegisterForEventHandler::new(store.clone());
    store.fetch().await;
    let before = store.events();
    remote
        .seed(make_record("ev-remote-only", "Elsewhere", Category::Festival, 0.0))
        .await;

    let result = handler.handle("ev-remote-only").await;

    assert!(result.unwrap().is_registered);
    assert!(Arc::ptr_eq(&before, &store.events()));
    assert_eq!(
        store.take_integrity_warnings(),
        vec![IntegrityWarning::MissingMergeTarget {
            id: "ev-remote-only".into()
        }]
    );
}

#[tokio::test]
async fn registering_updates_the_revealed_window() {
    let remote = Arc::new(InMemoryEventsRemote::with_records(make_collection(4)));
    let store = Arc::new(RemoteEventStore::new(remote));
    let handler = RegisterForEventHandler::new(store.clone());
    let mut browser = EventBrowser::new(DEFAULT_INCREMENT);
    store.fetch().await;
    browser.sync(&store.snapshot());

    handler.handle("ev-2").await.unwrap();

    assert!(browser.sync(&store.snapshot()));
    let registered: Vec<&str> = browser
        .window()
        .iter()
        .filter(|r| r.is_registered)
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(registered, vec!["ev-2"]);
    assert_eq!(browser.window()[2].id, "ev-2");
}

#[tokio::test]
async fn creating_an_event_makes_it_browsable() {
    let remote = Arc::new(InMemoryEventsRemote::with_records(make_collection(2)));
    let store = RemoteEventStore::new(remote.clone());
    let mut browser = EventBrowser::new(DEFAULT_INCREMENT);
    store.fetch().await;
    browser.sync(&store.snapshot());

    let created = store
        .create(EventDetailsBuilder::new().name("Brand New").build())
        .await
        .unwrap();

    assert!(browser.sync(&store.snapshot()));
    assert_eq!(browser.view_len(), 3);
    assert_eq!(browser.window()[2].id, created.id);
    assert_eq!(remote.list_calls(), 2);
}
