use crate::modules::events::adapters::outbound::events_remote::EventsRemote;
use crate::modules::events::application::remote_event_store::RemoteEventStore;
use crate::modules::events::use_cases::browse_events::browser::EventBrowser;
use crate::modules::events::use_cases::register_for_event::handler::RegisterForEventHandler;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RemoteEventStore<dyn EventsRemote>>,
    pub browser: Arc<Mutex<EventBrowser>>,
    pub register_handler: Arc<RegisterForEventHandler<dyn EventsRemote>>,
}

impl AppState {
    pub fn new(remote: Arc<dyn EventsRemote>, page_increment: usize) -> Self {
        let store = Arc::new(RemoteEventStore::new(remote));
        let register_handler = Arc::new(RegisterForEventHandler::new(store.clone()));
        Self {
            store,
            browser: Arc::new(Mutex::new(EventBrowser::new(page_increment))),
            register_handler,
        }
    }

    /// Lock the browser after bringing it up to date with the latest store snapshot.
    pub async fn synced_browser(&self) -> tokio::sync::MutexGuard<'_, EventBrowser> {
        let mut browser = self.browser.lock().await;
        browser.sync(&self.store.snapshot());
        browser
    }
}
