// Background workers owned by the shell.
//
// - browser sync: recompute the browser view whenever the store publishes a new snapshot.
//   Stops once the store is dropped.

use crate::shell::state::AppState;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

pub fn spawn_browser_sync(state: &AppState) -> JoinHandle<()> {
    let mut updates = state.store.subscribe();
    let browser = Arc::clone(&state.browser);
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            browser.lock().await.sync(&snapshot);
        }
        debug!("event store closed, browser sync stopped");
    })
}
