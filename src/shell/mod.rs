// Composition root for the event catalog.
//
// Responsibilities
// - Wire the chosen remote into the store, the browser and the register handler.
// - Expose the use cases over HTTP.
// - Keep the browser in step with the store in the background.

pub mod http;
pub mod state;
pub mod workers;
