// Composition root for the events API.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the configured store backend.
// - Wire the store into the HTTP handlers via AppState.

pub mod http;
pub mod state;
