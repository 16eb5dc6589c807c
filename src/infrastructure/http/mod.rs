//! HTTP surface - inbound search API

pub mod handlers;

pub use handlers::{router, AppState};
