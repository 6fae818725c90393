//! HTTP transport.

mod server;

pub use server::{router, AppState};
