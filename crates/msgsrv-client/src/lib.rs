//! Client for the Message Server (admin notification service, port 8002).
//!
//! The server side already exists; this crate is the thin calling side used by
//! admin tooling: send a reply into a case thread, notify a single user,
//! broadcast to many, and probe liveness. Each operation is one independent
//! HTTP exchange against a configured base URL. No retries, no shared state.

pub mod client;
pub mod config;
pub mod errors;
pub mod logging;

pub use client::{ApiResult, MessageServerClient};
pub use config::ClientConfig;
pub use errors::{Error, Result};
