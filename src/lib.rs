//! Counter with immediate local updates and debounced remote persistence.
//!
//! Layers, bottom up:
//!
//! - [`domain`]: the [`Counter`](domain::Counter) entity
//! - [`http`]: a generic JSON-over-HTTP client
//! - [`data`]: counter storage and the services that reach it
//! - [`store`]: state, reducer and the concrete [`AppStore`](store::AppStore)
//! - [`app`]: increment/decrement use cases and the write scheduler
//! - [`server`], [`session`], [`cli`]: outer surfaces

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod http;
pub mod logging;
pub mod server;
pub mod session;
pub mod store;
