//! Mini LRU - A capacity-bounded LRU cache with value semantics
//!
//! `Cache` returns a new snapshot from every insert and lookup and leaves
//! the old one intact. The `api` module hosts a single cache over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{Cache, EvictionTrigger};
pub use config::Config;
