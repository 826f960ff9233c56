//! API Module
//!
//! HTTP handlers and routing for the cache host.
//!
//! # Endpoints
//! - `PUT /set` - Insert a key-value pair
//! - `GET /get/:key` - Look up a value, promoting it
//! - `GET /member/:key` - Membership test
//! - `GET /size` - Entry count, capacity and clock
//! - `GET /dict` - Export of all key-value pairs
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
