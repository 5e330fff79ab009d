//! # Wish List HTTP Server Module
//!
//! Adapts HTTP requests to the in-memory wish list and serves them with Axum.
//!
//! # Endpoints
//!
//! - `GET /` - List wishes
//! - `POST /` - Add a wish
//! - `PUT /` - Replace a wish's description
//! - `DELETE /:id` - Remove a wish
//! - `/observability/health` - Health check

pub mod access_log;
pub mod config;
pub mod observability_routes;
pub mod server;
pub mod wish_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
pub use wish_routes::WishState;
