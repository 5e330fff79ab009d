//! wishlist - an in-memory wish list served over HTTP

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod wishlist;
