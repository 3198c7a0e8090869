// Adapters layer: HTTP surface over the core services.

pub mod http;
pub mod server;
