//! HTTP and WebSocket API surface.

pub mod connections;
pub mod http;
pub mod websocket;

pub use connections::ConnectionManager;
