//! Wyrdgrid Engine - all server-side code.
//!
//! The engine owns the HTTP/WebSocket surface, the connection registry,
//! the serializing game task, and the per-turn agent pipeline.

pub mod api;
pub mod game;
pub mod views;
