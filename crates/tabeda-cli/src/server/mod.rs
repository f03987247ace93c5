//! HTTP API exposing the quality engine.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
