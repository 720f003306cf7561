//! HTTP service exposing the formatter as a JSON API.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
