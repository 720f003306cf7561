//! CLI command implementations.

pub mod generate;
pub mod serve;
pub mod styles;
