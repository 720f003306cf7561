//! API request handlers.

mod citation;
mod health;
mod styles;

pub use citation::*;
pub use health::*;
pub use styles::*;
