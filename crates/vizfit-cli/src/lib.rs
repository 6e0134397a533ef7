//! CLI library components for vizfit.

pub mod commands;
pub mod logging;
pub mod types;
