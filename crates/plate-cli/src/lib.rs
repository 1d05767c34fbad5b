//! CLI library components for the plate trainer.

pub mod logging;
pub mod output;
