//! CLI library components for the address pipeline.

pub mod logging;
