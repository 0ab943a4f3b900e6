//! CLI library components for the terminology lookup tool.

pub mod logging;
