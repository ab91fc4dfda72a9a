//! CLI library components for the SAF converter.

pub mod logging;
pub mod pipeline;
pub mod types;
