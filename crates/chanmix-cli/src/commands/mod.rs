//! CLI command implementations

pub mod json_output;
pub mod layouts;
pub mod mix;
pub mod plan;
