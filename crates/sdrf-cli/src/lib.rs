//! Library side of the `sdrf-mapper` binary: logging, settings, and the
//! non-interactive matching workflow.

pub mod logging;
pub mod settings;
pub mod workflow;
