//! CLI wiring for the `herd` binary.

pub mod cli;
pub mod logging;
pub mod run;
