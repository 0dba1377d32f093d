//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - the message runtime around `update`
//! - the terminal app runner
//! - the `account` subcommand runner

pub mod account;
pub mod app_runner;
pub mod runtime;
