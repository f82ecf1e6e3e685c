//! Shared pieces of the demo programs: command line and key bindings.

pub mod cli;
pub mod keys;
