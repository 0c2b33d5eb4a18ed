//! Scaffolder adapters.

mod process;

pub use process::{DEFAULT_PROGRAM, DEFAULT_SUBCOMMAND, ProcessScaffolder};
