//! Command handlers, one module per subcommand.

pub mod completions;
pub mod concat;
pub mod config;
pub mod init;
pub mod scaffold;
