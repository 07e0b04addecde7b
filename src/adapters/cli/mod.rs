//! CLI Adapter
//!
//! clap argument definitions; command handlers live in the binary.

mod commands;

pub use commands::{CheckCmd, CliApp, Command, FetchCmd, HistoryCmd};
