//! CLI module
//!
//! Command-line interface for browsing orders.
//!
//! # Commands
//!
//! - `show <uid>` - Print an order and its first pages of items
//! - `browse` - Interactive session (`search`, `next`, `prev`, `quit`)

mod commands;
mod runner;

pub use commands::{BrowseCommand, Cli, Commands, BROWSE_HELP};
pub use runner::{browse, show, Runner};
