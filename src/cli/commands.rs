//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse an order and its items page by page
#[derive(Parser, Debug)]
#[command(name = "order-browser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Order API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Items per page (overrides the config file)
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up one order and print its items
    Show {
        /// Order UID to look up
        order_uid: String,

        /// Number of pages to print (at least 1)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },

    /// Interactive session reading commands from stdin
    Browse,
}

/// A line typed in the interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Start a new search (the uid may be empty)
    Search(String),
    Next,
    Previous,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse one input line; `None` for blank or unknown input
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "search" | "s" => Some(Self::Search(rest.to_string())),
            "next" | "n" => Some(Self::Next),
            "prev" | "previous" | "p" => Some(Self::Previous),
            "help" | "h" | "?" => Some(Self::Help),
            "quit" | "exit" | "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Text printed by the `help` command
pub const BROWSE_HELP: &str = "\
commands:
  search <uid>  (s)  look up an order
  next          (n)  next page of items
  prev          (p)  previous page of items
  help          (h)  show this text
  quit          (q)  leave
";
