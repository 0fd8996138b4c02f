// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Order Browser
//!
//! Look up an order by its UID and browse the order's items page by page
//! through a REST order API.
//!
//! Items are fetched with keyset pagination: every request carries the id of
//! the last item already shown (`last_id`) and a page size (`limit`), and the
//! server answers with the next items in ascending id order. Going back is
//! done by replaying the cursor that produced the previous page.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_browser::api::HttpOrderApi;
//! use order_browser::config::ClientConfig;
//! use order_browser::session::SearchController;
//! use order_browser::view::MemoryView;
//!
//! #[tokio::main]
//! async fn main() -> order_browser::Result<()> {
//!     let config = ClientConfig::default();
//!     let api = HttpOrderApi::from_config(&config)?;
//!     let controller = SearchController::with_page_size(api, MemoryView::new(), config.page_size);
//!
//!     controller.submit_search("b563feb7b2b84b6test").await?;
//!     controller.next().await?;
//!     controller.previous().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SearchController                        │
//! │  submit_search(uid)      next()      previous()             │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴───────────┬──────────────────┐
//! │   OrderApi   │   PaginationEngine       │      View        │
//! ├──────────────┼──────────────────────────┼──────────────────┤
//! │ get_order    │ CursorHistory            │ TerminalView     │
//! │ get_items    │ plan / apply             │ MemoryView       │
//! │ HttpClient   │ NavControls              │ ErrorBanner      │
//! └──────────────┴──────────────────────────┴──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Order and item models
pub mod types;

/// HTTP client with retry and backoff
pub mod http;

/// Order API client
pub mod api;

/// Keyset pagination with a cursor history
pub mod pagination;

/// Search sessions and navigation
pub mod session;

/// Rendering of orders, items, controls and errors
pub mod view;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::{HttpOrderApi, OrderApi};
pub use config::ClientConfig;
pub use pagination::{CursorHistory, NavControls, PaginationEngine};
pub use session::{NavOutcome, SearchController, SearchOutcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
