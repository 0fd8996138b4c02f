//! Pagination module
//!
//! Keyset pagination over a forward-only cursor API.
//!
//! # Overview
//!
//! The server only answers "items with `id` greater than `last_id`". Going
//! forward uses the last id of the current page as the next cursor. Going
//! backward is reconstructed on the client: a [`CursorHistory`] stack keeps
//! the cursor that produced every page on the path from page one, and
//! "previous" re-fetches forward from the entry below the top.
//!
//! Planning and applying are separate steps. A [`PageRequest`] is planned
//! without touching state and applied only once its response arrives, so a
//! failed request leaves the engine exactly as it was.

mod engine;
mod types;

pub use engine::PaginationEngine;
pub use types::{CursorHistory, Direction, NavControls, PageOutcome, PageRequest};
