//! Pagination types
//!
//! Cursor history, navigation controls and the request/outcome pair that
//! flows between the engine and the session controller.

use crate::types::{Cursor, START_CURSOR};
use serde::Serialize;

// ============================================================================
// Cursor History
// ============================================================================

/// Stack of the cursors that produced each page on the current path
///
/// The bottom entry is always [`START_CURSOR`] and is never popped. Entries
/// after it are strictly increasing, and the top entry is the cursor of the
/// page currently displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CursorHistory {
    cursors: Vec<Cursor>,
}

impl Default for CursorHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorHistory {
    /// Create a history positioned at the start of the list
    pub fn new() -> Self {
        Self {
            cursors: vec![START_CURSOR],
        }
    }

    /// Number of entries (never zero)
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Cursor of the page currently displayed
    pub fn top(&self) -> Cursor {
        self.cursors.last().copied().unwrap_or(START_CURSOR)
    }

    /// Cursor of the page before the current one, if any
    pub fn previous(&self) -> Option<Cursor> {
        self.cursors
            .len()
            .checked_sub(2)
            .map(|index| self.cursors[index])
    }

    /// Whether a backward step is possible
    pub fn can_go_back(&self) -> bool {
        self.cursors.len() > 1
    }

    /// Record a forward step
    ///
    /// Only a cursor strictly above the top is recorded. Re-fetching the page
    /// already on top (a retry, a replay, page one at cursor 0) is a no-op.
    /// Returns whether the cursor was appended.
    pub fn advance(&mut self, cursor: Cursor) -> bool {
        if cursor > self.top() {
            self.cursors.push(cursor);
            true
        } else {
            false
        }
    }

    /// Drop the top entry; the start sentinel stays
    pub fn retreat(&mut self) -> Option<Cursor> {
        if self.can_go_back() {
            self.cursors.pop()
        } else {
            None
        }
    }

    /// View the entries bottom to top
    pub fn as_slice(&self) -> &[Cursor] {
        &self.cursors
    }
}

// ============================================================================
// Navigation Controls
// ============================================================================

/// Enabled state of the "previous" and "next" controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavControls {
    pub previous: bool,
    pub next: bool,
}

impl NavControls {
    /// Both controls disabled
    pub fn disabled() -> Self {
        Self::default()
    }
}

// ============================================================================
// Requests and Outcomes
// ============================================================================

/// Which navigation action produced a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// The first page after a successful lookup
    First,
    /// One page forward
    Next,
    /// One page back, re-fetched forward from the earlier boundary
    Previous,
}

/// A planned page fetch
///
/// Carries the engine epoch it was planned against; applying it after the
/// engine has moved on yields [`PageOutcome::Stale`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub direction: Direction,
    pub cursor: Cursor,
    pub limit: u32,
    pub(crate) epoch: u64,
}

/// Result of applying a fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// A non-empty page is now current
    Shown { count: usize },
    /// The server returned no items; next is disabled
    Empty,
    /// The engine moved on since the request was planned; nothing changed
    Stale,
}
