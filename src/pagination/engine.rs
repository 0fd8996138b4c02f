//! Pagination engine
//!
//! Owns the cursor history of one session and decides, for every navigation
//! action, which cursor to request and which controls to enable.

use super::types::{CursorHistory, Direction, NavControls, PageOutcome, PageRequest};
use crate::error::{Error, Result};
use crate::types::{Cursor, Item, START_CURSOR};
use tracing::debug;

/// Keyset pagination state for one order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationEngine {
    page_size: u32,
    history: CursorHistory,
    /// Last item id of the current page; the cursor for the next forward fetch
    forward_cursor: Cursor,
    controls: NavControls,
    /// Bumped on every applied page
    epoch: u64,
}

impl PaginationEngine {
    /// Create an engine positioned before the first page
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            history: CursorHistory::new(),
            forward_cursor: START_CURSOR,
            controls: NavControls::disabled(),
            epoch: 0,
        }
    }

    /// Items requested per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Cursor history, bottom to top
    pub fn history(&self) -> &CursorHistory {
        &self.history
    }

    /// Cursor the next forward fetch will use
    pub fn forward_cursor(&self) -> Cursor {
        self.forward_cursor
    }

    /// Current control state
    pub fn controls(&self) -> NavControls {
        self.controls
    }

    /// Plan the first page of a session
    pub fn plan_first(&self) -> PageRequest {
        self.request(Direction::First, START_CURSOR)
    }

    /// Plan a forward step; `None` while "next" is disabled
    pub fn plan_next(&self) -> Option<PageRequest> {
        self.controls
            .next
            .then(|| self.request(Direction::Next, self.forward_cursor))
    }

    /// Plan a backward step; `None` on the first page
    pub fn plan_previous(&self) -> Option<PageRequest> {
        self.history
            .previous()
            .map(|cursor| self.request(Direction::Previous, cursor))
    }

    /// Apply a fetched page to the state
    ///
    /// The page must hold ids strictly above the request cursor in ascending
    /// order; anything else is rejected and leaves the state untouched.
    pub fn apply(&mut self, request: &PageRequest, items: &[Item]) -> Result<PageOutcome> {
        if request.epoch != self.epoch {
            debug!(
                cursor = request.cursor,
                planned = request.epoch,
                current = self.epoch,
                "dropping stale page"
            );
            return Ok(PageOutcome::Stale);
        }

        check_page(request.cursor, items)?;

        let Some(last) = items.last() else {
            self.controls.next = false;
            self.epoch += 1;
            return Ok(PageOutcome::Empty);
        };

        if request.direction == Direction::Previous {
            self.history.retreat();
        }
        self.history.advance(request.cursor);

        self.forward_cursor = last.id;
        self.controls = NavControls {
            previous: self.history.can_go_back(),
            next: items.len() >= self.page_size as usize,
        };
        self.epoch += 1;

        Ok(PageOutcome::Shown { count: items.len() })
    }

    fn request(&self, direction: Direction, cursor: Cursor) -> PageRequest {
        PageRequest {
            direction,
            cursor,
            limit: self.page_size,
            epoch: self.epoch,
        }
    }
}

/// Reject pages that break the keyset contract
fn check_page(cursor: Cursor, items: &[Item]) -> Result<()> {
    let mut floor = cursor;
    for item in items {
        if item.id <= floor {
            return Err(Error::page_fetch(format!(
                "Failed to load items: server returned id {} after cursor {}",
                item.id, floor
            )));
        }
        floor = item.id;
    }
    Ok(())
}
