//! Session types

use crate::pagination::{NavControls, PaginationEngine};
use crate::types::{Cursor, Item, Order};
use serde::Serialize;
use std::fmt;

/// Generation token identifying one search
///
/// Ids grow monotonically within a controller, so a response tagged with an
/// older id can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SessionId(pub(crate) u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// One order lookup and its pagination state
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub order_uid: String,
    /// Set once the lookup succeeded
    pub order: Option<Order>,
    pub engine: PaginationEngine,
}

impl Session {
    /// Start a session before the lookup has resolved
    pub fn new(id: SessionId, order_uid: impl Into<String>, page_size: u32) -> Self {
        Self {
            id,
            order_uid: order_uid.into(),
            order: None,
            engine: PaginationEngine::new(page_size),
        }
    }

    /// Whether the order lookup has succeeded
    pub fn is_loaded(&self) -> bool {
        self.order.is_some()
    }

    /// Read-only copy of the state that matters to callers
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            order_uid: self.order_uid.clone(),
            loaded: self.is_loaded(),
            history: self.engine.history().as_slice().to_vec(),
            forward_cursor: self.engine.forward_cursor(),
            controls: self.engine.controls(),
        }
    }
}

/// Point-in-time view of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub order_uid: String,
    pub loaded: bool,
    pub history: Vec<Cursor>,
    pub forward_cursor: Cursor,
    pub controls: NavControls,
}

/// A page that was applied and rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub items: Vec<Item>,
    pub controls: NavControls,
}

/// Result of a navigation action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// A page of items is now displayed
    Page(PageSnapshot),
    /// The server had no items at this position
    Empty,
    /// The control was disabled; no request was made
    Disabled,
    /// The response arrived after the session or page moved on and was dropped
    Stale,
}

/// Result of a search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The order was found and the first page fetched
    Loaded { order: Order, first_page: NavOutcome },
    /// A newer search replaced this one before it finished
    Superseded,
}
