//! Session module
//!
//! A session binds one order lookup to its pagination state. The
//! [`SearchController`] starts a new session on every search and drives
//! navigation, discarding responses that belong to a replaced session or to
//! a page the engine has already moved past.

mod controller;
mod types;

pub use controller::{SearchController, EMPTY_SEARCH_MESSAGE};
pub use types::{NavOutcome, PageSnapshot, SearchOutcome, Session, SessionId, SessionSnapshot};
