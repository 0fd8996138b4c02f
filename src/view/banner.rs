//! Transient error banner
//!
//! An error is shown with a deadline. A newer error replaces the older one
//! and restarts the deadline; once the deadline passes the banner is clear.
//! Time is passed in explicitly so callers decide when to check.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Shown {
    message: String,
    expires_at: Instant,
}

/// Error message with an expiry
#[derive(Debug, Clone)]
pub struct ErrorBanner {
    display_for: Duration,
    current: Option<Shown>,
}

impl ErrorBanner {
    /// Create an empty banner whose messages last `display_for`
    pub fn new(display_for: Duration) -> Self {
        Self {
            display_for,
            current: None,
        }
    }

    /// Show a message, superseding any message already shown
    pub fn raise(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Shown {
            message: message.into(),
            expires_at: now + self.display_for,
        });
    }

    /// Message visible at `now`, if any
    pub fn active(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|shown| now < shown.expires_at)
            .map(|shown| shown.message.as_str())
    }

    /// Drop the message if its deadline has passed; true if it was dropped
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(shown) if now >= shown.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Clear immediately
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for ErrorBanner {
    fn default() -> Self {
        Self::new(super::DEFAULT_ERROR_DISPLAY)
    }
}
