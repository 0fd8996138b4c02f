//! Terminal view
//!
//! Prints order and item cards as text. The error banner is printed once
//! when raised and then shown in the status line until it expires.

use super::format::{item_card, order_card, EMPTY_ITEMS_MESSAGE, LOADING_MESSAGE};
use super::{ErrorBanner, Panel, View};
use crate::pagination::NavControls;
use crate::types::{Item, Order};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::warn;

struct Inner {
    out: Box<dyn Write + Send>,
    banner: ErrorBanner,
    controls: NavControls,
}

/// `View` that writes text to a terminal or any other sink
pub struct TerminalView {
    inner: Mutex<Inner>,
}

impl TerminalView {
    /// Write to stdout
    pub fn stdout(error_display: Duration) -> Self {
        Self::new(Box::new(std::io::stdout()), error_display)
    }

    /// Write to an arbitrary sink
    pub fn new(out: Box<dyn Write + Send>, error_display: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner {
                out,
                banner: ErrorBanner::new(error_display),
                controls: NavControls::disabled(),
            }),
        }
    }

    /// One-line summary of the controls and any live error
    pub fn status_line(&self, now: Instant) -> String {
        let mut inner = self.lock();
        inner.banner.expire(now);

        let flag = |on: bool| if on { "on" } else { "off" };
        let mut line = format!(
            "[p]rev: {}  [n]ext: {}",
            flag(inner.controls.previous),
            flag(inner.controls.next)
        );
        if let Some(message) = inner.banner.active(now) {
            line.push_str("  | error: ");
            line.push_str(message);
        }
        line
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn print(&self, text: &str) {
        let mut inner = self.lock();
        if let Err(e) = inner.out.write_all(text.as_bytes()).and_then(|()| inner.out.flush()) {
            warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl std::fmt::Debug for TerminalView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalView").finish_non_exhaustive()
    }
}

impl View for TerminalView {
    fn reset(&self) {
        {
            let mut inner = self.lock();
            inner.banner.dismiss();
            inner.controls = NavControls::disabled();
        }
        self.print("\n");
    }

    fn show_loading(&self, panel: Panel) {
        let label = match panel {
            Panel::Order => "order",
            Panel::Items => "items",
        };
        self.print(&format!("{LOADING_MESSAGE} ({label})\n"));
    }

    fn clear_loading(&self, _panel: Panel) {}

    fn render_order(&self, order: &Order) {
        self.print(&format!("== Order ==\n{}", order_card(order)));
    }

    fn render_items(&self, items: &[Item]) {
        let mut text = String::from("== Items ==\n");
        for item in items {
            text.push_str(&item_card(item));
            text.push('\n');
        }
        self.print(&text);
    }

    fn render_empty_items(&self) {
        self.print(&format!("== Items ==\n{EMPTY_ITEMS_MESSAGE}\n"));
    }

    fn set_controls(&self, controls: NavControls) {
        self.lock().controls = controls;
    }

    fn show_error(&self, message: &str) {
        self.lock().banner.raise(message, Instant::now());
        self.print(&format!("Error: {message}\n"));
    }
}
