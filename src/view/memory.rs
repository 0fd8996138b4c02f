//! In-memory view
//!
//! Keeps what a screen would show as plain data. Used by tests and by
//! embedders that render elsewhere.

use super::{ErrorBanner, Panel, View};
use crate::pagination::NavControls;
use crate::types::{Item, Order};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Everything currently rendered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryViewState {
    pub order_visible: bool,
    pub items_visible: bool,
    pub order: Option<Order>,
    pub items: Vec<Item>,
    pub items_empty: bool,
    pub order_loading: bool,
    pub items_loading: bool,
    pub controls: NavControls,
    /// Every error ever shown, oldest first
    pub errors: Vec<String>,
}

#[derive(Debug)]
struct Inner {
    state: MemoryViewState,
    banner: ErrorBanner,
}

/// `View` that stores its output in memory
#[derive(Debug)]
pub struct MemoryView {
    inner: Mutex<Inner>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryView {
    /// Create an empty view with the default banner lifetime
    pub fn new() -> Self {
        Self::with_error_display(super::DEFAULT_ERROR_DISPLAY)
    }

    /// Create an empty view whose errors last `display_for`
    pub fn with_error_display(display_for: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: MemoryViewState::default(),
                banner: ErrorBanner::new(display_for),
            }),
        }
    }

    /// Copy of the rendered state
    pub fn state(&self) -> MemoryViewState {
        self.lock().state.clone()
    }

    /// Error banner text visible at `now`
    pub fn active_error(&self, now: Instant) -> Option<String> {
        self.lock().banner.active(now).map(ToString::to_string)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while rendering leaves plain data behind; keep using it.
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl View for MemoryView {
    fn reset(&self) {
        let mut inner = self.lock();
        let errors = std::mem::take(&mut inner.state.errors);
        inner.state = MemoryViewState {
            errors,
            ..MemoryViewState::default()
        };
        inner.banner.dismiss();
    }

    fn show_loading(&self, panel: Panel) {
        let mut inner = self.lock();
        match panel {
            Panel::Order => inner.state.order_loading = true,
            Panel::Items => inner.state.items_loading = true,
        }
    }

    fn clear_loading(&self, panel: Panel) {
        let mut inner = self.lock();
        match panel {
            Panel::Order => inner.state.order_loading = false,
            Panel::Items => inner.state.items_loading = false,
        }
    }

    fn render_order(&self, order: &Order) {
        let mut inner = self.lock();
        inner.state.order_visible = true;
        inner.state.order_loading = false;
        inner.state.order = Some(order.clone());
    }

    fn render_items(&self, items: &[Item]) {
        let mut inner = self.lock();
        inner.state.items_visible = true;
        inner.state.items_loading = false;
        inner.state.items_empty = false;
        inner.state.items = items.to_vec();
    }

    fn render_empty_items(&self) {
        let mut inner = self.lock();
        inner.state.items_visible = true;
        inner.state.items_loading = false;
        inner.state.items_empty = true;
        inner.state.items.clear();
    }

    fn set_controls(&self, controls: NavControls) {
        self.lock().state.controls = controls;
    }

    fn show_error(&self, message: &str) {
        let mut inner = self.lock();
        inner.state.errors.push(message.to_string());
        inner.banner.raise(message, Instant::now());
    }
}
