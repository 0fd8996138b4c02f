//! View module
//!
//! The rendering surface the session controller drives.
//!
//! # Overview
//!
//! - [`View`] - trait for showing orders, item pages, controls and errors
//! - [`TerminalView`] - writes cards to any `Write` sink (stdout in the CLI)
//! - [`MemoryView`] - keeps the rendered state in memory for tests and embedding
//! - [`ErrorBanner`] - transient error state that expires after a fixed interval

mod banner;
mod format;
mod memory;
mod terminal;

pub use banner::ErrorBanner;
pub use format::{item_card, order_card, EMPTY_ITEMS_MESSAGE, LOADING_MESSAGE};
pub use memory::{MemoryView, MemoryViewState};
pub use terminal::TerminalView;

use crate::pagination::NavControls;
use crate::types::{Item, Order};

/// Default time an error banner stays visible
pub const DEFAULT_ERROR_DISPLAY: std::time::Duration = std::time::Duration::from_secs(5);

/// Panels that can show a loading placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Order,
    Items,
}

/// Rendering surface for one browsing session
///
/// Methods take `&self`; implementations use interior mutability so the
/// controller can render while holding only a shared reference.
pub trait View: Send + Sync {
    /// Hide both panels, clear their content, disable controls, dismiss errors
    fn reset(&self);

    /// Show the loading placeholder in a panel
    fn show_loading(&self, panel: Panel);

    /// Remove the loading placeholder if it is still showing
    fn clear_loading(&self, panel: Panel);

    /// Show the order card
    fn render_order(&self, order: &Order);

    /// Show one page of item cards
    fn render_items(&self, items: &[Item]);

    /// Show the empty-state message in the items panel
    fn render_empty_items(&self);

    /// Enable or disable the navigation controls
    fn set_controls(&self, controls: NavControls);

    /// Show a transient error message
    fn show_error(&self, message: &str);
}
