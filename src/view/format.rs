//! Plain-text cards for orders and items

use crate::types::{Item, Order};
use chrono::Local;
use std::fmt::Write as _;

/// Shown in a panel while its request is in flight
pub const LOADING_MESSAGE: &str = "Loading...";

/// Shown in the items panel when a page comes back empty
pub const EMPTY_ITEMS_MESSAGE: &str = "No items found for this order";

/// Render the order card
pub fn order_card(order: &Order) -> String {
    let created = order
        .date_created
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S");

    let mut card = String::new();
    let _ = writeln!(card, "Order UID:    {}", order.order_uid);
    let _ = writeln!(card, "Track Number: {}", order.track_number);
    let _ = writeln!(card, "Entry:        {}", order.entry);
    let _ = writeln!(card, "Locale:       {}", order.locale);
    let _ = writeln!(card, "Customer ID:  {}", order.customer_id);
    let _ = writeln!(card, "Date Created: {created}");
    card
}

/// Render one item card
pub fn item_card(item: &Item) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "Name:  {}", item.name);
    let _ = writeln!(card, "Price: {}", item.price);
    let _ = writeln!(card, "Size:  {}", item.size);
    let _ = writeln!(card, "Brand: {}", item.brand);
    card
}
