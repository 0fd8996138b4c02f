//! Common types used throughout the order browser
//!
//! This module contains the records served by the order API and small
//! shared enums used across multiple modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// Item id used as the keyset pagination cursor
pub type Cursor = u64;

/// Sentinel cursor meaning "from the start"
pub const START_CURSOR: Cursor = 0;

// ============================================================================
// Order
// ============================================================================

/// An order record as returned by `GET /api/orders/{order_uid}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_uid: String,
    #[serde(default)]
    pub track_number: String,
    #[serde(default)]
    pub entry: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub customer_id: String,
    pub date_created: DateTime<Utc>,

    #[serde(default)]
    pub internal_signature: String,
    #[serde(default)]
    pub delivery_service: String,
    #[serde(default)]
    pub shardkey: String,
    #[serde(default)]
    pub sm_id: i64,
    #[serde(default)]
    pub oof_shard: String,

    /// Delivery details, when the server includes them
    #[serde(default)]
    pub delivery: Option<Delivery>,
    /// Payment details, when the server includes them
    #[serde(default)]
    pub payment: Option<Payment>,
}

/// Delivery address attached to an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delivery {
    pub name: String,
    pub phone: String,
    pub zip: String,
    pub city: String,
    pub address: String,
    pub region: String,
    pub email: String,
}

/// Payment attached to an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    pub transaction: String,
    pub request_id: String,
    pub currency: String,
    pub provider: String,
    pub amount: i64,
    pub payment_dt: i64,
    pub bank: String,
    pub delivery_cost: i64,
    pub goods_total: i64,
    pub custom_fee: i64,
}

// ============================================================================
// Item
// ============================================================================

/// A line item as returned by `GET /api/orders/{order_uid}/items`
///
/// `id` is the keyset cursor: the server orders items by id ascending and
/// returns only items with `id` strictly greater than the requested cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Cursor,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub brand: String,

    #[serde(default)]
    pub chrt_id: i64,
    #[serde(default)]
    pub track_number: String,
    #[serde(default)]
    pub rid: String,
    #[serde(default)]
    pub sale: i64,
    #[serde(default)]
    pub total_price: i64,
    #[serde(default)]
    pub nm_id: i64,
    #[serde(default)]
    pub status: i64,
}

impl Item {
    /// Create an item with only the fields shown on an item card
    pub fn new(
        id: Cursor,
        name: impl Into<String>,
        price: i64,
        size: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            size: size.into(),
            brand: brand.into(),
            chrt_id: 0,
            track_number: String::new(),
            rid: String::new(),
            sale: 0,
            total_price: 0,
            nm_id: 0,
            status: 0,
        }
    }
}

// ============================================================================
// Error Body
// ============================================================================

/// Error payload the order API sends with non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Backoff strategy for transport retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}
