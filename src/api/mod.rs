//! Order API module
//!
//! The two read endpoints the browser consumes:
//!
//! - `GET /api/orders/{order_uid}`
//! - `GET /api/orders/{order_uid}/items?last_id={cursor}&limit={n}`
//!
//! `OrderApi` is the seam the session controller talks to; `HttpOrderApi`
//! implements it over [`crate::http::HttpClient`].

mod client;

pub use client::{HttpOrderApi, OrderApi};

#[cfg(test)]
mod tests;
