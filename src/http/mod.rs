//! HTTP client module
//!
//! Provides the reqwest-based transport used by the order API.
//!
//! # Features
//!
//! - **Segment-safe URLs**: path segments are percent-encoded individually
//! - **Optional Retries**: bounded retries with backoff, off by default
//! - **Backoff Strategies**: Constant, linear, and exponential backoff

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
