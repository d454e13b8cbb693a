//! HTTP client layer: `BrightIdHttp`, one method per node endpoint.

pub mod client;

pub use client::BrightIdHttp;
