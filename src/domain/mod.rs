//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types and adjudication/outcome logic
//! - `wire.rs`: Raw serde structs matching node responses
//! - `convert.rs`: Conversions from wire types into domain types
//! - `client.rs`: Sub-client with HTTP methods

pub mod sponsorship;
pub mod verification;
