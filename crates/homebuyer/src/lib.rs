//! Purchase cost estimates for Australian first-home buyers.
//!
//! The [`purchase`] module holds the jurisdiction rules and the aggregator that
//! turns a [`purchase::PurchaseInput`] into a [`purchase::PurchaseReport`]. The
//! remaining modules carry the service plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod purchase;
pub mod telemetry;
