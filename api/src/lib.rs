//! Typed client for the vehicle-market analytics API.
//!
//! The dashboard consumes five read-only JSON resources produced by an
//! external aggregation service. This crate owns the payload models, the
//! error type, and the client that fetches all five concurrently into a
//! single all-or-nothing snapshot.

pub mod client;
pub mod error;
pub mod models;

pub use client::{default_base_url, ApiClient};
pub use error::{ApiError, ApiResult};
pub use models::{
    BrandRow, CarRow, CorrelationData, DashboardData, Segment, Summary,
};
