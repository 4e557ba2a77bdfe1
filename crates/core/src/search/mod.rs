//! Route search against the backend collaborator.

pub mod client;
pub mod types;

pub use client::{RouteSearchClient, SearchError};
pub use types::{RouteSearchRequest, RouteSearchResponse};
