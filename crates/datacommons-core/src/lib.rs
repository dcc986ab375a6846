//! datacommons-core: Shared types, configuration, and error handling for the
//! Data Commons API client.
//!
//! This crate provides the foundational types used by `datacommons-client`:
//! - Domain types (property values, observations, resolution candidates)
//! - Request and response wire schemas for the v2 API endpoints
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod types;

pub use config::ClientConfig;
pub use error::DcError;
