//! datacommons-client: typed HTTP client for the Data Commons v2 API.
//!
//! All requests flow through [`Client`]: each endpoint method builds a JSON
//! body, POSTs it with the configured API key, and normalizes the response
//! into the domain types of `datacommons-core`. Failures are always typed —
//! an empty result means the API genuinely returned no data.

pub mod client;
pub mod node;
pub mod observation;
pub mod resolve;
pub mod sparql;

pub use client::{ApiError, Client, Result};
pub use node::property_expression;
pub use resolve::resolve_expression;

pub use datacommons_core::{ClientConfig, DcError};
