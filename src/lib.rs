//! # endpoint-query
//!
//! Query-options adapter bridging typed RPC endpoints to client-side query
//! caching engines.
//!
//! ## Overview
//!
//! A query caching engine wants three things for every query it manages: a
//! stable cache key, a fetch function, and the engine options governing the
//! entry. This crate derives all three from an endpoint reference — an
//! opaque, self-describing handle over one remote operation — and performs
//! no caching itself.
//!
//! - **Key derivation**: the endpoint's textual description, receiver token
//!   stripped, extended with caller-supplied fragments.
//! - **Fetch wrapping**: one remote invocation per call, unsuccessful
//!   responses collapsed into a single generic server-error condition.
//! - **Options composition**: computed fields merged with caller overrides,
//!   engine options passed through untouched.
//!
//! The RPC transport and the caching engine stay outside: endpoints arrive as
//! [`Endpoint`] implementations, and the composed [`QueryOptions`] record is
//! handed to whatever engine registers queries by key.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use endpoint_query::{query_options, HttpEndpoint, QueryConfig};
//!
//! # async fn run() -> endpoint_query::Result<()> {
//! let client = reqwest::Client::new();
//! let endpoint = Arc::new(
//!     HttpEndpoint::new(client, "http://localhost:3000", reqwest::Method::GET, "/users/{id}")
//!         .with_param("id", "123"),
//! );
//!
//! let options = query_options::<serde_json::Value>(
//!     endpoint,
//!     QueryConfig::new()
//!         .with_key_complement(["123"])
//!         .with_option("staleTime", 5_000),
//! );
//!
//! // Hand `options` to the caching engine; invoking the fetch function
//! // yourself works the same way the engine would:
//! let user = options.query_fn.call().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`endpoint`] | Endpoint references: the [`Endpoint`] trait and adapters |
//! | [`query`] | Key derivation, fetch wrapping, options composition |

pub mod endpoint;
pub mod query;

// Re-export main types for convenience
pub use endpoint::{Endpoint, EndpointResponse, FnEndpoint, HttpEndpoint};
pub use query::{
    derive_query_key, query_fn, query_options, EngineOptions, KeyPart, QueryConfig, QueryFn,
    QueryFuture, QueryKey, QueryOptions,
};

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the crate.
pub mod error;
pub use error::Error;
