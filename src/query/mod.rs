//! Query artifact derivation.
//!
//! This module turns an endpoint reference into the three artifacts a
//! client-side query caching engine consumes: a cache key, a fetch function,
//! and a combined options record.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`derive_query_key`] | Cache-key derivation from an endpoint description |
//! | [`query_fn`] | Fetch-function wrapping with error normalization |
//! | [`query_options`] | Combined options record for the caching engine |
//! | [`QueryKey`] / [`KeyPart`] | Ordered cache-key value objects |
//! | [`EngineOptions`] | Opaque pass-through engine configuration |
//!
//! Everything here is synchronous; the only suspension point lives inside
//! the produced [`QueryFn`], at the remote call itself.

mod fetch;
mod key;
mod options;

pub use fetch::{query_fn, QueryFn, QueryFuture};
pub use key::{derive_query_key, KeyPart, QueryKey};
pub use options::{query_options, EngineOptions, QueryConfig, QueryOptions};
