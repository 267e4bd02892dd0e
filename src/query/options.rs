//! Options composition.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fetch::{query_fn, QueryFn};
use super::key::{derive_query_key, KeyPart, QueryKey};
use crate::endpoint::Endpoint;

/// Opaque caching-engine options.
///
/// Field meanings belong to the consuming engine (retry counts, staleness
/// windows, GC times); this crate stores and forwards them without
/// interpretation. Merging is shallow, last write wins by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions(Map<String, Value>);

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one engine option, replacing any previous value under the name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Shallow merge: fields from `other` win on name collision.
    pub fn merge(mut self, other: EngineOptions) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Caller configuration for [`query_options`].
///
/// `key_complement` feeds key derivation; `key` and `query_fn` are explicit
/// overrides for the computed fields; everything in `engine` passes through
/// to the caching engine untouched.
pub struct QueryConfig<T> {
    pub key_complement: Vec<KeyPart>,
    pub key: Option<QueryKey>,
    pub query_fn: Option<QueryFn<T>>,
    pub engine: EngineOptions,
}

impl<T> Default for QueryConfig<T> {
    fn default() -> Self {
        Self {
            key_complement: Vec::new(),
            key: None,
            query_fn: None,
            engine: EngineOptions::new(),
        }
    }
}

impl<T> Clone for QueryConfig<T> {
    fn clone(&self) -> Self {
        Self {
            key_complement: self.key_complement.clone(),
            key: self.key.clone(),
            query_fn: self.query_fn.clone(),
            engine: self.engine.clone(),
        }
    }
}

impl<T> QueryConfig<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra key fragments, appended to the derived identity in order.
    pub fn with_key_complement<I, P>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<KeyPart>,
    {
        self.key_complement = parts.into_iter().map(Into::into).collect();
        self
    }

    /// Override the computed key outright.
    pub fn with_key(mut self, key: QueryKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Override the computed fetch function outright.
    pub fn with_query_fn(mut self, query_fn: QueryFn<T>) -> Self {
        self.query_fn = Some(query_fn);
        self
    }

    /// Replace the engine options wholesale.
    pub fn with_engine(mut self, engine: EngineOptions) -> Self {
        self.engine = engine;
        self
    }

    /// Set one pass-through engine option.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.engine.insert(name, value);
        self
    }
}

impl<T> fmt::Debug for QueryConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryConfig")
            .field("key_complement", &self.key_complement)
            .field("key", &self.key)
            .field("query_fn", &self.query_fn.as_ref().map(|_| "override"))
            .field("engine", &self.engine)
            .finish()
    }
}

/// Combined record for the caching engine's register-query call.
pub struct QueryOptions<T> {
    pub key: QueryKey,
    pub query_fn: QueryFn<T>,
    pub engine: EngineOptions,
}

impl<T> Clone for QueryOptions<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            query_fn: self.query_fn.clone(),
            engine: self.engine.clone(),
        }
    }
}

impl<T> fmt::Debug for QueryOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryOptions")
            .field("key", &self.key)
            .field("engine", &self.engine)
            .finish()
    }
}

/// Compose the options record for `endpoint`.
///
/// The key and fetch function are computed first; explicit `key` or
/// `query_fn` entries in `config` then win, mirroring last-write-wins field
/// merging. Engine options pass through untouched. Composition itself never
/// fails; failures surface when the produced function is invoked.
pub fn query_options<T>(endpoint: Arc<dyn Endpoint>, config: QueryConfig<T>) -> QueryOptions<T>
where
    T: DeserializeOwned + 'static,
{
    let derived = derive_query_key(endpoint.as_ref(), &config.key_complement);
    let fetch = query_fn(endpoint);
    tracing::debug!(key = %derived, "composed query options");

    QueryOptions {
        key: config.key.unwrap_or(derived),
        query_fn: config.query_fn.unwrap_or(fetch),
        engine: config.engine,
    }
}
