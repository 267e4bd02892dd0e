//! Fetch-function wrapping.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;

use crate::endpoint::Endpoint;
use crate::{Error, Result};

/// Boxed future produced by a [`QueryFn`] call.
pub type QueryFuture<T> = BoxFuture<'static, Result<T>>;

/// Zero-argument asynchronous fetch function.
///
/// Clones are cheap and share no mutable state; every [`call`](Self::call)
/// performs one fresh remote invocation, so concurrent and repeated calls
/// are fully independent.
pub struct QueryFn<T> {
    inner: Arc<dyn Fn() -> QueryFuture<T> + Send + Sync>,
}

impl<T> Clone for QueryFn<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> QueryFn<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> QueryFuture<T> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Invoke the wrapped endpoint once.
    pub async fn call(&self) -> Result<T> {
        (self.inner)().await
    }
}

impl<T> fmt::Debug for QueryFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("QueryFn")
    }
}

/// Wrap `endpoint` into a fetch function.
///
/// The produced function awaits the endpoint, collapses an unsuccessful
/// response into [`Error::Server`], and otherwise parses the body as `T`.
/// Transport and parse failures propagate unchanged. No retries, timeouts
/// or caching happen here; those belong to the consuming engine.
pub fn query_fn<T>(endpoint: Arc<dyn Endpoint>) -> QueryFn<T>
where
    T: DeserializeOwned + 'static,
{
    QueryFn::new(move || {
        let endpoint = Arc::clone(&endpoint);
        Box::pin(async move {
            let response = endpoint.call().await?;
            if !response.ok() {
                tracing::debug!(status = response.status(), "unsuccessful response");
                return Err(Error::Server);
            }
            response.json::<T>()
        })
    })
}
