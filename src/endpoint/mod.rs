//! Endpoint references.
//!
//! An endpoint reference is an opaque handle over one remote operation: it
//! can describe itself as text, and it can be invoked. The description is
//! the sole identity carrier for cache-key derivation; values captured at
//! runtime never participate, so two endpoints with identical descriptions
//! share a base key even when their captured state differs.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`Endpoint`] | The endpoint reference trait |
//! | [`EndpointResponse`] | Buffered response: success flag plus body parser |
//! | [`FnEndpoint`] | Adapter over an explicit description and an async closure |
//! | [`HttpEndpoint`] | reqwest-backed endpoint over method, path and parameters |

mod http;
mod response;

pub use http::HttpEndpoint;
pub use response::EndpointResponse;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::Result;

/// A callable abstraction over one remote operation.
#[async_trait]
pub trait Endpoint: Send + Sync {
    /// Stable textual form of the referenced operation.
    ///
    /// The first `.`-separated segment is treated as the receiver token and
    /// stripped during key derivation; everything after it is identity.
    fn describe(&self) -> String;

    /// Perform exactly one remote invocation.
    async fn call(&self) -> Result<EndpointResponse>;
}

/// Endpoint backed by an explicit description and an async closure.
///
/// The closure stands in for a typed RPC client call; the description plays
/// the role its source text would.
///
/// ```rust
/// use endpoint_query::{Endpoint, EndpointResponse, FnEndpoint};
///
/// let endpoint = FnEndpoint::new("client.posts.$get()", || async {
///     Ok(EndpointResponse::new(200, r#"[{"id":1,"title":"Post 1"}]"#))
/// });
/// assert_eq!(endpoint.describe(), "client.posts.$get()");
/// ```
pub struct FnEndpoint {
    source: String,
    call: Box<dyn Fn() -> BoxFuture<'static, Result<EndpointResponse>> + Send + Sync>,
}

impl FnEndpoint {
    pub fn new<F, Fut>(source: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<EndpointResponse>> + Send + 'static,
    {
        Self {
            source: source.into(),
            call: Box::new(move || Box::pin(f())),
        }
    }
}

impl std::fmt::Debug for FnEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnEndpoint")
            .field("source", &self.source)
            .finish()
    }
}

#[async_trait]
impl Endpoint for FnEndpoint {
    fn describe(&self) -> String {
        self.source.clone()
    }

    async fn call(&self) -> Result<EndpointResponse> {
        (self.call)().await
    }
}
