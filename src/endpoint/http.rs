//! HTTP-backed endpoint references.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Method;

use super::{Endpoint, EndpointResponse};
use crate::Result;

/// Endpoint reference over a plain HTTP operation.
///
/// Stands in for an external typed RPC client: one instance references one
/// remote operation (method plus templated path) with its literal parameters
/// bound. `{name}` placeholders in the path are interpolated from the
/// parameter map at call time; parameters without a placeholder are sent as
/// query parameters.
///
/// The description renders the canonical dotted call form,
/// `client.<segments>.$<method>(<params>)`, with parameters in stable key
/// order, so literal parameter values participate in derived cache keys.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: reqwest::Client,
    base_url: String,
    method: Method,
    path: String,
    params: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
}

impl HttpEndpoint {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        method: Method,
        path: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            method,
            path: path.into(),
            params: BTreeMap::new(),
            headers: BTreeMap::new(),
        }
    }

    /// Bind a literal parameter. Parameters are part of the description, and
    /// therefore of derived cache keys.
    pub fn with_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Attach a request header. Headers do not participate in identity.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    fn interpolated_path(&self) -> (String, Vec<(&str, &str)>) {
        let mut path = self.path.clone();
        let mut query = Vec::new();
        for (name, value) in &self.params {
            let placeholder = format!("{{{name}}}");
            if path.contains(&placeholder) {
                path = path.replace(&placeholder, value);
            } else {
                query.push((name.as_str(), value.as_str()));
            }
        }
        (path, query)
    }
}

#[async_trait]
impl Endpoint for HttpEndpoint {
    fn describe(&self) -> String {
        let segments = self
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(".");
        let params = self
            .params
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "client.{}.${}({})",
            segments,
            self.method.as_str().to_lowercase(),
            params
        )
    }

    async fn call(&self) -> Result<EndpointResponse> {
        let (path, query) = self.interpolated_path();
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.request(self.method.clone(), &url);
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }
        if !query.is_empty() {
            request = request.query(&query);
        }

        let response = request.send().await?;
        EndpointResponse::from_http(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(method: Method, path: &str) -> HttpEndpoint {
        HttpEndpoint::new(reqwest::Client::new(), "http://localhost", method, path)
    }

    #[test]
    fn describe_renders_the_dotted_call_form() {
        let ep = endpoint(Method::GET, "/posts");
        assert_eq!(ep.describe(), "client.posts.$get()");
    }

    #[test]
    fn describe_keeps_placeholders_and_literal_params() {
        let ep = endpoint(Method::GET, "/users/{id}").with_param("id", "123");
        assert_eq!(ep.describe(), "client.users.{id}.$get(id=123)");
    }

    #[test]
    fn describe_orders_params_by_name() {
        let ep = endpoint(Method::POST, "/search")
            .with_param("q", "rust")
            .with_param("page", 2);
        assert_eq!(ep.describe(), "client.search.$post(page=2,q=rust)");
    }

    #[test]
    fn headers_do_not_change_the_description() {
        let plain = endpoint(Method::GET, "/posts");
        let with_header = endpoint(Method::GET, "/posts").with_header("accept", "application/json");
        assert_eq!(plain.describe(), with_header.describe());
    }

    #[test]
    fn unbound_params_split_off_as_query() {
        let ep = endpoint(Method::GET, "/users/{id}")
            .with_param("id", "123")
            .with_param("expand", "posts");
        let (path, query) = ep.interpolated_path();
        assert_eq!(path, "/users/123");
        assert_eq!(query, vec![("expand", "posts")]);
    }
}
