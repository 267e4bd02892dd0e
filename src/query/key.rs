//! Cache key derivation.

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;

/// One primitive element of a cache key.
///
/// `Absent` is an explicit placeholder: it still occupies a position, so a
/// key keeps its positional meaning when a fragment is missing. Serializes
/// as a bare string, number or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyPart {
    Text(String),
    Int(i64),
    Absent,
}

impl KeyPart {
    /// True for parts carrying no value: `Absent` and empty text.
    pub fn is_blank(&self) -> bool {
        match self {
            KeyPart::Text(s) => s.is_empty(),
            KeyPart::Int(_) => false,
            KeyPart::Absent => true,
        }
    }
}

impl std::fmt::Display for KeyPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyPart::Text(s) => f.write_str(s),
            KeyPart::Int(n) => write!(f, "{n}"),
            KeyPart::Absent => f.write_str("null"),
        }
    }
}

impl From<&str> for KeyPart {
    fn from(s: &str) -> Self {
        KeyPart::Text(s.to_string())
    }
}

impl From<String> for KeyPart {
    fn from(s: String) -> Self {
        KeyPart::Text(s)
    }
}

impl From<i64> for KeyPart {
    fn from(n: i64) -> Self {
        KeyPart::Int(n)
    }
}

impl<T: Into<KeyPart>> From<Option<T>> for KeyPart {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(KeyPart::Absent)
    }
}

/// Ordered cache key.
///
/// The first element is the identity string derived from the endpoint
/// description; the rest are caller-supplied disambiguating fragments.
/// Engines treat two keys as equal only when every positional element
/// matches, which the derived `PartialEq`/`Hash` reproduce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryKey(Vec<KeyPart>);

impl QueryKey {
    pub fn new(parts: impl IntoIterator<Item = KeyPart>) -> Self {
        Self(parts.into_iter().collect())
    }

    /// The positional elements, in order.
    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }

    /// The derived identity string, when the key starts with one.
    pub fn identity(&self) -> Option<&str> {
        match self.0.first() {
            Some(KeyPart::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn push(&mut self, part: impl Into<KeyPart>) {
        self.0.push(part.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Filtering variant of the derivation policy: drops placeholders and
    /// empty fragments. Never applied implicitly; positions shift, so only
    /// opt in when the consuming engine ignores blank segments.
    pub fn compact(self) -> Self {
        Self(self.0.into_iter().filter(|p| !p.is_blank()).collect())
    }
}

impl FromIterator<KeyPart> for QueryKey {
    fn from_iter<I: IntoIterator<Item = KeyPart>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(":");
        f.write_str(&joined)
    }
}

/// Derive the cache key for `endpoint`, extended with `complement` fragments.
///
/// The description's first `.`-segment is the receiver token — not stable
/// across call sites, carrying no identity — and is discarded; the remainder,
/// rejoined with `.`, is the identity string. Complement fragments follow in
/// given order, kept verbatim including explicit [`KeyPart::Absent`]
/// placeholders.
///
/// Derivation never fails. A description without a `.` yields an empty
/// identity string.
pub fn derive_query_key(endpoint: &dyn Endpoint, complement: &[KeyPart]) -> QueryKey {
    let source = endpoint.describe();
    let identity = source.split('.').skip(1).collect::<Vec<_>>().join(".");
    tracing::trace!(identity = %identity, "derived endpoint identity");

    let mut parts = Vec::with_capacity(1 + complement.len());
    parts.push(KeyPart::Text(identity));
    parts.extend(complement.iter().cloned());
    QueryKey(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{EndpointResponse, FnEndpoint};

    fn stub(source: &str) -> FnEndpoint {
        FnEndpoint::new(source, || async { Ok(EndpointResponse::new(200, "{}")) })
    }

    #[test]
    fn strips_the_receiver_segment() {
        let key = derive_query_key(&stub("client.posts.$get()"), &[]);
        assert_eq!(key.parts(), &[KeyPart::from("posts.$get()")]);
    }

    #[test]
    fn appends_complement_fragments_in_order() {
        let key = derive_query_key(
            &stub("client.posts.$get()"),
            &["extra1".into(), "extra2".into()],
        );
        assert_eq!(
            key.parts(),
            &[
                KeyPart::from("posts.$get()"),
                KeyPart::from("extra1"),
                KeyPart::from("extra2"),
            ]
        );
    }

    #[test]
    fn preserves_absent_placeholders() {
        let key = derive_query_key(
            &stub("client.users.{id}.$get(id=123)"),
            &[KeyPart::Absent, "123".into()],
        );
        assert_eq!(
            key.parts(),
            &[
                KeyPart::from("users.{id}.$get(id=123)"),
                KeyPart::Absent,
                KeyPart::from("123"),
            ]
        );
    }

    #[test]
    fn derivation_is_idempotent() {
        let ep = stub("client.posts.$get()");
        let complement = [KeyPart::from("123"), KeyPart::Int(7)];
        assert_eq!(
            derive_query_key(&ep, &complement),
            derive_query_key(&ep, &complement)
        );
    }

    #[test]
    fn dot_free_description_yields_empty_identity() {
        let key = derive_query_key(&stub("opaque"), &["x".into()]);
        assert_eq!(key.parts(), &[KeyPart::from(""), KeyPart::from("x")]);
    }

    #[test]
    fn compact_drops_blank_parts() {
        let key = QueryKey::new([
            KeyPart::from("posts.$get()"),
            KeyPart::Absent,
            KeyPart::from(""),
            KeyPart::Int(5),
        ]);
        assert_eq!(
            key.compact().parts(),
            &[KeyPart::from("posts.$get()"), KeyPart::Int(5)]
        );
    }

    #[test]
    fn parts_serialize_as_bare_primitives() {
        let key = QueryKey::new([KeyPart::from("posts.$get()"), KeyPart::Int(5), KeyPart::Absent]);
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(json, serde_json::json!(["posts.$get()", 5, null]));
        let back: QueryKey = serde_json::from_value(json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn option_fragments_map_to_absent() {
        let missing: Option<&str> = None;
        assert_eq!(KeyPart::from(missing), KeyPart::Absent);
        assert_eq!(KeyPart::from(Some("123")), KeyPart::from("123"));
    }
}
