//! Attribute storage shared by every resource type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::clients::HttpResponse;

/// The open attribute bag backing a resource's fields.
///
/// Keys keep their insertion order.
pub type Attributes = serde_json::Map<String, Value>;

/// Per-instance state of a resource: its attributes and the errors reported
/// by the last failed request.
///
/// Concrete resource types are thin wrappers around `ResourceData`; see
/// [`resource!`](crate::resource). It serializes as its bare attribute map;
/// captured errors are not serialized.
///
/// # Example
///
/// ```rust
/// use boleto_simples::rest::ResourceData;
/// use serde_json::json;
///
/// let mut data = ResourceData::default();
/// assert!(data.is_new());
/// assert!(data.get("amount").is_none());
///
/// data.set("amount", 12.5);
/// data.set("id", 7);
/// assert!(!data.is_new());
/// assert_eq!(data.get("amount"), Some(&json!(12.5)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceData {
    attributes: Attributes,
    response_errors: Option<Value>,
}

impl ResourceData {
    /// Creates resource data seeded with `attributes`.
    #[must_use]
    pub const fn new(attributes: Attributes) -> Self {
        Self {
            attributes,
            response_errors: None,
        }
    }

    /// Returns the full attribute map.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns an attribute, or `None` when it is not set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Sets an attribute, overwriting any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.attributes.shift_remove(key)
    }

    /// Returns the `id` attribute when it is present and not null.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.attributes.get("id").filter(|id| !id.is_null())
    }

    /// Returns `true` if the resource has not been persisted (no non-null `id`).
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id().is_none()
    }

    /// Returns the `errors` payload of the last failed response, verbatim.
    #[must_use]
    pub const fn response_errors(&self) -> Option<&Value> {
        self.response_errors.as_ref()
    }

    /// Applies a response to this resource and reports whether it succeeded.
    ///
    /// - No response (transport failure): failure, nothing captured.
    /// - 2xx: success. A non-empty object body replaces every attribute;
    ///   any other body leaves the attributes untouched.
    /// - Otherwise: failure. An `errors` field in the body is kept in
    ///   [`response_errors`](Self::response_errors).
    ///
    /// Previously captured errors are cleared in every case.
    pub fn parse_response(&mut self, response: Option<&HttpResponse>) -> bool {
        self.response_errors = None;

        let Some(response) = response else {
            return false;
        };

        if response.is_ok() {
            if let Some(Value::Object(body)) = &response.body {
                if !body.is_empty() {
                    self.attributes = body.clone();
                }
            }
            return true;
        }

        self.response_errors = response.body_field("errors").cloned();
        false
    }
}

impl From<Attributes> for ResourceData {
    fn from(attributes: Attributes) -> Self {
        Self::new(attributes)
    }
}

impl Serialize for ResourceData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.attributes.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ResourceData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Attributes::deserialize(deserializer).map(Self::new)
    }
}
