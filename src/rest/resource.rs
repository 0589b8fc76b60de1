//! The [`Resource`] trait: CRUD operations over an attribute bag.
//!
//! A resource type only supplies its names and access to its
//! [`ResourceData`]; `find()`, `create()`, `all()`, `save()`, `destroy()` and
//! `perform()` are provided by the trait.
//!
//! # Implementing a Resource
//!
//! Most types are declared with the [`resource!`](crate::resource) macro.
//! Implementing the trait by hand only takes the three name constants and
//! three accessors:
//!
//! ```rust
//! use boleto_simples::rest::{Resource, ResourceData};
//!
//! #[derive(Debug, Clone, Default)]
//! pub struct Product(ResourceData);
//!
//! impl Resource for Product {
//!     const NAME: &'static str = "Product";
//!     const ELEMENT_NAME: &'static str = "product";
//!     const ELEMENT_NAME_PLURAL: &'static str = "products";
//!
//!     fn from_data(data: ResourceData) -> Self {
//!         Self(data)
//!     }
//!
//!     fn data(&self) -> &ResourceData {
//!         &self.0
//!     }
//!
//!     fn data_mut(&mut self) -> &mut ResourceData {
//!         &mut self.0
//!     }
//! }
//!
//! let mut product = Product::default();
//! assert_eq!(product.path(None), "products");
//!
//! product.set("id", 12);
//! assert_eq!(product.path(None), "products/12");
//! ```

use serde_json::Value;

use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::rest::{
    to_query, Action, Attributes, LastRequest, Outcome, ResourceData, ResourceError,
    ResourceResponse,
};

/// A remote record that can be fetched, created, updated, and destroyed.
///
/// # Associated Constants
///
/// - `NAME`: The type name used in error messages (e.g., "BankBillet")
/// - `ELEMENT_NAME`: The singular key wrapping request bodies (e.g., "bank_billet")
/// - `ELEMENT_NAME_PLURAL`: The collection path segment (e.g., "bank_billets")
///
/// # Results
///
/// HTTP failures are not errors. Operations that reached the network return
/// `Ok` with a success flag and the [`LastRequest`] they produced; the
/// resource keeps whatever `errors` payload the server sent. `Err` means the
/// operation was refused before anything was sent.
#[allow(async_fn_in_trait)]
pub trait Resource: Sized + Send + Sync {
    /// The type name of the resource (e.g., "BankBillet").
    const NAME: &'static str;

    /// The singular name wrapping request bodies (e.g., "bank_billet").
    const ELEMENT_NAME: &'static str;

    /// The plural name used in URL paths (e.g., "bank_billets").
    const ELEMENT_NAME_PLURAL: &'static str;

    /// Wraps existing resource data.
    fn from_data(data: ResourceData) -> Self;

    /// Returns the resource data.
    fn data(&self) -> &ResourceData;

    /// Returns the resource data mutably.
    fn data_mut(&mut self) -> &mut ResourceData;

    /// Creates an unpersisted resource seeded with `attributes`.
    ///
    /// Nothing is sent; use [`save`](Self::save) or [`create`](Self::create)
    /// to persist it.
    #[must_use]
    fn new(attributes: Attributes) -> Self {
        Self::from_data(ResourceData::new(attributes))
    }

    /// Returns the full attribute map.
    fn attributes(&self) -> &Attributes {
        self.data().attributes()
    }

    /// Returns an attribute, or `None` when it is not set.
    fn get(&self, key: &str) -> Option<&Value> {
        self.data().get(key)
    }

    /// Sets an attribute, overwriting any previous value.
    fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data_mut().set(key, value);
    }

    /// Returns the `id` attribute when it is present and not null.
    fn id(&self) -> Option<&Value> {
        self.data().id()
    }

    /// Returns `true` if the resource has no non-null `id`.
    fn is_new(&self) -> bool {
        self.data().is_new()
    }

    /// Returns `true` if the resource has a non-null `id`.
    fn is_persisted(&self) -> bool {
        !self.is_new()
    }

    /// Returns the `errors` payload of the last failed response.
    fn response_errors(&self) -> Option<&Value> {
        self.data().response_errors()
    }

    /// Returns the request path of this resource.
    ///
    /// `<plural>` for a new resource, `<plural>/<id>` once persisted, with
    /// `action` appended as a final segment when given.
    fn path(&self, action: Option<&str>) -> String {
        let mut path = Self::ELEMENT_NAME_PLURAL.to_string();
        if let Some(id) = self.id() {
            path.push('/');
            path.push_str(&id_segment(id));
        }
        if let Some(action) = action {
            path.push('/');
            path.push_str(action);
        }
        path
    }

    /// Applies a response to this resource; see [`ResourceData::parse_response`].
    fn parse_response(&mut self, response: Option<&HttpResponse>) -> bool {
        self.data_mut().parse_response(response)
    }

    /// Finds a single resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without sending anything if `id`
    /// is null, blank, zero (`0` or `"0"`), a boolean, an array or an object.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = BankBillet::find(&client, 42).await?;
    /// if response.success() {
    ///     println!("Status: {:?}", response.get("status"));
    /// }
    /// ```
    async fn find(
        client: &HttpClient,
        id: impl Into<Value>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let id = id.into();
        if !is_usable_id(&id) {
            return Err(ResourceError::MissingId {
                resource: Self::NAME,
            });
        }

        let mut resource = Self::new(Attributes::new());
        resource.set("id", id);
        let outcome = request(client, &mut resource, Action::Find).await?;

        Ok(ResourceResponse::new(resource, outcome))
    }

    /// Builds a resource from `attributes` and saves it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request could not be built.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let attributes = json!({"person_name": "Fulano", "cnpj_cpf": "12345678909"});
    /// let response = Customer::create(&client, attributes.as_object().unwrap().clone()).await?;
    /// if !response.success() {
    ///     println!("Rejected: {:?}", response.response_errors());
    /// }
    /// ```
    async fn create(
        client: &HttpClient,
        attributes: Attributes,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let mut resource = Self::new(attributes);
        let outcome = resource.save(client).await?;
        Ok(ResourceResponse::new(resource, outcome))
    }

    /// Lists resources, passing `params` as query parameters.
    ///
    /// Each object element of the response array becomes one resource, in
    /// response order. A failed request, an empty body or a non-array body
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request could not be built.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let params = json!({"page": 2, "per_page": 50});
    /// let response = BankBillet::all(&client, params.as_object()).await?;
    /// for billet in response.iter() {
    ///     println!("{:?}", billet.id());
    /// }
    /// ```
    async fn all(
        client: &HttpClient,
        params: Option<&Attributes>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, Self::ELEMENT_NAME_PLURAL);
        if let Some(params) = params {
            builder = builder.query(to_query(params));
        }
        let last_request = LastRequest::perform(client, builder.build()?).await;

        let success = last_request.is_ok();
        let resources = match last_request.response.as_ref() {
            Some(response) if success => match &response.body {
                Some(Value::Array(items)) => items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|attributes| Self::new(attributes.clone()))
                    .collect(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        Ok(ResourceResponse::new(
            resources,
            Outcome::new(success, last_request),
        ))
    }

    /// Creates (POST) the resource if it is new, otherwise updates it (PUT).
    ///
    /// The body is the attribute map wrapped in [`ELEMENT_NAME`](Self::ELEMENT_NAME).
    /// On success the attributes are replaced by the response body; on
    /// failure the server's `errors` are kept in
    /// [`response_errors`](Self::response_errors).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request could not be built.
    async fn save(&mut self, client: &HttpClient) -> Result<Outcome, ResourceError> {
        let action = if self.is_new() {
            Action::Create
        } else {
            Action::Update
        };
        request(client, self, action).await
    }

    /// Deletes the resource.
    ///
    /// On success the `id` attribute is removed, so the resource is new again.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotPersisted`] without sending anything if
    /// the resource has no id.
    async fn destroy(&mut self, client: &HttpClient) -> Result<Outcome, ResourceError> {
        if self.is_new() {
            return Err(ResourceError::NotPersisted {
                resource: Self::NAME,
                operation: Action::Destroy.to_string(),
            });
        }

        let outcome = request(client, self, Action::Destroy).await?;
        if outcome.success() {
            self.data_mut().remove("id");
        }
        Ok(outcome)
    }

    /// Sends a member action such as `PUT bank_billets/<id>/cancel`.
    ///
    /// POST and PUT carry an empty JSON object. The response is applied
    /// through [`parse_response`](Self::parse_response).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotPersisted`] without sending anything if
    /// the resource has no id.
    async fn perform(
        &mut self,
        client: &HttpClient,
        action: &str,
        method: HttpMethod,
    ) -> Result<Outcome, ResourceError> {
        if self.is_new() {
            return Err(ResourceError::NotPersisted {
                resource: Self::NAME,
                operation: action.to_string(),
            });
        }

        let mut builder = HttpRequest::builder(method, self.path(Some(action)));
        if matches!(method, HttpMethod::Post | HttpMethod::Put) {
            builder = builder
                .body(Value::Object(Attributes::new()))
                .body_type(DataType::Json);
        }
        let last_request = LastRequest::perform(client, builder.build()?).await;

        let success = self.parse_response(last_request.response.as_ref());
        Ok(Outcome::new(success, last_request))
    }
}

/// Sends `action` for `resource` and applies the response to it.
async fn request<R: Resource>(
    client: &HttpClient,
    resource: &mut R,
    action: Action,
) -> Result<Outcome, ResourceError> {
    let mut builder = HttpRequest::builder(action.http_method(), resource.path(None));
    if action.sends_attributes() {
        builder = builder
            .body(envelope::<R>(resource.attributes()))
            .body_type(DataType::Json);
    }
    let last_request = LastRequest::perform(client, builder.build()?).await;

    let success = resource.parse_response(last_request.response.as_ref());
    Ok(Outcome::new(success, last_request))
}

/// Wraps `attributes` as `{ "<element_name>": { ... } }`.
fn envelope<R: Resource>(attributes: &Attributes) -> Value {
    let mut body = Attributes::new();
    body.insert(
        R::ELEMENT_NAME.to_string(),
        Value::Object(attributes.clone()),
    );
    Value::Object(body)
}

fn is_usable_id(id: &Value) -> bool {
    match id {
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.trim().is_empty() && s != "0",
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => false,
    }
}

fn id_segment(id: &Value) -> String {
    match id {
        Value::String(s) => urlencoding::encode(s).into_owned(),
        other => urlencoding::encode(&other.to_string()).into_owned(),
    }
}
