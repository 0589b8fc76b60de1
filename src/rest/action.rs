//! Resource actions and the HTTP verbs they map to.
//!
//! # Example
//!
//! ```rust
//! use boleto_simples::rest::Action;
//! use boleto_simples::HttpMethod;
//!
//! assert_eq!(Action::Create.http_method(), HttpMethod::Post);
//! assert_eq!(Action::Update.http_method(), HttpMethod::Put);
//! assert_eq!(Action::Destroy.to_string(), "destroy");
//! ```

use std::fmt;

use crate::clients::HttpMethod;

/// Actions that can be performed on a REST resource.
///
/// The verb table is an exhaustive `match`, so adding an action without a
/// verb does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Create a new resource (POST /resources).
    Create,
    /// Update an existing resource (PUT /resources/{id}).
    Update,
    /// Find a single resource by ID (GET /resources/{id}).
    Find,
    /// Delete a resource (DELETE /resources/{id}).
    Destroy,
    /// Fetch a blank resource template (GET).
    New,
}

impl Action {
    /// Every action, in verb-table order.
    pub const ALL: [Self; 5] = [
        Self::Create,
        Self::Update,
        Self::Find,
        Self::Destroy,
        Self::New,
    ];

    /// Returns the HTTP method for this action.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Find | Self::New => HttpMethod::Get,
            Self::Destroy => HttpMethod::Delete,
        }
    }

    /// Returns `true` for actions that send the attribute envelope as body.
    #[must_use]
    pub const fn sends_attributes(&self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }

    /// Returns the action name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Find => "find",
            Self::Destroy => "destroy",
            Self::New => "new",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_table() {
        assert_eq!(Action::Create.http_method(), HttpMethod::Post);
        assert_eq!(Action::Update.http_method(), HttpMethod::Put);
        assert_eq!(Action::Find.http_method(), HttpMethod::Get);
        assert_eq!(Action::Destroy.http_method(), HttpMethod::Delete);
        assert_eq!(Action::New.http_method(), HttpMethod::Get);
    }

    #[test]
    fn test_only_writes_send_attributes() {
        let senders: Vec<Action> = Action::ALL
            .into_iter()
            .filter(Action::sends_attributes)
            .collect();
        assert_eq!(senders, vec![Action::Create, Action::Update]);
    }

    #[test]
    fn test_action_names() {
        let names: Vec<String> = Action::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["create", "update", "find", "destroy", "new"]);
    }
}
