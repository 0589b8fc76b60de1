//! Query string encoding for list parameters.
//!
//! Parameters are a JSON object flattened into ordered key/value pairs the
//! way Rails-style APIs expect them:
//!
//! - scalars become `key=value`
//! - `null` values are skipped
//! - arrays become one `key[]=value` pair per element
//! - nested objects become `parent[child]=value`

use serde_json::Value;

use crate::rest::Attributes;

/// Flattens list parameters into query pairs.
///
/// # Example
///
/// ```rust
/// use boleto_simples::rest::to_query;
/// use serde_json::json;
///
/// let params = json!({
///     "page": 2,
///     "q": {"status": ["opened", "overdue"]},
/// });
///
/// let query = to_query(params.as_object().unwrap());
/// assert_eq!(
///     query,
///     vec![
///         ("page".to_string(), "2".to_string()),
///         ("q[status][]".to_string(), "opened".to_string()),
///         ("q[status][]".to_string(), "overdue".to_string()),
///     ]
/// );
/// ```
#[must_use]
pub fn to_query(params: &Attributes) -> Vec<(String, String)> {
    let mut query = Vec::new();
    for (key, value) in params {
        push_value(&mut query, key.clone(), value);
    }
    query
}

fn push_value(query: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(s) => query.push((key, s.clone())),
        Value::Number(n) => query.push((key, n.to_string())),
        Value::Bool(b) => query.push((key, b.to_string())),
        Value::Array(items) => {
            let key = format!("{key}[]");
            for item in items {
                push_value(query, key.clone(), item);
            }
        }
        Value::Object(map) => {
            for (child, item) in map {
                push_value(query, format!("{key}[{child}]"), item);
            }
        }
    }
}
