//! Schemaless documents and the collections they live in.

use serde_json::Value;

use crate::error::CoreError;

/// A stored record: a flat JSON object owned by the document store.
pub type Document = serde_json::Map<String, Value>;

/// Field holding the store-assigned identifier of every document.
pub const ID_FIELD: &str = "_id";

/// Collection names (the deployed database is `blog`).
pub mod collections {
    /// Blog posts.
    pub const BLOGS: &str = "blogs";
    /// Wish-list entries.
    pub const WISHES: &str = "wish";
}

/// Fields read by the wish lookups.
pub mod wish_fields {
    pub const EMAIL: &str = "email";
    pub const USER_ID: &str = "user_id";
}

/// Accept a JSON value only if it is an object.
///
/// Request bodies for inserts and the session payload must be objects; any
/// other JSON shape is a validation failure.
pub fn into_document(value: Value) -> Result<Document, CoreError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::Validation(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_is_accepted() {
        let doc = into_document(json!({ "blog_title": "Hello" })).unwrap();
        assert_eq!(doc["blog_title"], "Hello");
    }

    #[test]
    fn array_is_rejected() {
        let err = into_document(json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn null_is_rejected() {
        assert!(into_document(Value::Null).is_err());
    }
}
