//! Response envelopes and outbound request bodies.

use super::block::Block;
use super::property_value::PropertyValue;
use super::Page;
use crate::types::{ObjectType, PropertyName};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The generic shape every response is checked against before the typed
/// decode. Only `object == "error"` bodies carry a string `code` and
/// `message`; on success bodies the same keys may hold anything (a `code`
/// block has a `code` object), so they are kept raw until needed.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub object: Option<ObjectType>,
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ResponseEnvelope {
    pub fn is_error(&self) -> bool {
        self.object == Some(ObjectType::Error)
    }

    /// The error code, verbatim when it is a string.
    pub fn error_code(&self) -> String {
        field_text(self.code.as_ref())
    }

    pub fn error_message(&self) -> String {
        field_text(self.message.as_ref())
    }
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// One page of a paginated list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectType>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Body of `PATCH`-style page updates: the property map and nothing else.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePageRequest<'a> {
    pub properties: &'a IndexMap<PropertyName, PropertyValue>,
}

impl<'a> UpdatePageRequest<'a> {
    /// Takes only the properties of `page`; its id, parent and other
    /// resource fields are never sent.
    pub fn from_page(page: &'a Page) -> Self {
        Self {
            properties: &page.properties,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AppendBlockChildrenRequest<'a> {
    pub children: &'a [Block],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Parent;
    use crate::types::PageId;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn error_envelope_is_detected() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find page"
        }))
        .unwrap();
        assert!(envelope.is_error());
        assert_eq!(envelope.error_code(), "object_not_found");
        assert_eq!(envelope.error_message(), "Could not find page");
    }

    #[test]
    fn code_block_body_is_not_an_error_envelope() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({
            "object": "block",
            "id": "b-1",
            "type": "code",
            "code": {"rich_text": [], "language": "rust"}
        }))
        .unwrap();
        assert!(!envelope.is_error());
    }

    #[test]
    fn list_defaults_when_fields_missing() {
        let list: ListResponse<Block> = serde_json::from_value(json!({"object": "list"})).unwrap();
        assert!(list.results.is_empty());
        assert!(!list.has_more);
        assert_eq!(list.next_cursor, None);
    }

    #[test]
    fn update_request_carries_only_properties() {
        let page = Page {
            id: Some(PageId::parse("p-1").unwrap()),
            object: Some(ObjectType::Page),
            parent: Some(Parent::Workspace),
            ..Page::default()
        }
        .with_property("Name", PropertyValue::title("Renamed"));

        let body = serde_json::to_value(UpdatePageRequest::from_page(&page)).unwrap();
        assert_eq!(
            body,
            json!({"properties": {"Name": {
                "type": "title",
                "title": [{"type": "text", "text": {"content": "Renamed"}}]
            }}})
        );
    }
}
