//! Typed resources exchanged with the Notion API.

mod block;
mod envelope;
mod property_config;
mod property_value;
mod rich_text;
mod tagged;
mod user;
mod values;

pub use block::{Block, BlockContent, ChildTitle, CodeBlock, TextBlock, ToDoBlock};
pub use envelope::{AppendBlockChildrenRequest, ListResponse, ResponseEnvelope, UpdatePageRequest};
pub use property_config::{
    FormulaConfig, NumberConfig, PropertyConfig, PropertyTypeConfig, RelationConfig,
    RollupConfig, SelectConfig,
};
pub use property_value::{PropertyTypeValue, PropertyValue};
pub use rich_text::{
    plain_text, Annotations, DatabaseReference, Equation, Link, Mention, PageReference, RichText,
    RichTextContent, TextContent,
};
pub use tagged::EmptyObject;
pub use user::{Bot, Person, User, UserKind};
pub use values::{
    DateValue, ExternalFile, FileObject, FileSource, FormulaResult, HostedFile, NotionDate,
    RollupValue, SelectOption,
};

use crate::types::{BlockId, DatabaseId, ObjectType, PageId, ParentType, PropertyName};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tagged::{serialize_tagged, TaggedObject};

/// Parent reference with typed IDs
#[derive(Debug, Clone, PartialEq)]
pub enum Parent {
    Database(DatabaseId),
    Page(PageId),
    Block(BlockId),
    Workspace,
    Unrecognized { kind: String, payload: Value },
}

impl Parent {
    pub fn kind(&self) -> ParentType {
        match self {
            Parent::Database(_) => ParentType::Database,
            Parent::Page(_) => ParentType::Page,
            Parent::Block(_) => ParentType::Block,
            Parent::Workspace => ParentType::Workspace,
            Parent::Unrecognized { kind, .. } => ParentType::from(kind.as_str()),
        }
    }
}

impl Serialize for Parent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        let tag = kind.as_str();
        match self {
            Parent::Database(id) => serialize_tagged(serializer, tag, id),
            Parent::Page(id) => serialize_tagged(serializer, tag, id),
            Parent::Block(id) => serialize_tagged(serializer, tag, id),
            Parent::Workspace => serialize_tagged(serializer, tag, &true),
            Parent::Unrecognized { payload, .. } => serialize_tagged(serializer, tag, payload),
        }
    }
}

impl<'de> Deserialize<'de> for Parent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = TaggedObject::read(deserializer)?;
        let tag = object.require_tag()?;
        Ok(match ParentType::from(tag.as_str()) {
            ParentType::Database => Parent::Database(object.payload(&tag)?),
            ParentType::Page => Parent::Page(object.payload(&tag)?),
            ParentType::Block => Parent::Block(object.payload(&tag)?),
            ParentType::Workspace => Parent::Workspace,
            ParentType::Unrecognized(_) => Parent::Unrecognized {
                payload: object.raw(&tag),
                kind: tag,
            },
        })
    }
}

/// A Notion page.
///
/// Every resource field is optional: a page read from the service has them
/// all, a page built for `create_page` carries only a parent and properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PageId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<PropertyName, PropertyValue>,
}

impl Page {
    pub fn new(parent: Parent) -> Self {
        Self {
            parent: Some(parent),
            ..Self::default()
        }
    }

    pub fn with_property(mut self, name: impl Into<PropertyName>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Plain text of the page's title property.
    pub fn title(&self) -> Option<String> {
        self.properties
            .values()
            .find_map(|value| match &value.value {
                PropertyTypeValue::Title(text) => Some(plain_text(text)),
                _ => None,
            })
    }
}

/// A Notion database: its title and the schema of its columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectType>,
    pub id: DatabaseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<RichText>,
    #[serde(default)]
    pub properties: IndexMap<PropertyName, PropertyConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl Database {
    pub fn title_text(&self) -> String {
        plain_text(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parent_variants_round_trip() {
        for raw in [
            json!({"type": "database_id", "database_id": "d9824bdc-8445-4327-be8b-5b47500af6ce"}),
            json!({"type": "page_id", "page_id": "59833787-2cf9-4fdf-8782-e53db20768a5"}),
            json!({"type": "workspace", "workspace": true}),
        ] {
            let parent: Parent = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(serde_json::to_value(&parent).unwrap(), raw);
        }
    }

    #[test]
    fn created_page_body_omits_unset_fields() {
        let database = DatabaseId::parse("d9824bdc84454327be8b5b47500af6ce").unwrap();
        let page = Page::new(Parent::Database(database))
            .with_property("Name", PropertyValue::title("Tuscan kale"))
            .with_property("Price", PropertyValue::number(2.5));
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({
                "parent": {"type": "database_id", "database_id": "d9824bdc84454327be8b5b47500af6ce"},
                "properties": {
                    "Name": {"type": "title", "title": [{"type": "text", "text": {"content": "Tuscan kale"}}]},
                    "Price": {"type": "number", "number": 2.5}
                }
            })
        );
    }

    #[test]
    fn page_properties_keep_service_order() {
        let page: Page = serde_json::from_value(json!({
            "object": "page",
            "id": "p-1",
            "properties": {
                "Zeta": {"id": "z", "type": "checkbox", "checkbox": false},
                "Alpha": {"id": "title", "type": "title", "title": [
                    {"type": "text", "text": {"content": "Plan"}, "plain_text": "Plan"}
                ]}
            }
        }))
        .unwrap();
        let names: Vec<&str> = page.properties.keys().map(PropertyName::as_str).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(page.title().as_deref(), Some("Plan"));
    }
}
