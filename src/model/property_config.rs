//! Database schema: the definition of each typed column.

use super::tagged::{serialize_tagged, EmptyObject, TaggedObject};
use super::values::SelectOption;
use crate::types::{DatabaseId, NumberFormat, PropertyType, RollupFunction};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumberConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<NumberFormat>,
}

/// Allowed options of a select, multi-select or status column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaConfig {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationConfig {
    pub database_id: DatabaseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_id: Option<String>,
    pub function: RollupFunction,
}

/// The schema of one column, selected by its `type` tag. Kinds without
/// settings carry an empty `{}` payload on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyTypeConfig {
    Title,
    RichText,
    Number(NumberConfig),
    Select(SelectConfig),
    MultiSelect(SelectConfig),
    Status(SelectConfig),
    Date,
    People,
    File,
    Files,
    Checkbox,
    Url,
    Email,
    PhoneNumber,
    Formula(FormulaConfig),
    Relation(RelationConfig),
    Rollup(RollupConfig),
    CreatedTime,
    CreatedBy,
    LastEditedTime,
    LastEditedBy,
    Unrecognized { kind: String, payload: Value },
}

impl PropertyTypeConfig {
    pub fn kind(&self) -> PropertyType {
        match self {
            PropertyTypeConfig::Title => PropertyType::Title,
            PropertyTypeConfig::RichText => PropertyType::RichText,
            PropertyTypeConfig::Number(_) => PropertyType::Number,
            PropertyTypeConfig::Select(_) => PropertyType::Select,
            PropertyTypeConfig::MultiSelect(_) => PropertyType::MultiSelect,
            PropertyTypeConfig::Status(_) => PropertyType::Status,
            PropertyTypeConfig::Date => PropertyType::Date,
            PropertyTypeConfig::People => PropertyType::People,
            PropertyTypeConfig::File => PropertyType::File,
            PropertyTypeConfig::Files => PropertyType::Files,
            PropertyTypeConfig::Checkbox => PropertyType::Checkbox,
            PropertyTypeConfig::Url => PropertyType::Url,
            PropertyTypeConfig::Email => PropertyType::Email,
            PropertyTypeConfig::PhoneNumber => PropertyType::PhoneNumber,
            PropertyTypeConfig::Formula(_) => PropertyType::Formula,
            PropertyTypeConfig::Relation(_) => PropertyType::Relation,
            PropertyTypeConfig::Rollup(_) => PropertyType::Rollup,
            PropertyTypeConfig::CreatedTime => PropertyType::CreatedTime,
            PropertyTypeConfig::CreatedBy => PropertyType::CreatedBy,
            PropertyTypeConfig::LastEditedTime => PropertyType::LastEditedTime,
            PropertyTypeConfig::LastEditedBy => PropertyType::LastEditedBy,
            PropertyTypeConfig::Unrecognized { kind, .. } => PropertyType::from(kind.as_str()),
        }
    }

    /// Options of choice columns.
    pub fn options(&self) -> Option<&[SelectOption]> {
        match self {
            PropertyTypeConfig::Select(config)
            | PropertyTypeConfig::MultiSelect(config)
            | PropertyTypeConfig::Status(config) => Some(&config.options),
            _ => None,
        }
    }
}

impl Serialize for PropertyTypeConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        let tag = kind.as_str();
        match self {
            PropertyTypeConfig::Number(config) => serialize_tagged(serializer, tag, config),
            PropertyTypeConfig::Select(config)
            | PropertyTypeConfig::MultiSelect(config)
            | PropertyTypeConfig::Status(config) => serialize_tagged(serializer, tag, config),
            PropertyTypeConfig::Formula(config) => serialize_tagged(serializer, tag, config),
            PropertyTypeConfig::Relation(config) => serialize_tagged(serializer, tag, config),
            PropertyTypeConfig::Rollup(config) => serialize_tagged(serializer, tag, config),
            PropertyTypeConfig::Unrecognized { payload, .. } => {
                serialize_tagged(serializer, tag, payload)
            }
            _ => serialize_tagged(serializer, tag, &EmptyObject {}),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyTypeConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = TaggedObject::read(deserializer)?;
        let tag = object.require_tag()?;
        Ok(match PropertyType::from(tag.as_str()) {
            PropertyType::Number => {
                let config: Option<NumberConfig> = object.payload(&tag)?;
                PropertyTypeConfig::Number(config.unwrap_or_default())
            }
            PropertyType::Select => PropertyTypeConfig::Select(select_config(&mut object, &tag)?),
            PropertyType::MultiSelect => {
                PropertyTypeConfig::MultiSelect(select_config(&mut object, &tag)?)
            }
            PropertyType::Status => PropertyTypeConfig::Status(select_config(&mut object, &tag)?),
            PropertyType::Formula => PropertyTypeConfig::Formula(object.payload(&tag)?),
            PropertyType::Relation => PropertyTypeConfig::Relation(object.payload(&tag)?),
            PropertyType::Rollup => PropertyTypeConfig::Rollup(object.payload(&tag)?),
            PropertyType::Title => PropertyTypeConfig::Title,
            PropertyType::RichText => PropertyTypeConfig::RichText,
            PropertyType::Date => PropertyTypeConfig::Date,
            PropertyType::People => PropertyTypeConfig::People,
            PropertyType::File => PropertyTypeConfig::File,
            PropertyType::Files => PropertyTypeConfig::Files,
            PropertyType::Checkbox => PropertyTypeConfig::Checkbox,
            PropertyType::Url => PropertyTypeConfig::Url,
            PropertyType::Email => PropertyTypeConfig::Email,
            PropertyType::PhoneNumber => PropertyTypeConfig::PhoneNumber,
            PropertyType::CreatedTime => PropertyTypeConfig::CreatedTime,
            PropertyType::CreatedBy => PropertyTypeConfig::CreatedBy,
            PropertyType::LastEditedTime => PropertyTypeConfig::LastEditedTime,
            PropertyType::LastEditedBy => PropertyTypeConfig::LastEditedBy,
            PropertyType::Unrecognized(_) => PropertyTypeConfig::Unrecognized {
                payload: object.raw(&tag),
                kind: tag,
            },
        })
    }
}

fn select_config<E: serde::de::Error>(
    object: &mut TaggedObject<E>,
    tag: &str,
) -> Result<SelectConfig, E> {
    let config: Option<SelectConfig> = object.payload(tag)?;
    Ok(config.unwrap_or_default())
}

/// A database column: its stable id, display name and typed schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub config: PropertyTypeConfig,
}

impl PropertyConfig {
    pub fn kind(&self) -> PropertyType {
        self.config.kind()
    }
}

impl From<PropertyTypeConfig> for PropertyConfig {
    fn from(config: PropertyTypeConfig) -> Self {
        Self {
            id: None,
            name: None,
            config,
        }
    }
}
