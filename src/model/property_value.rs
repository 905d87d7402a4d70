use super::rich_text::{PageReference, RichText};
use super::tagged::{serialize_tagged, TaggedObject};
use super::user::User;
use super::values::{DateValue, FileObject, FormulaResult, RollupValue, SelectOption};
use crate::types::PropertyType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A page property value with its property id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub value: PropertyTypeValue,
}

impl PropertyValue {
    /// Returns the Notion API type name for this property value.
    pub fn kind(&self) -> PropertyType {
        self.value.kind()
    }

    pub fn title(text: impl Into<String>) -> Self {
        PropertyTypeValue::Title(vec![RichText::text(text)]).into()
    }

    pub fn rich_text(text: impl Into<String>) -> Self {
        PropertyTypeValue::RichText(vec![RichText::text(text)]).into()
    }

    pub fn number(number: f64) -> Self {
        PropertyTypeValue::Number(Some(number)).into()
    }

    pub fn checkbox(checked: bool) -> Self {
        PropertyTypeValue::Checkbox(checked).into()
    }

    pub fn select(name: impl Into<String>) -> Self {
        PropertyTypeValue::Select(Some(SelectOption::named(name))).into()
    }

    pub fn multi_select<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        PropertyTypeValue::MultiSelect(names.into_iter().map(SelectOption::named).collect()).into()
    }

    pub fn date(date: DateValue) -> Self {
        PropertyTypeValue::Date(Some(date)).into()
    }

    pub fn url(url: impl Into<String>) -> Self {
        PropertyTypeValue::Url(Some(url.into())).into()
    }
}

impl From<PropertyTypeValue> for PropertyValue {
    fn from(value: PropertyTypeValue) -> Self {
        Self { id: None, value }
    }
}

/// The typed payload of a page property, selected by its `type` tag.
///
/// Payloads the service sends as nullable (`"number": null`) are `Option`s;
/// sending `None` back clears the remote value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyTypeValue {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    Number(Option<f64>),
    Select(Option<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Status(Option<SelectOption>),
    Date(Option<DateValue>),
    Formula(FormulaResult),
    Relation(Vec<PageReference>),
    Rollup(RollupValue),
    People(Vec<User>),
    /// Legacy single-file payload.
    File(Option<FileObject>),
    Files(Vec<FileObject>),
    Checkbox(bool),
    Url(Option<String>),
    Email(Option<String>),
    PhoneNumber(Option<String>),
    CreatedTime(DateTime<Utc>),
    CreatedBy(User),
    LastEditedTime(DateTime<Utc>),
    LastEditedBy(User),
    Unrecognized { kind: String, payload: Value },
}

impl PropertyTypeValue {
    pub fn kind(&self) -> PropertyType {
        match self {
            PropertyTypeValue::Title(_) => PropertyType::Title,
            PropertyTypeValue::RichText(_) => PropertyType::RichText,
            PropertyTypeValue::Number(_) => PropertyType::Number,
            PropertyTypeValue::Select(_) => PropertyType::Select,
            PropertyTypeValue::MultiSelect(_) => PropertyType::MultiSelect,
            PropertyTypeValue::Status(_) => PropertyType::Status,
            PropertyTypeValue::Date(_) => PropertyType::Date,
            PropertyTypeValue::Formula(_) => PropertyType::Formula,
            PropertyTypeValue::Relation(_) => PropertyType::Relation,
            PropertyTypeValue::Rollup(_) => PropertyType::Rollup,
            PropertyTypeValue::People(_) => PropertyType::People,
            PropertyTypeValue::File(_) => PropertyType::File,
            PropertyTypeValue::Files(_) => PropertyType::Files,
            PropertyTypeValue::Checkbox(_) => PropertyType::Checkbox,
            PropertyTypeValue::Url(_) => PropertyType::Url,
            PropertyTypeValue::Email(_) => PropertyType::Email,
            PropertyTypeValue::PhoneNumber(_) => PropertyType::PhoneNumber,
            PropertyTypeValue::CreatedTime(_) => PropertyType::CreatedTime,
            PropertyTypeValue::CreatedBy(_) => PropertyType::CreatedBy,
            PropertyTypeValue::LastEditedTime(_) => PropertyType::LastEditedTime,
            PropertyTypeValue::LastEditedBy(_) => PropertyType::LastEditedBy,
            PropertyTypeValue::Unrecognized { kind, .. } => PropertyType::from(kind.as_str()),
        }
    }

    /// The rich text of title and text properties.
    pub fn as_rich_text(&self) -> Option<&[RichText]> {
        match self {
            PropertyTypeValue::Title(text) | PropertyTypeValue::RichText(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyTypeValue::Number(number) => *number,
            _ => None,
        }
    }
}

impl Serialize for PropertyTypeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        let tag = kind.as_str();
        match self {
            PropertyTypeValue::Title(v) | PropertyTypeValue::RichText(v) => {
                serialize_tagged(serializer, tag, v)
            }
            PropertyTypeValue::Number(v) => serialize_tagged(serializer, tag, v),
            PropertyTypeValue::Select(v) | PropertyTypeValue::Status(v) => {
                serialize_tagged(serializer, tag, v)
            }
            PropertyTypeValue::MultiSelect(v) => serialize_tagged(serializer, tag, v),
            PropertyTypeValue::Date(v) => serialize_tagged(serializer, tag, v),
            PropertyTypeValue::Formula(v) => serialize_tagged(serializer, tag, v),
            PropertyTypeValue::Relation(v) => serialize_tagged(serializer, tag, v),
            PropertyTypeValue::Rollup(v) => serialize_tagged(serializer, tag, v),
            PropertyTypeValue::People(v) => serialize_tagged(serializer, tag, v),
            PropertyTypeValue::File(v) => serialize_tagged(serializer, tag, v),
            PropertyTypeValue::Files(v) => serialize_tagged(serializer, tag, v),
            PropertyTypeValue::Checkbox(v) => serialize_tagged(serializer, tag, v),
            PropertyTypeValue::Url(v)
            | PropertyTypeValue::Email(v)
            | PropertyTypeValue::PhoneNumber(v) => serialize_tagged(serializer, tag, v),
            PropertyTypeValue::CreatedTime(v) | PropertyTypeValue::LastEditedTime(v) => {
                serialize_tagged(serializer, tag, v)
            }
            PropertyTypeValue::CreatedBy(v) | PropertyTypeValue::LastEditedBy(v) => {
                serialize_tagged(serializer, tag, v)
            }
            PropertyTypeValue::Unrecognized { payload, .. } => {
                serialize_tagged(serializer, tag, payload)
            }
        }
    }
}

impl<'de> Deserialize<'de> for PropertyTypeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = TaggedObject::read(deserializer)?;
        let tag = object.require_tag()?;
        Ok(match PropertyType::from(tag.as_str()) {
            PropertyType::Title => {
                let text: Option<Vec<RichText>> = object.payload(&tag)?;
                PropertyTypeValue::Title(text.unwrap_or_default())
            }
            PropertyType::RichText => {
                let text: Option<Vec<RichText>> = object.payload(&tag)?;
                PropertyTypeValue::RichText(text.unwrap_or_default())
            }
            PropertyType::Number => PropertyTypeValue::Number(object.payload(&tag)?),
            PropertyType::Select => PropertyTypeValue::Select(object.payload(&tag)?),
            PropertyType::MultiSelect => {
                let options: Option<Vec<SelectOption>> = object.payload(&tag)?;
                PropertyTypeValue::MultiSelect(options.unwrap_or_default())
            }
            PropertyType::Status => PropertyTypeValue::Status(object.payload(&tag)?),
            PropertyType::Date => PropertyTypeValue::Date(object.payload(&tag)?),
            PropertyType::Formula => PropertyTypeValue::Formula(object.payload(&tag)?),
            PropertyType::Relation => {
                let relations: Option<Vec<PageReference>> = object.payload(&tag)?;
                PropertyTypeValue::Relation(relations.unwrap_or_default())
            }
            PropertyType::Rollup => PropertyTypeValue::Rollup(object.payload(&tag)?),
            PropertyType::People => {
                let people: Option<Vec<User>> = object.payload(&tag)?;
                PropertyTypeValue::People(people.unwrap_or_default())
            }
            PropertyType::File => PropertyTypeValue::File(object.payload(&tag)?),
            PropertyType::Files => {
                let files: Option<Vec<FileObject>> = object.payload(&tag)?;
                PropertyTypeValue::Files(files.unwrap_or_default())
            }
            PropertyType::Checkbox => {
                let checked: Option<bool> = object.payload(&tag)?;
                PropertyTypeValue::Checkbox(checked.unwrap_or(false))
            }
            PropertyType::Url => PropertyTypeValue::Url(object.payload(&tag)?),
            PropertyType::Email => PropertyTypeValue::Email(object.payload(&tag)?),
            PropertyType::PhoneNumber => PropertyTypeValue::PhoneNumber(object.payload(&tag)?),
            PropertyType::CreatedTime => PropertyTypeValue::CreatedTime(object.payload(&tag)?),
            PropertyType::CreatedBy => PropertyTypeValue::CreatedBy(object.payload(&tag)?),
            PropertyType::LastEditedTime => {
                PropertyTypeValue::LastEditedTime(object.payload(&tag)?)
            }
            PropertyType::LastEditedBy => PropertyTypeValue::LastEditedBy(object.payload(&tag)?),
            PropertyType::Unrecognized(_) => PropertyTypeValue::Unrecognized {
                payload: object.raw(&tag),
                kind: tag,
            },
        })
    }
}
