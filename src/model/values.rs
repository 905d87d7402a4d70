//! Value shapes shared by property values, property configs and rich text.

use super::property_value::PropertyTypeValue;
use super::tagged::{serialize_absent, serialize_tagged, TaggedObject};
use crate::types::{Color, FileType, FormulaResultType, RollupType};
use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Select option
///
/// Every field is optional: outbound values usually name an option and let
/// the service fill in id and color.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl SelectOption {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A calendar date or a full timestamp, exactly as the service sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotionDate {
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
}

impl NotionDate {
    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(timestamp) => Ok(NotionDate::DateTime(timestamp)),
            Err(_) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(NotionDate::Date),
        }
    }

    /// The calendar day, dropping any time component.
    pub fn date_naive(&self) -> NaiveDate {
        match self {
            NotionDate::Date(date) => *date,
            NotionDate::DateTime(timestamp) => timestamp.date_naive(),
        }
    }
}

impl fmt::Display for NotionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotionDate::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            NotionDate::DateTime(timestamp) => {
                write!(f, "{}", timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

impl From<NaiveDate> for NotionDate {
    fn from(date: NaiveDate) -> Self {
        NotionDate::Date(date)
    }
}

impl From<DateTime<Utc>> for NotionDate {
    fn from(timestamp: DateTime<Utc>) -> Self {
        NotionDate::DateTime(timestamp.fixed_offset())
    }
}

impl Serialize for NotionDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NotionDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NotionDate::parse(&raw).map_err(|e| {
            serde::de::Error::custom(format!("invalid date {:?}: {}", raw, e))
        })
    }
}

/// Date value with optional end and time zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: NotionDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NotionDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl DateValue {
    pub fn on(start: impl Into<NotionDate>) -> Self {
        Self {
            start: start.into(),
            end: None,
            time_zone: None,
        }
    }
}

/// Computed value of a formula property.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaResult {
    String(Option<String>),
    Number(Option<f64>),
    Boolean(Option<bool>),
    Date(Option<DateValue>),
    Unrecognized { kind: String, payload: Value },
}

impl FormulaResult {
    pub fn kind(&self) -> FormulaResultType {
        match self {
            FormulaResult::String(_) => FormulaResultType::String,
            FormulaResult::Number(_) => FormulaResultType::Number,
            FormulaResult::Boolean(_) => FormulaResultType::Boolean,
            FormulaResult::Date(_) => FormulaResultType::Date,
            FormulaResult::Unrecognized { kind, .. } => FormulaResultType::from(kind.as_str()),
        }
    }
}

impl Serialize for FormulaResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        match self {
            FormulaResult::String(v) => serialize_tagged(serializer, kind.as_str(), v),
            FormulaResult::Number(v) => serialize_tagged(serializer, kind.as_str(), v),
            FormulaResult::Boolean(v) => serialize_tagged(serializer, kind.as_str(), v),
            FormulaResult::Date(v) => serialize_tagged(serializer, kind.as_str(), v),
            FormulaResult::Unrecognized { kind, payload } => {
                serialize_tagged(serializer, kind, payload)
            }
        }
    }
}

impl<'de> Deserialize<'de> for FormulaResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = TaggedObject::read(deserializer)?;
        let tag = object.require_tag()?;
        Ok(match FormulaResultType::from(tag.as_str()) {
            FormulaResultType::String => FormulaResult::String(object.payload(&tag)?),
            FormulaResultType::Number => FormulaResult::Number(object.payload(&tag)?),
            FormulaResultType::Boolean => FormulaResult::Boolean(object.payload(&tag)?),
            FormulaResultType::Date => FormulaResult::Date(object.payload(&tag)?),
            FormulaResultType::Unrecognized(_) => FormulaResult::Unrecognized {
                payload: object.raw(&tag),
                kind: tag,
            },
        })
    }
}

/// Aggregate produced by a rollup property.
#[derive(Debug, Clone, PartialEq)]
pub enum RollupValue {
    Number(Option<f64>),
    Date(Option<DateValue>),
    /// One untitled property value per related page.
    Array(Vec<PropertyTypeValue>),
    Unrecognized { kind: String, payload: Value },
}

impl RollupValue {
    pub fn kind(&self) -> RollupType {
        match self {
            RollupValue::Number(_) => RollupType::Number,
            RollupValue::Date(_) => RollupType::Date,
            RollupValue::Array(_) => RollupType::Array,
            RollupValue::Unrecognized { kind, .. } => RollupType::from(kind.as_str()),
        }
    }
}

impl Serialize for RollupValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        match self {
            RollupValue::Number(v) => serialize_tagged(serializer, kind.as_str(), v),
            RollupValue::Date(v) => serialize_tagged(serializer, kind.as_str(), v),
            RollupValue::Array(v) => serialize_tagged(serializer, kind.as_str(), v),
            RollupValue::Unrecognized { kind, payload } => {
                serialize_tagged(serializer, kind, payload)
            }
        }
    }
}

impl<'de> Deserialize<'de> for RollupValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = TaggedObject::read(deserializer)?;
        let tag = object.require_tag()?;
        Ok(match RollupType::from(tag.as_str()) {
            RollupType::Number => RollupValue::Number(object.payload(&tag)?),
            RollupType::Date => RollupValue::Date(object.payload(&tag)?),
            RollupType::Array => {
                let items: Option<Vec<PropertyTypeValue>> = object.payload(&tag)?;
                RollupValue::Array(items.unwrap_or_default())
            }
            RollupType::Unrecognized(_) => RollupValue::Unrecognized {
                payload: object.raw(&tag),
                kind: tag,
            },
        })
    }
}

/// A file attached to a page property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub source: FileSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<DateTime<Utc>>,
}

/// Where a file's bytes live. Older payloads name a file without saying
/// where it is stored; those decode as `Unspecified`.
#[derive(Debug, Clone, PartialEq)]
pub enum FileSource {
    External(ExternalFile),
    Hosted(HostedFile),
    Unspecified,
    Unrecognized { kind: String, payload: Value },
}

impl FileSource {
    pub fn kind(&self) -> Option<FileType> {
        match self {
            FileSource::External(_) => Some(FileType::External),
            FileSource::Hosted(_) => Some(FileType::Hosted),
            FileSource::Unspecified => None,
            FileSource::Unrecognized { kind, .. } => Some(FileType::from(kind.as_str())),
        }
    }
}

impl Serialize for FileSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FileSource::External(file) => serialize_tagged(serializer, FileType::External.as_str(), file),
            FileSource::Hosted(file) => serialize_tagged(serializer, FileType::Hosted.as_str(), file),
            FileSource::Unspecified => serialize_absent(serializer),
            FileSource::Unrecognized { kind, payload } => {
                serialize_tagged(serializer, kind, payload)
            }
        }
    }
}

impl<'de> Deserialize<'de> for FileSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = TaggedObject::read(deserializer)?;
        let Some(tag) = object.take_tag()? else {
            return Ok(FileSource::Unspecified);
        };
        Ok(match FileType::from(tag.as_str()) {
            FileType::External => FileSource::External(object.payload(&tag)?),
            FileType::Hosted => FileSource::Hosted(object.payload(&tag)?),
            FileType::Unrecognized(_) => FileSource::Unrecognized {
                payload: object.raw(&tag),
                kind: tag,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn date_only_and_timestamp_dates_round_trip() {
        let value: DateValue = serde_json::from_value(json!({
            "start": "2021-05-11",
            "end": "2021-05-12T09:30:00.000-04:00"
        }))
        .unwrap();
        assert!(matches!(value.start, NotionDate::Date(_)));
        assert!(matches!(value.end, Some(NotionDate::DateTime(_))));
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"start": "2021-05-11", "end": "2021-05-12T09:30:00.000-04:00"})
        );
    }

    #[test]
    fn formula_reads_only_its_own_payload() {
        let result: FormulaResult =
            serde_json::from_value(json!({"type": "boolean", "boolean": true, "number": 5}))
                .unwrap();
        assert_eq!(result, FormulaResult::Boolean(Some(true)));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"type": "boolean", "boolean": true})
        );
    }

    #[test]
    fn unknown_rollup_kind_keeps_raw_payload() {
        let rollup: RollupValue =
            serde_json::from_value(json!({"type": "incomplete", "incomplete": {}})).unwrap();
        assert_eq!(rollup.kind(), RollupType::Unrecognized("incomplete".to_string()));
        assert_eq!(
            serde_json::to_value(&rollup).unwrap(),
            json!({"type": "incomplete", "incomplete": {}})
        );
    }

    #[test]
    fn rollup_array_holds_property_values() {
        let rollup: RollupValue = serde_json::from_value(json!({
            "type": "array",
            "array": [{"type": "number", "number": 2}, {"type": "checkbox", "checkbox": true}]
        }))
        .unwrap();
        match rollup {
            RollupValue::Array(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0], PropertyTypeValue::Number(Some(2.0)));
                assert_eq!(items[1], PropertyTypeValue::Checkbox(true));
            }
            other => panic!("expected array rollup, got {other:?}"),
        }
    }

    #[test]
    fn file_without_type_is_unspecified() {
        let file: FileObject = serde_json::from_value(json!({"name": "report.pdf"})).unwrap();
        assert_eq!(file.source, FileSource::Unspecified);
        assert_eq!(serde_json::to_value(&file).unwrap(), json!({"name": "report.pdf"}));
    }

    #[test]
    fn external_file_round_trips() {
        let raw = json!({
            "name": "logo",
            "type": "external",
            "external": {"url": "https://example.com/logo.png"}
        });
        let file: FileObject = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(file.source.kind(), Some(FileType::External));
        assert_eq!(serde_json::to_value(&file).unwrap(), raw);
    }
}
