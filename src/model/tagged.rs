//! Wire codec for Notion's flat discriminated unions.
//!
//! Notion encodes a union as one object holding a `type` discriminator plus
//! a payload stored under a key equal to the discriminator:
//! `{"type": "number", "number": 42.5}`. Decoding reads the discriminator
//! first and only ever looks at the matching payload key, so a payload
//! sitting under the wrong key can never leak into the typed value.

use serde::de::{self, DeserializeOwned};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::marker::PhantomData;

pub(crate) type JsonMap = serde_json::Map<String, Value>;

/// Name of the discriminator field used by every union in the API.
pub(crate) const TYPE_FIELD: &str = "type";

/// The `{}` payload of kinds that carry no configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyObject {}

/// A union object read off the wire, waiting for its discriminator to be
/// inspected. `E` is the error type of the deserializer it came from.
pub(crate) struct TaggedObject<E> {
    map: JsonMap,
    _error: PhantomData<E>,
}

impl<E: de::Error> TaggedObject<E> {
    pub(crate) fn read<'de, D>(deserializer: D) -> Result<Self, E>
    where
        D: Deserializer<'de, Error = E>,
    {
        Ok(Self {
            map: JsonMap::deserialize(deserializer)?,
            _error: PhantomData,
        })
    }

    /// Removes the discriminator. Absent or null discriminators yield `None`.
    pub(crate) fn take_tag(&mut self) -> Result<Option<String>, E> {
        match self.map.remove(TYPE_FIELD) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(tag)) => Ok(Some(tag)),
            Some(other) => Err(E::invalid_type(
                unexpected(&other),
                &"a string discriminator",
            )),
        }
    }

    /// Removes the discriminator, failing when it is absent.
    pub(crate) fn require_tag(&mut self) -> Result<String, E> {
        self.take_tag()?.ok_or_else(|| E::missing_field(TYPE_FIELD))
    }

    /// Decodes the payload stored under `key`. A missing payload decodes as
    /// `null`, which suits the nullable payloads Notion sends for empty values.
    pub(crate) fn payload<T: DeserializeOwned>(&mut self, key: &str) -> Result<T, E> {
        let value = self.map.remove(key).unwrap_or(Value::Null);
        T::deserialize(value).map_err(|e| E::custom(format!("invalid `{}` payload: {}", key, e)))
    }

    /// Keeps the raw payload of a kind this client does not know.
    pub(crate) fn raw(&mut self, key: &str) -> Value {
        self.map.remove(key).unwrap_or(Value::Null)
    }
}

/// Writes `{"type": tag, tag: payload}`.
pub(crate) fn serialize_tagged<S, P>(serializer: S, tag: &str, payload: &P) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    P: Serialize + ?Sized,
{
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry(TYPE_FIELD, tag)?;
    map.serialize_entry(tag, payload)?;
    map.end()
}

/// Writes nothing; used by flattened unions whose discriminator was absent.
pub(crate) fn serialize_absent<S: Serializer>(serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_map(Some(0))?.end()
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Null => de::Unexpected::Unit,
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => de::Unexpected::Float(f),
            None => de::Unexpected::Other("number"),
        },
        Value::String(s) => de::Unexpected::Str(s),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> TaggedObject<serde_json::Error> {
        TaggedObject::read(value).unwrap()
    }

    #[test]
    fn payload_is_read_from_the_tag_key_only() {
        let mut obj = object(json!({"type": "number", "number": 3, "checkbox": true}));
        let tag = obj.require_tag().unwrap();
        let number: Option<f64> = obj.payload(&tag).unwrap();
        assert_eq!(number, Some(3.0));
        assert_eq!(obj.raw("checkbox"), json!(true));
    }

    #[test]
    fn non_string_tag_is_rejected() {
        let mut obj = object(json!({"type": 7}));
        assert!(obj.take_tag().is_err());
    }

    #[test]
    fn missing_tag_is_reported() {
        let mut obj = object(json!({}));
        assert!(obj.take_tag().unwrap().is_none());
        let err = obj.require_tag().unwrap_err();
        assert!(err.to_string().contains("type"));
    }

    #[test]
    fn tagged_serialization_is_flat() {
        let mut out = Vec::new();
        serialize_tagged(&mut serde_json::Serializer::new(&mut out), "url", &"https://a.b").unwrap();
        assert_eq!(
            serde_json::from_slice::<Value>(&out).unwrap(),
            json!({"type": "url", "url": "https://a.b"})
        );
    }
}
