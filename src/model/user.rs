use super::tagged::{serialize_absent, serialize_tagged, TaggedObject};
use crate::types::{ObjectType, UserId, UserType};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bot {
    /// Who owns the integration: a workspace or a user. Kept raw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,
}

/// Person or bot details. Users embedded in other objects (`created_by`,
/// relation owners) often carry only an id; those decode as `Unspecified`.
#[derive(Debug, Clone, PartialEq)]
pub enum UserKind {
    Person(Person),
    Bot(Bot),
    Unspecified,
    Unrecognized { kind: String, payload: Value },
}

impl UserKind {
    pub fn kind(&self) -> Option<UserType> {
        match self {
            UserKind::Person(_) => Some(UserType::Person),
            UserKind::Bot(_) => Some(UserType::Bot),
            UserKind::Unspecified => None,
            UserKind::Unrecognized { kind, .. } => Some(UserType::from(kind.as_str())),
        }
    }
}

impl Serialize for UserKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            UserKind::Person(person) => serialize_tagged(serializer, UserType::Person.as_str(), person),
            UserKind::Bot(bot) => serialize_tagged(serializer, UserType::Bot.as_str(), bot),
            UserKind::Unspecified => serialize_absent(serializer),
            UserKind::Unrecognized { kind, payload } => serialize_tagged(serializer, kind, payload),
        }
    }
}

impl<'de> Deserialize<'de> for UserKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = TaggedObject::read(deserializer)?;
        let Some(tag) = object.take_tag()? else {
            return Ok(UserKind::Unspecified);
        };
        Ok(match UserType::from(tag.as_str()) {
            UserType::Person => {
                let person: Option<Person> = object.payload(&tag)?;
                UserKind::Person(person.unwrap_or_default())
            }
            UserType::Bot => {
                let bot: Option<Bot> = object.payload(&tag)?;
                UserKind::Bot(bot.unwrap_or_default())
            }
            UserType::Unrecognized(_) => UserKind::Unrecognized {
                payload: object.raw(&tag),
                kind: tag,
            },
        })
    }
}

/// A workspace member or integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectType>,
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub kind: UserKind,
}

impl User {
    /// A bare reference to a user, as used when assigning people.
    pub fn reference(id: UserId) -> Self {
        Self {
            object: Some(ObjectType::User),
            id,
            name: None,
            avatar_url: None,
            kind: UserKind::Unspecified,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match &self.kind {
            UserKind::Person(person) => person.email.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, self.email()) {
            (Some(name), _) => write!(f, "{}", name),
            (None, Some(email)) => write!(f, "{}", email),
            (None, None) => write!(f, "User {}", self.id),
        }
    }
}
