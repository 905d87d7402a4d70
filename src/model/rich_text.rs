//! Rich text fragments: plain text, mentions and equations.

use super::tagged::{serialize_tagged, TaggedObject};
use super::user::User;
use super::values::DateValue;
use crate::types::{Color, DatabaseId, LinkType, MentionType, PageId, RichTextType};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Display annotations shared by every rich text fragment.
///
/// Each flag is optional so an outbound fragment only carries the styling
/// the caller actually chose.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Annotations {
    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }

    pub fn is_code(&self) -> bool {
        self.code.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<LinkType>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReference {
    pub id: PageId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseReference {
    pub id: DatabaseId,
}

/// What a mention points at.
#[derive(Debug, Clone, PartialEq)]
pub enum Mention {
    User(User),
    Page(PageReference),
    Database(DatabaseReference),
    Date(DateValue),
    Unrecognized { kind: String, payload: Value },
}

impl Mention {
    pub fn kind(&self) -> MentionType {
        match self {
            Mention::User(_) => MentionType::User,
            Mention::Page(_) => MentionType::Page,
            Mention::Database(_) => MentionType::Database,
            Mention::Date(_) => MentionType::Date,
            Mention::Unrecognized { kind, .. } => MentionType::from(kind.as_str()),
        }
    }
}

impl Serialize for Mention {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        match self {
            Mention::User(v) => serialize_tagged(serializer, kind.as_str(), v),
            Mention::Page(v) => serialize_tagged(serializer, kind.as_str(), v),
            Mention::Database(v) => serialize_tagged(serializer, kind.as_str(), v),
            Mention::Date(v) => serialize_tagged(serializer, kind.as_str(), v),
            Mention::Unrecognized { kind, payload } => serialize_tagged(serializer, kind, payload),
        }
    }
}

impl<'de> Deserialize<'de> for Mention {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = TaggedObject::read(deserializer)?;
        let tag = object.require_tag()?;
        Ok(match MentionType::from(tag.as_str()) {
            MentionType::User => Mention::User(object.payload(&tag)?),
            MentionType::Page => Mention::Page(object.payload(&tag)?),
            MentionType::Database => Mention::Database(object.payload(&tag)?),
            MentionType::Date => Mention::Date(object.payload(&tag)?),
            MentionType::Unrecognized(_) => Mention::Unrecognized {
                payload: object.raw(&tag),
                kind: tag,
            },
        })
    }
}

/// The variant part of a rich text fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum RichTextContent {
    Text(TextContent),
    Mention(Mention),
    Equation(Equation),
    Unrecognized { kind: String, payload: Value },
}

impl RichTextContent {
    pub fn kind(&self) -> RichTextType {
        match self {
            RichTextContent::Text(_) => RichTextType::Text,
            RichTextContent::Mention(_) => RichTextType::Mention,
            RichTextContent::Equation(_) => RichTextType::Equation,
            RichTextContent::Unrecognized { kind, .. } => RichTextType::from(kind.as_str()),
        }
    }
}

impl Serialize for RichTextContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        match self {
            RichTextContent::Text(v) => serialize_tagged(serializer, kind.as_str(), v),
            RichTextContent::Mention(v) => serialize_tagged(serializer, kind.as_str(), v),
            RichTextContent::Equation(v) => serialize_tagged(serializer, kind.as_str(), v),
            RichTextContent::Unrecognized { kind, payload } => {
                serialize_tagged(serializer, kind, payload)
            }
        }
    }
}

impl<'de> Deserialize<'de> for RichTextContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = TaggedObject::read(deserializer)?;
        let tag = object.require_tag()?;
        Ok(match RichTextType::from(tag.as_str()) {
            RichTextType::Text => RichTextContent::Text(object.payload(&tag)?),
            RichTextType::Mention => RichTextContent::Mention(object.payload(&tag)?),
            RichTextType::Equation => RichTextContent::Equation(object.payload(&tag)?),
            RichTextType::Unrecognized(_) => RichTextContent::Unrecognized {
                payload: object.raw(&tag),
                kind: tag,
            },
        })
    }
}

/// Rich text item with formatting annotations.
///
/// `plain_text` is computed by the service; outbound fragments leave it empty
/// and it is then omitted from the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub plain_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    #[serde(flatten)]
    pub content: RichTextContent,
}

impl RichText {
    /// Create a plain text item, the most common rich text variant.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            plain_text: String::new(),
            href: None,
            annotations: None,
            content: RichTextContent::Text(TextContent {
                content: content.into(),
                link: None,
            }),
        }
    }

    pub fn equation(expression: impl Into<String>) -> Self {
        Self {
            plain_text: String::new(),
            href: None,
            annotations: None,
            content: RichTextContent::Equation(Equation {
                expression: expression.into(),
            }),
        }
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        if let RichTextContent::Text(text) = &mut self.content {
            text.link = Some(Link {
                kind: None,
                url: url.into(),
            });
        }
        self
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = Some(annotations);
        self
    }

    /// The displayable text: the service-computed `plain_text` when present,
    /// otherwise whatever the fragment itself carries.
    pub fn display_text(&self) -> &str {
        if !self.plain_text.is_empty() {
            return &self.plain_text;
        }
        match &self.content {
            RichTextContent::Text(text) => &text.content,
            RichTextContent::Equation(equation) => &equation.expression,
            RichTextContent::Mention(_) | RichTextContent::Unrecognized { .. } => "",
        }
    }
}

/// Concatenates the displayable text of a run of fragments.
pub fn plain_text(fragments: &[RichText]) -> String {
    fragments.iter().map(RichText::display_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_text_fragment_with_annotations() {
        let fragment: RichText = serde_json::from_value(json!({
            "type": "text",
            "text": {"content": "Hello", "link": {"url": "https://example.com"}},
            "plain_text": "Hello",
            "href": "https://example.com",
            "annotations": {
                "bold": true, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "red_background"
            }
        }))
        .unwrap();

        let annotations = fragment.annotations.clone().unwrap();
        assert!(annotations.is_bold());
        assert_eq!(annotations.color, Some(Color::RedBackground));
        assert_eq!(fragment.href.as_deref(), Some("https://example.com"));
        match &fragment.content {
            RichTextContent::Text(text) => {
                assert_eq!(text.content, "Hello");
                assert_eq!(text.link.as_ref().unwrap().url, "https://example.com");
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn null_annotations_and_href_are_absent() {
        let fragment: RichText = serde_json::from_value(json!({
            "type": "text",
            "text": {"content": "x", "link": null},
            "plain_text": "x",
            "href": null,
            "annotations": null
        }))
        .unwrap();
        assert_eq!(fragment.annotations, None);
        assert_eq!(fragment.href, None);
    }

    #[test]
    fn outbound_text_omits_unset_fields() {
        let fragment = RichText::text("Ship it").with_annotations(Annotations {
            bold: Some(true),
            ..Annotations::default()
        });
        assert_eq!(
            serde_json::to_value(&fragment).unwrap(),
            json!({
                "annotations": {"bold": true},
                "type": "text",
                "text": {"content": "Ship it"}
            })
        );
    }

    #[test]
    fn page_mention_decodes() {
        let fragment: RichText = serde_json::from_value(json!({
            "type": "mention",
            "mention": {"type": "page", "page": {"id": "abc"}},
            "plain_text": "Roadmap"
        }))
        .unwrap();
        match fragment.content {
            RichTextContent::Mention(Mention::Page(reference)) => {
                assert_eq!(reference.id.as_str(), "abc")
            }
            other => panic!("expected page mention, got {other:?}"),
        }
    }

    #[test]
    fn unknown_mention_kind_is_preserved() {
        let mention: Mention = serde_json::from_value(json!({
            "type": "template_mention",
            "template_mention": {"type": "template_mention_date", "template_mention_date": "today"}
        }))
        .unwrap();
        assert_eq!(mention.kind().as_str(), "template_mention");
        assert_eq!(
            serde_json::to_value(&mention).unwrap()["template_mention"]["template_mention_date"],
            json!("today")
        );
    }

    #[test]
    fn plain_text_concatenates_fragments() {
        let fragments = vec![RichText::text("a + "), RichText::equation("b")];
        assert_eq!(plain_text(&fragments), "a + b");
    }
}
