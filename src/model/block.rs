use super::rich_text::{plain_text, RichText};
use super::tagged::{serialize_tagged, EmptyObject, TaggedObject};
use crate::types::{BlockId, BlockType, Color, ObjectType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Text content shared by paragraphs, headings, list items, quotes and toggles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Nested blocks; only meaningful when appending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,
}

/// To-do block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToDoBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,
}

impl ToDoBlock {
    pub fn is_checked(&self) -> bool {
        self.checked.unwrap_or(false)
    }
}

/// Code block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Title of a child page or child database block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChildTitle {
    #[serde(default)]
    pub title: String,
}

/// What a block holds, selected by its `type` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Paragraph(TextBlock),
    Heading1(TextBlock),
    Heading2(TextBlock),
    Heading3(TextBlock),
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    Quote(TextBlock),
    Toggle(TextBlock),
    ToDo(ToDoBlock),
    Code(CodeBlock),
    Divider,
    ChildPage(ChildTitle),
    ChildDatabase(ChildTitle),
    Unrecognized { kind: String, payload: Value },
}

impl BlockContent {
    pub fn kind(&self) -> BlockType {
        match self {
            BlockContent::Paragraph(_) => BlockType::Paragraph,
            BlockContent::Heading1(_) => BlockType::Heading1,
            BlockContent::Heading2(_) => BlockType::Heading2,
            BlockContent::Heading3(_) => BlockType::Heading3,
            BlockContent::BulletedListItem(_) => BlockType::BulletedListItem,
            BlockContent::NumberedListItem(_) => BlockType::NumberedListItem,
            BlockContent::Quote(_) => BlockType::Quote,
            BlockContent::Toggle(_) => BlockType::Toggle,
            BlockContent::ToDo(_) => BlockType::ToDo,
            BlockContent::Code(_) => BlockType::Code,
            BlockContent::Divider => BlockType::Divider,
            BlockContent::ChildPage(_) => BlockType::ChildPage,
            BlockContent::ChildDatabase(_) => BlockType::ChildDatabase,
            BlockContent::Unrecognized { kind, .. } => BlockType::from(kind.as_str()),
        }
    }

    /// The block's own rich text, if it has any.
    pub fn rich_text(&self) -> Option<&[RichText]> {
        match self {
            BlockContent::Paragraph(block)
            | BlockContent::Heading1(block)
            | BlockContent::Heading2(block)
            | BlockContent::Heading3(block)
            | BlockContent::BulletedListItem(block)
            | BlockContent::NumberedListItem(block)
            | BlockContent::Quote(block)
            | BlockContent::Toggle(block) => Some(&block.rich_text),
            BlockContent::ToDo(block) => Some(&block.rich_text),
            BlockContent::Code(block) => Some(&block.rich_text),
            _ => None,
        }
    }
}

impl Serialize for BlockContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        let tag = kind.as_str();
        match self {
            BlockContent::Paragraph(block)
            | BlockContent::Heading1(block)
            | BlockContent::Heading2(block)
            | BlockContent::Heading3(block)
            | BlockContent::BulletedListItem(block)
            | BlockContent::NumberedListItem(block)
            | BlockContent::Quote(block)
            | BlockContent::Toggle(block) => serialize_tagged(serializer, tag, block),
            BlockContent::ToDo(block) => serialize_tagged(serializer, tag, block),
            BlockContent::Code(block) => serialize_tagged(serializer, tag, block),
            BlockContent::Divider => serialize_tagged(serializer, tag, &EmptyObject {}),
            BlockContent::ChildPage(child) | BlockContent::ChildDatabase(child) => {
                serialize_tagged(serializer, tag, child)
            }
            BlockContent::Unrecognized { payload, .. } => {
                serialize_tagged(serializer, tag, payload)
            }
        }
    }
}

impl<'de> Deserialize<'de> for BlockContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = TaggedObject::read(deserializer)?;
        let tag = object.require_tag()?;
        Ok(match BlockType::from(tag.as_str()) {
            BlockType::Paragraph => BlockContent::Paragraph(object.payload(&tag)?),
            BlockType::Heading1 => BlockContent::Heading1(object.payload(&tag)?),
            BlockType::Heading2 => BlockContent::Heading2(object.payload(&tag)?),
            BlockType::Heading3 => BlockContent::Heading3(object.payload(&tag)?),
            BlockType::BulletedListItem => BlockContent::BulletedListItem(object.payload(&tag)?),
            BlockType::NumberedListItem => BlockContent::NumberedListItem(object.payload(&tag)?),
            BlockType::Quote => BlockContent::Quote(object.payload(&tag)?),
            BlockType::Toggle => BlockContent::Toggle(object.payload(&tag)?),
            BlockType::ToDo => BlockContent::ToDo(object.payload(&tag)?),
            BlockType::Code => BlockContent::Code(object.payload(&tag)?),
            BlockType::Divider => BlockContent::Divider,
            BlockType::ChildPage => BlockContent::ChildPage(object.payload(&tag)?),
            BlockType::ChildDatabase => BlockContent::ChildDatabase(object.payload(&tag)?),
            BlockType::Unrecognized(_) => BlockContent::Unrecognized {
                payload: object.raw(&tag),
                kind: tag,
            },
        })
    }
}

/// A unit of page content.
///
/// Server-managed fields are optional so a block built locally for
/// `append_block_children` serializes as just its content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BlockId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(flatten)]
    pub content: BlockContent,
}

impl Block {
    pub fn new(content: BlockContent) -> Self {
        Self {
            object: Some(ObjectType::Block),
            id: None,
            created_time: None,
            last_edited_time: None,
            has_children: None,
            archived: None,
            content,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BlockContent::Paragraph(TextBlock {
            rich_text: vec![RichText::text(text)],
            ..TextBlock::default()
        }))
    }

    pub fn to_do(text: impl Into<String>, checked: bool) -> Self {
        Self::new(BlockContent::ToDo(ToDoBlock {
            rich_text: vec![RichText::text(text)],
            checked: Some(checked),
            ..ToDoBlock::default()
        }))
    }

    pub fn kind(&self) -> BlockType {
        self.content.kind()
    }

    pub fn has_children(&self) -> bool {
        self.has_children.unwrap_or(false)
    }

    /// Concatenated text of the block's own rich text.
    pub fn plain_text(&self) -> String {
        match &self.content {
            BlockContent::ChildPage(child) | BlockContent::ChildDatabase(child) => {
                child.title.clone()
            }
            content => content.rich_text().map(plain_text).unwrap_or_default(),
        }
    }
}
