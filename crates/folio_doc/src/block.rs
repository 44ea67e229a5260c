//! Blocks and their type tags

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Block metadata payload; its shape depends on the block type
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Block type tag
///
/// The editor knows a closed set of tags. Anything else arriving from outside
/// (a drop from a newer palette, say) is kept verbatim in
/// [`BlockType::Unknown`] so it survives a save/load cycle unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    H1,
    H2,
    Paragraph,
    Divider,
    Color,
    Typography,
    Button,
    Icon,
    Component,
    Unknown(String),
}

impl BlockType {
    pub const KNOWN: [BlockType; 9] = [
        BlockType::H1,
        BlockType::H2,
        BlockType::Paragraph,
        BlockType::Divider,
        BlockType::Color,
        BlockType::Typography,
        BlockType::Button,
        BlockType::Icon,
        BlockType::Component,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::Paragraph => "paragraph",
            Self::Divider => "divider",
            Self::Color => "color",
            Self::Typography => "typography",
            Self::Button => "button",
            Self::Icon => "icon",
            Self::Component => "component",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Tag lookup; exact, case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|known| known.as_str() == tag)
            .cloned()
            .unwrap_or_else(|| Self::Unknown(tag.to_string()))
    }
}

impl From<String> for BlockType {
    fn from(tag: String) -> Self {
        match Self::from_tag(&tag) {
            Self::Unknown(_) => Self::Unknown(tag),
            known => known,
        }
    }
}

impl From<&str> for BlockType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<BlockType> for String {
    fn from(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for BlockType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component block subtype
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentSubtype {
    BrandColors,
    TypographySystem,
    IconsLibrary,
    ButtonsSystem,
    Block,
    LiveOverview,
    FormElement,
    IconGrid,
}

impl ComponentSubtype {
    pub const ALL: [ComponentSubtype; 8] = [
        Self::BrandColors,
        Self::TypographySystem,
        Self::IconsLibrary,
        Self::ButtonsSystem,
        Self::Block,
        Self::LiveOverview,
        Self::FormElement,
        Self::IconGrid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BrandColors => "brand-colors",
            Self::TypographySystem => "typography-system",
            Self::IconsLibrary => "icons-library",
            Self::ButtonsSystem => "buttons-system",
            Self::Block => "block",
            Self::LiveOverview => "live-overview",
            Self::FormElement => "form-element",
            Self::IconGrid => "icon-grid",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == tag)
    }
}

/// Content block flavours of `subtype = block`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentBlockKind {
    Pricing,
    Stats,
    Testimonial,
}

impl ContentBlockKind {
    pub const ALL: [ContentBlockKind; 3] = [Self::Pricing, Self::Stats, Self::Testimonial];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pricing => "pricing",
            Self::Stats => "stats",
            Self::Testimonial => "testimonial",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == tag)
    }
}

/// A single typed unit of page content
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl DocBlock {
    /// An empty block of the given type
    pub fn new(id: impl Into<String>, block_type: impl Into<BlockType>) -> Self {
        Self {
            id: id.into(),
            block_type: block_type.into(),
            content: String::new(),
            metadata: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Raw metadata value for `key`
    pub fn meta(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.as_ref().and_then(|m| m.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_tags_round_trip() {
        for tag in BlockType::KNOWN {
            assert_eq!(BlockType::from(tag.as_str().to_string()), tag);
            assert!(tag.is_known());
        }
    }

    #[test]
    fn unknown_tags_are_kept_verbatim() {
        let t = BlockType::from("Hero-Banner");
        assert_eq!(t, BlockType::Unknown("Hero-Banner".into()));
        assert_eq!(String::from(t), "Hero-Banner");
        // Tags are case-sensitive.
        assert_eq!(BlockType::from("H1"), BlockType::Unknown("H1".into()));
    }

    #[test]
    fn block_serializes_with_type_key() {
        let block = DocBlock::new("b1", BlockType::Icon);
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json, json!({"id": "b1", "type": "icon", "content": ""}));
    }

    #[test]
    fn block_deserializes_without_content() {
        let block: DocBlock =
            serde_json::from_value(json!({"id": "x", "type": "mystery", "metadata": {"a": 1}}))
                .unwrap();
        assert_eq!(block.block_type, BlockType::Unknown("mystery".into()));
        assert_eq!(block.content, "");
        assert_eq!(block.meta("a"), Some(&json!(1)));
    }

    #[test]
    fn subtype_tags() {
        for s in ComponentSubtype::ALL {
            assert_eq!(ComponentSubtype::from_tag(s.as_str()), Some(s));
        }
        assert_eq!(
            ContentBlockKind::from_tag("stats"),
            Some(ContentBlockKind::Stats)
        );
        assert_eq!(ContentBlockKind::from_tag("faq"), None);
    }
}
