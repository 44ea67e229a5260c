//! Pages and partial page updates

use crate::block::DocBlock;
use crate::error::DocError;
use serde::{Deserialize, Serialize};

/// An ordered sequence of blocks plus title and timestamp.
///
/// Vector order is document order; there is no separate ordering key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocPage {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Milliseconds since the Unix epoch; stamped by the caller, never by the model
    #[serde(default)]
    pub last_modified: i64,
    #[serde(default)]
    pub blocks: Vec<DocBlock>,
}

impl DocPage {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            last_modified: 0,
            blocks: Vec::new(),
        }
    }

    pub fn with_blocks(mut self, blocks: Vec<DocBlock>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn from_json_str(src: &str) -> Result<Self, DocError> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn to_json_string(&self) -> Result<String, DocError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn block(&self, id: &str) -> Option<&DocBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_index(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn contains_block(&self, id: &str) -> bool {
        self.block_index(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Block ids in document order
    pub fn block_ids(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.id.as_str())
    }
}

/// The fields of a page that changed, handed to the commit callback.
///
/// Each present field is a full replacement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<DocBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<i64>,
}

impl PageUpdate {
    pub fn blocks(blocks: Vec<DocBlock>) -> Self {
        Self {
            blocks: Some(blocks),
            ..Default::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_last_modified(mut self, millis: i64) -> Self {
        self.last_modified = Some(millis);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.blocks.is_none() && self.last_modified.is_none()
    }

    /// Apply to a stored page, as a persistence layer would.
    pub fn apply_to(self, page: &mut DocPage) {
        if let Some(title) = self.title {
            page.title = title;
        }
        if let Some(blocks) = self.blocks {
            page.blocks = blocks;
        }
        if let Some(millis) = self.last_modified {
            page.last_modified = millis;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockType;

    #[test]
    fn page_json_uses_camel_case() {
        let mut page = DocPage::new("p1", "Buttons");
        page.last_modified = 1_700_000_000_000;
        let heading = DocBlock::new("b1", BlockType::H1).with_content("Buttons");
        page.blocks.push(heading);

        let src = page.to_json_string().unwrap();
        assert!(src.contains("\"lastModified\": 1700000000000"));
        assert_eq!(DocPage::from_json_str(&src).unwrap(), page);
    }

    #[test]
    fn lookups() {
        let page = DocPage::new("p", "t").with_blocks(vec![
            DocBlock::new("a", BlockType::Paragraph),
            DocBlock::new("b", BlockType::Divider),
        ]);
        assert_eq!(page.block_index("b"), Some(1));
        assert!(page.block("zzz").is_none());
        assert_eq!(page.block_ids().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut page = DocPage::new("p", "Old");
        PageUpdate::title("New").apply_to(&mut page);
        assert_eq!(page.title, "New");
        assert!(page.blocks.is_empty());
        assert_eq!(page.last_modified, 0);

        let blocks = vec![DocBlock::new("x", BlockType::Icon)];
        let update = PageUpdate::blocks(blocks).with_last_modified(5);
        assert!(!update.is_empty());
        update.apply_to(&mut page);
        assert_eq!(page.title, "New");
        assert_eq!(page.len(), 1);
        assert_eq!(page.last_modified, 5);
    }
}
