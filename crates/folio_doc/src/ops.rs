//! Pure page mutations
//!
//! Every operation takes the current page by reference and returns the next
//! page value. Operations addressing a block that is not on the page are
//! no-ops: they return a page equal to the input.

use crate::block::{BlockType, DocBlock, Metadata};
use crate::ids::BlockIdSource;
use crate::page::DocPage;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Fresh ids drawn before falling back to a disambiguating suffix
const MAX_ID_ATTEMPTS: usize = 64;

/// Append a new block with empty content, returning the page and the new id.
pub fn add_block(
    page: &DocPage,
    block_type: impl Into<BlockType>,
    metadata: Option<Metadata>,
    ids: &mut impl BlockIdSource,
) -> (DocPage, String) {
    let id = fresh_id(page, ids);
    let mut block = DocBlock::new(id.clone(), block_type);
    block.metadata = metadata;

    let mut next = page.clone();
    next.blocks.push(block);
    (next, id)
}

fn fresh_id(page: &DocPage, ids: &mut impl BlockIdSource) -> String {
    let taken: FxHashSet<&str> = page.block_ids().collect();

    let mut candidate = ids.next_id();
    for _ in 1..MAX_ID_ATTEMPTS {
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        debug!(id = %candidate, "block id already on page, drawing another");
        candidate = ids.next_id();
    }

    let mut suffix = 1usize;
    let mut unique = candidate.clone();
    while taken.contains(unique.as_str()) {
        suffix += 1;
        unique = format!("{candidate}-{suffix}");
    }
    unique
}

/// Replace a block's content; unknown ids leave the page as is.
pub fn update_block_content(page: &DocPage, block_id: &str, content: &str) -> DocPage {
    try_update_block_content(page, block_id, content)
        .unwrap_or_else(|| page.clone())
}

/// Drop a block; unknown ids leave the page as is.
pub fn remove_block(page: &DocPage, block_id: &str) -> DocPage {
    try_remove_block(page, block_id)
        .unwrap_or_else(|| page.clone())
}

/// Move a block to `to_index`, clamped to the last position.
pub fn move_block(page: &DocPage, block_id: &str, to_index: usize) -> DocPage {
    try_move_block(page, block_id, to_index)
        .unwrap_or_else(|| page.clone())
}

pub fn set_title(page: &DocPage, title: &str) -> DocPage {
    try_set_title(page, title).unwrap_or_else(|| page.clone())
}

// The `try_` forms return `None` when nothing would change, so the model can
// skip the commit.

pub(crate) fn try_update_block_content(
    page: &DocPage,
    block_id: &str,
    content: &str,
) -> Option<DocPage> {
    let Some(index) = page.block_index(block_id) else {
        debug!(block_id, "update for unknown block ignored");
        return None;
    };
    if page.blocks[index].content == content {
        return None;
    }
    let mut next = page.clone();
    next.blocks[index].content = content.to_string();
    Some(next)
}

pub(crate) fn try_remove_block(page: &DocPage, block_id: &str) -> Option<DocPage> {
    let Some(index) = page.block_index(block_id) else {
        debug!(block_id, "remove for unknown block ignored");
        return None;
    };
    let mut next = page.clone();
    next.blocks.remove(index);
    Some(next)
}

pub(crate) fn try_move_block(page: &DocPage, block_id: &str, to_index: usize) -> Option<DocPage> {
    let Some(from) = page.block_index(block_id) else {
        debug!(block_id, "move for unknown block ignored");
        return None;
    };
    let to = to_index.min(page.blocks.len() - 1);
    if from == to {
        return None;
    }
    let mut next = page.clone();
    let block = next.blocks.remove(from);
    next.blocks.insert(to, block);
    Some(next)
}

pub(crate) fn try_set_title(page: &DocPage, title: &str) -> Option<DocPage> {
    if page.title == title {
        return None;
    }
    let mut next = page.clone();
    next.title = title.to_string();
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use serde_json::json;

    fn page_with(ids: &[&str]) -> DocPage {
        DocPage::new("p", "Page").with_blocks(
            ids.iter()
                .map(|id| DocBlock::new(*id, BlockType::Paragraph))
                .collect(),
        )
    }

    #[test]
    fn add_appends_with_empty_content() {
        let page = page_with(&["a"]);
        let meta = crate::metadata_from(json!({"hex": "#FF0000"}));
        let mut ids = SequentialIds::new("b");
        let (next, id) = add_block(&page, BlockType::Color, meta.clone(), &mut ids);

        assert_eq!(id, "b-1");
        assert_eq!(next.block_ids().collect::<Vec<_>>(), ["a", "b-1"]);
        assert_eq!(next.blocks[1].content, "");
        assert_eq!(next.blocks[1].metadata, meta);
        // Input untouched
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn colliding_ids_are_redrawn() {
        let page = page_with(&["b-1", "b-2"]);
        let (next, id) = add_block(&page, "h1", None, &mut SequentialIds::new("b"));
        assert_eq!(id, "b-3");
        assert_eq!(next.len(), 3);
    }

    #[test]
    fn stuck_id_source_gets_a_suffix() {
        let page = page_with(&["same"]);
        let mut stuck = || "same".to_string();
        let (next, id) = add_block(&page, "divider", None, &mut stuck);
        assert_eq!(id, "same-2");
        assert!(next.contains_block("same"));
        assert!(next.contains_block("same-2"));
    }

    #[test]
    fn update_changes_only_the_target() {
        let page = page_with(&["a", "b"]);
        let next = update_block_content(&page, "b", "hello");
        assert_eq!(next.blocks[0], page.blocks[0]);
        assert_eq!(next.blocks[1].content, "hello");
        assert!(try_update_block_content(&next, "b", "hello").is_none());
    }

    #[test]
    fn move_clamps_and_ignores_unknown() {
        let page = page_with(&["a", "b", "c"]);
        let next = move_block(&page, "a", 99);
        assert_eq!(next.block_ids().collect::<Vec<_>>(), ["b", "c", "a"]);

        let next = move_block(&page, "c", 0);
        assert_eq!(next.block_ids().collect::<Vec<_>>(), ["c", "a", "b"]);

        assert_eq!(move_block(&page, "zzz", 0), page);
        assert!(try_move_block(&page, "b", 1).is_none());
    }

    #[test]
    fn set_title_no_op_when_equal() {
        let page = page_with(&[]);
        assert!(try_set_title(&page, "Page").is_none());
        assert_eq!(set_title(&page, "Guide").title, "Guide");
    }
}
