//! Active-block selection
//!
//! At most one block is active for editing. Selection is a two-state machine:
//!
//! ```text
//!            Select(id)
//!   None ──────────────► Selected(id)
//!    ▲                      │  Select(other) → Selected(other)
//!    └──────────────────────┘
//!       OutsideClick | Blur
//! ```

use crate::page::DocPage;
use tracing::trace;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActiveBlock {
    #[default]
    None,
    Selected(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Click or focus on a block
    Select(String),
    /// Click anywhere outside the active block
    OutsideClick,
    /// The active block's editor lost focus
    Blur,
}

impl ActiveBlock {
    /// Next state after `event`
    pub fn transition(self, event: SelectionEvent) -> Self {
        let next = match event {
            SelectionEvent::Select(id) => Self::Selected(id),
            SelectionEvent::OutsideClick | SelectionEvent::Blur => Self::None,
        };
        trace!(from = ?self, to = ?next, "selection transition");
        next
    }

    /// In-place form of [`transition`](Self::transition)
    pub fn handle(&mut self, event: SelectionEvent) {
        *self = std::mem::take(self).transition(event);
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Selected(id) => Some(id),
        }
    }

    pub fn is_active(&self, block_id: &str) -> bool {
        self.id() == Some(block_id)
    }

    /// Clear the selection if its block is no longer on `page`.
    pub fn retain_in(self, page: &DocPage) -> Self {
        match self {
            Self::Selected(id) if !page.contains_block(&id) => Self::None,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockType, DocBlock};

    #[test]
    fn select_replaces_previous() {
        let state = ActiveBlock::default()
            .transition(SelectionEvent::Select("a".into()))
            .transition(SelectionEvent::Select("b".into()));
        assert!(state.is_active("b"));
        assert!(!state.is_active("a"));
    }

    #[test]
    fn outside_click_and_blur_deselect() {
        for event in [SelectionEvent::OutsideClick, SelectionEvent::Blur] {
            let mut state = ActiveBlock::Selected("a".into());
            state.handle(event);
            assert_eq!(state, ActiveBlock::None);
        }
        assert_eq!(
            ActiveBlock::None.transition(SelectionEvent::Blur),
            ActiveBlock::None
        );
    }

    #[test]
    fn retain_drops_removed_blocks() {
        let blocks = vec![DocBlock::new("a", BlockType::H1)];
        let page = DocPage::new("p", "t").with_blocks(blocks);
        assert_eq!(
            ActiveBlock::Selected("a".into()).retain_in(&page).id(),
            Some("a")
        );
        assert_eq!(
            ActiveBlock::Selected("gone".into()).retain_in(&page),
            ActiveBlock::None
        );
    }
}
