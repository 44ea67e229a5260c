//! Commit-driven document model
//!
//! [`DocumentModel`] wraps the pure operations in [`crate::ops`] and forwards
//! every effective change to a [`PageCommit`]. The model holds no page of its
//! own: callers pass the current page in and get the next one back, and the
//! commit target decides what to persist.

use crate::block::{BlockType, Metadata};
use crate::drop;
use crate::error::DropError;
use crate::ids::{BlockIdSource, ClockIds};
use crate::ops;
use crate::page::{DocPage, PageUpdate};
use tracing::debug;

/// Receives page changes.
///
/// The update never carries `last_modified`; stamping it is the receiver's
/// business.
pub trait PageCommit {
    fn commit(&mut self, page_id: &str, update: PageUpdate);
}

impl<F: FnMut(&str, PageUpdate)> PageCommit for F {
    fn commit(&mut self, page_id: &str, update: PageUpdate) {
        self(page_id, update)
    }
}

pub struct DocumentModel<C, I = ClockIds> {
    commit: C,
    ids: I,
}

impl<C: PageCommit> DocumentModel<C> {
    pub fn new(commit: C) -> Self {
        Self {
            commit,
            ids: ClockIds::default(),
        }
    }
}

impl<C: PageCommit, I: BlockIdSource> DocumentModel<C, I> {
    pub fn with_ids(commit: C, ids: I) -> Self {
        Self { commit, ids }
    }

    pub fn add_block(
        &mut self,
        page: &DocPage,
        block_type: impl Into<BlockType>,
        metadata: Option<Metadata>,
    ) -> (DocPage, String) {
        let (next, id) = ops::add_block(page, block_type, metadata, &mut self.ids);
        self.commit_blocks(&next);
        (next, id)
    }

    pub fn update_block_content(
        &mut self,
        page: &DocPage,
        block_id: &str,
        content: &str,
    ) -> DocPage {
        match ops::try_update_block_content(page, block_id, content) {
            Some(next) => {
                self.commit_blocks(&next);
                next
            }
            None => page.clone(),
        }
    }

    pub fn remove_block(&mut self, page: &DocPage, block_id: &str) -> DocPage {
        match ops::try_remove_block(page, block_id) {
            Some(next) => {
                self.commit_blocks(&next);
                next
            }
            None => page.clone(),
        }
    }

    pub fn move_block(&mut self, page: &DocPage, block_id: &str, to_index: usize) -> DocPage {
        match ops::try_move_block(page, block_id, to_index) {
            Some(next) => {
                self.commit_blocks(&next);
                next
            }
            None => page.clone(),
        }
    }

    pub fn set_title(&mut self, page: &DocPage, title: &str) -> DocPage {
        match ops::try_set_title(page, title) {
            Some(next) => {
                debug!(page = %next.id, "committing title");
                let update = PageUpdate::title(next.title.clone());
                self.commit.commit(&next.id, update);
                next
            }
            None => page.clone(),
        }
    }

    /// Ingest a drop payload. Rejected payloads commit nothing.
    pub fn ingest_drop(&mut self, page: &DocPage, raw: &str) -> Result<DocPage, DropError> {
        let next = drop::ingest_drop(page, raw, &mut self.ids)?;
        self.commit_blocks(&next);
        Ok(next)
    }

    pub fn committer(&self) -> &C {
        &self.commit
    }

    pub fn into_commit(self) -> C {
        self.commit
    }

    fn commit_blocks(&mut self, next: &DocPage) {
        debug!(page = %next.id, blocks = next.blocks.len(), "committing blocks");
        let update = PageUpdate::blocks(next.blocks.clone());
        self.commit.commit(&next.id, update);
    }
}
