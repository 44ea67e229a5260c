//! Folio Document Model
//!
//! Pages are ordered sequences of typed blocks. This crate provides:
//!
//! - **Blocks**: [`DocBlock`] with a [`BlockType`] tag and open JSON metadata,
//!   plus the typed [`BlockView`] renderers dispatch on
//! - **Operations**: pure page-in, page-out mutations in [`ops`]
//! - **Drops**: drag payload parsing and ingestion
//! - **Model**: [`DocumentModel`], which forwards each effective change to a
//!   [`PageCommit`]
//! - **Selection** and **inspection** state as explicit values
//!
//! # Example
//!
//! ```rust
//! use folio_doc::{DocPage, DocumentModel, PageUpdate};
//!
//! let mut commits = Vec::new();
//! let mut model = DocumentModel::new(|id: &str, update: PageUpdate| {
//!     commits.push((id.to_string(), update));
//! });
//!
//! let page = DocPage::new("buttons", "Buttons");
//! let page = model
//!     .ingest_drop(&page, r#"{"type":"icon","data":{"iconName":"Star"}}"#)
//!     .unwrap();
//! assert_eq!(page.blocks.len(), 1);
//! drop(model);
//! assert_eq!(commits.len(), 1);
//! ```

pub mod block;
pub mod drop;
pub mod error;
pub mod ids;
pub mod inspect;
pub mod model;
pub mod ops;
pub mod page;
pub mod selection;
pub mod view;

pub use block::{BlockType, ComponentSubtype, ContentBlockKind, DocBlock, Metadata};
pub use drop::{encode_drop_payload, ingest_drop, parse_drop_payload};
pub use error::{DocError, DropError};
pub use ids::{BlockIdSource, ClockIds, SequentialIds};
pub use inspect::{InspectState, InspectTarget};
pub use model::{DocumentModel, PageCommit};
pub use ops::{add_block, move_block, remove_block, set_title, update_block_content};
pub use page::{DocPage, PageUpdate};
pub use selection::{ActiveBlock, SelectionEvent};
pub use view::{
    metadata_from, BlockView, ButtonMeta, ColorMeta, ComponentKind, ComponentMeta, IconMeta,
    TypographyMeta,
};
