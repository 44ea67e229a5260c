//! Drag-and-drop payload ingestion
//!
//! A palette item dragged onto a page carries a JSON text payload:
//!
//! ```json
//! { "type": "icon", "data": { "iconName": "Star" } }
//! ```
//!
//! `type` becomes the block type (unknown tags are kept verbatim) and `data`,
//! when present, becomes the block's metadata.

use crate::block::{BlockType, Metadata};
use crate::error::DropError;
use crate::ids::BlockIdSource;
use crate::ops::add_block;
use crate::page::DocPage;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Parse a raw drop payload into a block type and optional metadata.
pub fn parse_drop_payload(raw: &str) -> Result<(BlockType, Option<Metadata>), DropError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(mut payload) = value else {
        return Err(DropError::NotAnObject);
    };

    let block_type = match payload.remove("type") {
        None | Some(Value::Null) => return Err(DropError::MissingType),
        Some(Value::String(tag)) if tag.is_empty() => return Err(DropError::MissingType),
        Some(Value::String(tag)) => BlockType::from(tag),
        Some(other) => return Err(DropError::InvalidType(other.to_string())),
    };

    let metadata = match payload.remove("data") {
        None | Some(Value::Null) => None,
        Some(Value::Object(data)) => Some(data),
        Some(other) => return Err(DropError::InvalidData(other.to_string())),
    };

    Ok((block_type, metadata))
}

/// Append the dropped block to `page`.
///
/// On error the input page is not modified and no id is drawn.
pub fn ingest_drop(
    page: &DocPage,
    raw: &str,
    ids: &mut impl BlockIdSource,
) -> Result<DocPage, DropError> {
    let (block_type, metadata) = match parse_drop_payload(raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(page = %page.id, "rejected drop: {err}");
            return Err(err);
        }
    };
    let (next, id) = add_block(page, block_type, metadata, ids);
    debug!(page = %page.id, block = %id, "dropped block appended");
    Ok(next)
}

/// The payload a palette item puts on the drag, the inverse of [`parse_drop_payload`].
pub fn encode_drop_payload(block_type: &BlockType, data: Option<&Metadata>) -> String {
    let payload = match data {
        Some(data) => json!({ "type": block_type.as_str(), "data": data }),
        None => json!({ "type": block_type.as_str() }),
    };
    payload.to_string()
}
