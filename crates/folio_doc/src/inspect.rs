//! Developer inspection: hover/lock state and the clipboard line
//!
//! The overlay itself is a renderer concern. This module owns the state it
//! reads and the exact text it copies.

use serde::{Deserialize, Serialize};

/// Which element the overlay highlights.
///
/// A locked element stays highlighted while the pointer hovers elsewhere.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InspectState {
    hovered: Option<String>,
    locked: Option<String>,
}

impl InspectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&mut self, id: impl Into<String>) {
        self.hovered = Some(id.into());
    }

    /// Pointer left `id`; ignored if something else is hovered by now.
    pub fn unhover(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    /// Lock `id`, or unlock it if it is already locked.
    pub fn toggle_lock(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.locked.as_deref() == Some(id.as_str()) {
            self.locked = None;
        } else {
            self.locked = Some(id);
        }
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn locked(&self) -> Option<&str> {
        self.locked.as_deref()
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.locked().or(self.hovered())
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted() == Some(id)
    }
}

/// Description of an inspected element
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectTarget {
    pub display_name: String,
    pub file_path: String,
    pub parent_component: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl InspectTarget {
    /// The five fields as `"key": "value"` pairs joined by `, `, in the order
    /// displayName, filePath, parentComponent, type, value.
    pub fn clipboard_line(&self) -> String {
        let fields = [
            ("displayName", &self.display_name),
            ("filePath", &self.file_path),
            ("parentComponent", &self.parent_component),
            ("type", &self.kind),
            ("value", &self.value),
        ];

        let mut line = String::new();
        for (i, (key, value)) in fields.iter().enumerate() {
            if i > 0 {
                line.push_str(", ");
            }
            line.push('"');
            line.push_str(key);
            line.push_str("\": \"");
            push_escaped(&mut line, value);
            line.push('"');
        }
        line
    }
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
}
