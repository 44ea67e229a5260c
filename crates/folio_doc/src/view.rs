//! Typed, per-block-type views over raw block metadata
//!
//! Blocks store metadata as an open JSON object so unknown keys survive
//! round trips. Renderers dispatch on [`BlockView`] instead, which gives every
//! block type its own metadata shape. Metadata parsing is lenient: a field with
//! the wrong JSON type reads as absent, never as an error.

use crate::block::{BlockType, ComponentSubtype, ContentBlockKind, DocBlock, Metadata};
use folio_theme::{ButtonVariant, FontRole, VisualStyle};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Color swatch block metadata
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorMeta {
    pub hex: Option<String>,
    pub name: Option<String>,
}

/// Typography sample block metadata
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypographyMeta {
    pub font_role: FontRole,
    pub size: Option<f32>,
    pub weight: Option<u16>,
}

/// Button block metadata
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonMeta {
    pub variant: ButtonVariant,
    pub visual_style: VisualStyle,
    pub icon: Option<String>,
}

/// Icon block metadata
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconMeta {
    pub icon_name: Option<String>,
    pub size: Option<f32>,
}

/// What a component block renders
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComponentKind {
    BrandColors,
    TypographySystem,
    IconsLibrary,
    ButtonsSystem,
    Block(ContentBlockKind),
    LiveOverview,
    FormElement,
    IconGrid,
    /// Missing or unrecognised `subtype`, or `subtype = block` without a
    /// recognised `blockType`; raw tags kept for diagnostics
    Unknown {
        subtype: Option<String>,
        block_type: Option<String>,
    },
}

/// Component block metadata
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentMeta {
    pub kind: ComponentKind,
    pub icons: Option<Vec<String>>,
}

impl ComponentMeta {
    /// Icons to show: the block's own `icons` when supplied (even if empty),
    /// otherwise the list from a generated-content store.
    pub fn icons_or<'a>(&'a self, generated: Option<&'a [String]>) -> Option<&'a [String]> {
        self.icons.as_deref().or(generated)
    }
}

/// Exhaustive, typed view of a block
#[derive(Clone, Debug, PartialEq)]
pub enum BlockView<'a> {
    Heading { level: u8, text: &'a str },
    Paragraph { text: &'a str },
    Divider,
    Color(ColorMeta),
    Typography { text: &'a str, meta: TypographyMeta },
    Button { label: &'a str, meta: ButtonMeta },
    Icon(IconMeta),
    Component(ComponentMeta),
    Unknown { tag: &'a str },
}

impl DocBlock {
    /// Typed view for rendering dispatch
    pub fn view(&self) -> BlockView<'_> {
        let meta = self.metadata.as_ref();
        match &self.block_type {
            BlockType::H1 => BlockView::Heading {
                level: 1,
                text: &self.content,
            },
            BlockType::H2 => BlockView::Heading {
                level: 2,
                text: &self.content,
            },
            BlockType::Paragraph => BlockView::Paragraph {
                text: &self.content,
            },
            BlockType::Divider => BlockView::Divider,
            BlockType::Color => BlockView::Color(ColorMeta {
                hex: field(meta, "hex"),
                name: field(meta, "name"),
            }),
            BlockType::Typography => BlockView::Typography {
                text: &self.content,
                meta: TypographyMeta {
                    font_role: field(meta, "fontRole").unwrap_or_default(),
                    size: field(meta, "size"),
                    weight: field(meta, "weight"),
                },
            },
            BlockType::Button => BlockView::Button {
                label: &self.content,
                meta: ButtonMeta {
                    variant: field(meta, "variant").unwrap_or_default(),
                    visual_style: field(meta, "style").unwrap_or_default(),
                    icon: field(meta, "icon"),
                },
            },
            BlockType::Icon => BlockView::Icon(IconMeta {
                icon_name: field(meta, "iconName"),
                size: field(meta, "size"),
            }),
            BlockType::Component => BlockView::Component(component_meta(meta)),
            BlockType::Unknown(tag) => BlockView::Unknown { tag },
        }
    }
}

fn component_meta(meta: Option<&Metadata>) -> ComponentMeta {
    let subtype: Option<String> = field(meta, "subtype");
    let block_type: Option<String> = field(meta, "blockType");

    let kind = match subtype.as_deref().and_then(ComponentSubtype::from_tag) {
        Some(ComponentSubtype::BrandColors) => ComponentKind::BrandColors,
        Some(ComponentSubtype::TypographySystem) => ComponentKind::TypographySystem,
        Some(ComponentSubtype::IconsLibrary) => ComponentKind::IconsLibrary,
        Some(ComponentSubtype::ButtonsSystem) => ComponentKind::ButtonsSystem,
        Some(ComponentSubtype::LiveOverview) => ComponentKind::LiveOverview,
        Some(ComponentSubtype::FormElement) => ComponentKind::FormElement,
        Some(ComponentSubtype::IconGrid) => ComponentKind::IconGrid,
        Some(ComponentSubtype::Block) => {
            match block_type.as_deref().and_then(ContentBlockKind::from_tag) {
                Some(kind) => ComponentKind::Block(kind),
                None => ComponentKind::Unknown {
                    subtype,
                    block_type,
                },
            }
        }
        None => ComponentKind::Unknown {
            subtype,
            block_type,
        },
    };

    ComponentMeta {
        kind,
        icons: field(meta, "icons"),
    }
}

fn field<T: DeserializeOwned>(meta: Option<&Metadata>, key: &str) -> Option<T> {
    let value = meta?.get(key)?;
    if value.is_null() {
        return None;
    }
    T::deserialize(value).ok()
}

/// Convenience for callers building metadata inline
pub fn metadata_from(value: Value) -> Option<Metadata> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block(block_type: &str, meta: Value) -> DocBlock {
        let mut b = DocBlock::new("b", block_type);
        b.metadata = metadata_from(meta);
        b
    }

    #[test]
    fn headings_carry_level_and_text() {
        let b = DocBlock::new("h", BlockType::H2).with_content("Colors");
        let expected = BlockView::Heading {
            level: 2,
            text: "Colors",
        };
        assert_eq!(b.view(), expected);
    }

    #[test]
    fn button_meta_defaults_and_parses() {
        let b = block("button", json!({"variant": "tertiary", "style": "neo"}));
        let BlockView::Button { meta, .. } = b.view() else {
            panic!("expected button view");
        };
        assert_eq!(meta.variant, ButtonVariant::Tertiary);
        assert_eq!(meta.visual_style, VisualStyle::Neo);

        let b = block("button", json!({"variant": 42}));
        let BlockView::Button { meta, .. } = b.view() else {
            panic!("expected button view");
        };
        assert_eq!(meta, ButtonMeta::default());
    }

    #[test]
    fn icon_meta_reads_icon_name() {
        let b = block("icon", json!({"iconName": "Star", "size": 24}));
        assert_eq!(
            b.view(),
            BlockView::Icon(IconMeta {
                icon_name: Some("Star".into()),
                size: Some(24.0),
            })
        );
    }

    #[test]
    fn component_block_kinds() {
        let b = block(
            "component",
            json!({"subtype": "block", "blockType": "pricing"}),
        );
        let BlockView::Component(meta) = b.view() else {
            panic!("expected component view");
        };
        assert_eq!(meta.kind, ComponentKind::Block(ContentBlockKind::Pricing));

        let b = block("component", json!({"subtype": "block"}));
        let BlockView::Component(meta) = b.view() else {
            panic!("expected component view");
        };
        assert_eq!(
            meta.kind,
            ComponentKind::Unknown {
                subtype: Some("block".into()),
                block_type: None,
            }
        );

        let b = block("component", json!({"subtype": "icon-grid"}));
        let BlockView::Component(meta) = b.view() else {
            panic!("expected component view");
        };
        assert_eq!(meta.kind, ComponentKind::IconGrid);
    }

    #[test]
    fn supplied_icons_win_over_generated() {
        let generated = vec!["Cloud".to_string()];

        let supplied = block(
            "component",
            json!({"subtype": "icon-grid", "icons": ["Star", "Heart"]}),
        );
        let BlockView::Component(meta) = supplied.view() else {
            panic!("expected component view");
        };
        assert_eq!(
            meta.icons_or(Some(&generated)),
            Some(&["Star".to_string(), "Heart".to_string()][..])
        );

        let empty = block("component", json!({"subtype": "icon-grid", "icons": []}));
        let BlockView::Component(meta) = empty.view() else {
            panic!("expected component view");
        };
        assert_eq!(meta.icons_or(Some(&generated)), Some(&[][..]));

        let absent = block("component", json!({"subtype": "icon-grid"}));
        let BlockView::Component(meta) = absent.view() else {
            panic!("expected component view");
        };
        assert_eq!(meta.icons_or(Some(&generated)), Some(&generated[..]));
        assert_eq!(meta.icons_or(None), None);
    }

    #[test]
    fn unknown_tags_view_as_unknown() {
        let b = DocBlock::new("u", "hero");
        assert_eq!(b.view(), BlockView::Unknown { tag: "hero" });
    }
}
