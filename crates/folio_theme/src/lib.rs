//! Folio Theme System
//!
//! Theme token resolution for the Folio design-documentation editor.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Theme state**: an abstract configuration of color roles, spacing,
//!   typography, fill mode and interaction parameters
//! - **Style resolution**: pure functions deriving concrete paint values
//!   (button styles, contrast text, swatch geometry, gradients)
//! - **Color catalogue**: a fixed-order projection of the theme for display
//! - **Presets**: complete built-in themes
//!
//! # Quick Start
//!
//! ```rust
//! use folio_theme::{resolve_button_style, ButtonVariant, ThemePreset, VisualStyle};
//!
//! let theme = ThemePreset::Studio.theme();
//! let style = resolve_button_style(&theme, ButtonVariant::Primary, VisualStyle::Soft);
//! assert_eq!(style.background.to_css(), "#2563EB");
//! assert_eq!(style.hover_opacity, 0.9);
//! ```
//!
//! # Fallbacks
//!
//! A theme is supplied by an external store and may be incomplete. Nothing in
//! this crate fails on a missing or malformed field:
//!
//! - Color roles fall back to a literal or to another role
//!   (`activeColor` → `primary`, see [`ColorRole::fallback`])
//! - Geometry falls back to literal defaults when absent, negative or non-finite
//! - [`ThemeState::diagnostics`] lists what fell back, for authoring tools

pub mod catalog;
pub mod error;
pub mod presets;
pub mod resolve;
pub mod role;
pub mod state;

// Re-export commonly used types
pub use catalog::{build_color_catalog, group_by_category, ColorCategory, ColorEntry};
pub use error::{Result, ThemeError};
pub use presets::{preset_catalog, PresetInfo, ThemePreset};
pub use resolve::*;
pub use role::{ColorFallback, ColorRole};
pub use state::{FillMode, ThemeDiagnostic, ThemeState};

pub use folio_core::{Border, Color, Fill, LinearGradient, Shadow};
