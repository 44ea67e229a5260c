//! Folio core paint primitives
//!
//! The value types every other Folio crate resolves styles into:
//!
//! - [`Color`]: RGBA color with strict 6-digit hex parsing and CSS output
//! - [`Fill`]: transparent, solid, or linear-gradient backgrounds
//! - [`Shadow`] and [`Border`]: box decorations
//!
//! # Example
//!
//! ```rust
//! use folio_core::{Color, Fill, LinearGradient};
//!
//! let primary = Color::parse_hex("#7E22CE").unwrap();
//! assert_eq!(primary.to_rgb8(), (126, 34, 206));
//!
//! let fill = Fill::LinearGradient(LinearGradient::two_stop(135.0, primary, Color::WHITE));
//! assert!(fill.to_css().starts_with("linear-gradient(135deg"));
//! ```

pub mod color;
pub mod paint;

pub use color::{is_hex6, Color};
pub use paint::{Border, Fill, GradientStop, LinearGradient, Shadow};
