//! Fills, shadows and borders

use crate::Color;
use serde::Serialize;

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    /// `#RRGGBB 50%`
    pub fn to_css(&self) -> String {
        let percent = (self.offset * 100.0).round();
        format!("{} {}%", self.color.to_css(), percent)
    }
}

/// Linear gradient described by a CSS-style angle in degrees
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinearGradient {
    pub angle: f32,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Two stops at 0% and 100%
    pub fn two_stop(angle: f32, from: Color, to: Color) -> Self {
        Self {
            angle,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        }
    }

    pub fn to_css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(GradientStop::to_css)
            .collect::<Vec<_>>()
            .join(", ");
        format!("linear-gradient({}deg, {})", self.angle, stops)
    }
}

/// Background fill
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Fill {
    Transparent,
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Fill {
    pub fn to_css(&self) -> String {
        match self {
            Fill::Transparent => "transparent".to_string(),
            Fill::Solid(color) => color.to_css(),
            Fill::LinearGradient(gradient) => gradient.to_css(),
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Fill::LinearGradient(_))
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Fill::Solid(color)
    }
}

/// A box shadow definition
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            self.color.to_css()
        )
    }
}

/// Solid border stroke
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    pub const fn solid(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    pub fn to_css(&self) -> String {
        format!("{}px solid {}", self.width, self.color.to_css())
    }
}
