//! Resolved output records.
//!
//! These are the renderer-consumable types: fully concrete, no token
//! names, no store references. A [`ComponentStyleSpec`] is recomputed for
//! every relevant render request and never cached by identity or mutated
//! after creation.

use serde::Serialize;

use crate::resolve::EffectiveState;
use crate::token::{Rgba, ShadowSpec, TypographySpec};
use crate::variant::ComponentKind;

/// The three color roles every component surface renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTriad {
    pub background: Rgba,
    pub foreground: Rgba,
    pub border: Rgba,
}

impl ColorTriad {
    pub const fn new(background: Rgba, foreground: Rgba, border: Rgba) -> Self {
        Self {
            background,
            foreground,
            border,
        }
    }

    /// The same triad with a different foreground. Used by the
    /// foreground-only disabled policy.
    pub const fn with_foreground(self, foreground: Rgba) -> Self {
        Self { foreground, ..self }
    }
}

/// Border width and color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BorderStyle {
    pub width: f32,
    pub color: Rgba,
}

/// Per-corner rounding radii, clockwise from top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// The same radius on all four corners.
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// No rounding.
    pub const ZERO: CornerRadii = CornerRadii::uniform(0.0);
}

/// Per-edge offsets (padding or margin), clockwise from top.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Edges = Edges::uniform(0.0);

    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical/horizontal shorthand.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Box metrics, controlled exclusively by density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxMetrics {
    pub height: f32,
    pub padding: Edges,
    pub gap: f32,
    pub icon_size: f32,
    pub corner_radius: CornerRadii,
    /// Zero except for items adjusted by composite layout rules.
    pub margin: Edges,
}

/// The fully resolved, renderer-ready style for one component instance at
/// one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentStyleSpec {
    pub kind: ComponentKind,
    pub background: Rgba,
    pub foreground: Rgba,
    pub border: BorderStyle,
    pub shadow: ShadowSpec,
    pub typography: TypographySpec,
    pub metrics: BoxMetrics,
    /// Which interaction state won the color precedence, for diagnostics.
    pub effective_state: EffectiveState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triad_with_foreground_keeps_surface() {
        let triad = ColorTriad::new(
            Rgba::TRANSPARENT,
            Rgba::rgb(0x21, 0x22, 0x23),
            Rgba::TRANSPARENT,
        );
        let swapped = triad.with_foreground(Rgba::rgb(0x8A, 0x8A, 0x8A));
        assert_eq!(swapped.background, triad.background);
        assert_eq!(swapped.border, triad.border);
        assert_eq!(swapped.foreground, Rgba::rgb(0x8A, 0x8A, 0x8A));
    }

    #[test]
    fn test_corner_radii_uniform() {
        let radii = CornerRadii::uniform(4.0);
        assert_eq!(radii.top_left, 4.0);
        assert_eq!(radii.bottom_right, 4.0);
    }

    #[test]
    fn test_edges_symmetric() {
        let padding = Edges::symmetric(8.0, 16.0);
        assert_eq!(padding.top, 8.0);
        assert_eq!(padding.bottom, 8.0);
        assert_eq!(padding.left, 16.0);
        assert_eq!(padding.right, 16.0);
    }
}
