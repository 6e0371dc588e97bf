//! Final assembly of a [`ComponentStyleSpec`] from base and overlay.

use crate::resolve::base::BaseStyle;
use crate::resolve::state::StateOverlay;
use crate::style::{BorderStyle, BoxMetrics, ComponentStyleSpec, CornerRadii, Edges};
use crate::token::ShadowSpec;

/// Merges a resolved base with a composed state overlay. Pure: all token
/// lookups already happened in base resolution.
///
/// The shadow slot is single-occupancy. A visible focus ring wins over
/// the kind's intrinsic elevation; otherwise elevation applies, or no
/// shadow at all.
pub fn assemble(base: &BaseStyle, overlay: StateOverlay) -> ComponentStyleSpec {
    let shadow = if overlay.focus_ring {
        base.focus_shadow.clone()
    } else {
        base.elevation.clone().unwrap_or_else(ShadowSpec::none)
    };

    ComponentStyleSpec {
        kind: base.kind,
        background: overlay.triad.background,
        foreground: overlay.triad.foreground,
        border: BorderStyle {
            width: base.border_width,
            color: overlay.triad.border,
        },
        shadow,
        typography: base.typography.clone(),
        metrics: BoxMetrics {
            height: base.metrics.height,
            padding: base.metrics.padding,
            gap: base.metrics.gap,
            icon_size: base.metrics.icon_size,
            corner_radius: CornerRadii::uniform(base.corner_radius),
            margin: Edges::ZERO,
        },
        effective_state: overlay.effective,
    }
}
