//! The built-in token set.
//!
//! Three alias tiers: core tokens hold raw values, semantic tokens name a
//! purpose, component tokens carry per-kind overrides. Resolution code
//! references semantic and component names only; rebranding a deployment
//! means overlaying core values and leaves every role intact.

use super::store::TokenStore;
use super::value::{Rgba, ShadowLayer, ShadowSpec, TypographySpec};

const WHITE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);
const GRAPHITE: Rgba = Rgba::rgb(0x21, 0x22, 0x23);
const PAGE: Rgba = Rgba::rgb(0xFC, 0xFC, 0xFC);
// Transparent variant of the page background, used wherever a surface must
// not paint.
const HIDDEN: Rgba = Rgba::rgba(0xFC, 0xFC, 0xFC, 0x00);

pub(crate) fn store() -> TokenStore {
    let store = TokenStore::new();
    let store = core_tier(store);
    let store = semantic_tier(store);
    component_tier(store)
}

/// Tier 1: raw values.
fn core_tier(store: TokenStore) -> TokenStore {
    store
        .add("white", WHITE)
        .add("graphite", GRAPHITE)
        .add("page", PAGE)
        .add("hidden", HIDDEN)
        // Gray scale
        .add("gray.100", Rgba::rgb(0xF7, 0xF7, 0xF7))
        .add("gray.200", Rgba::rgb(0xF2, 0xF2, 0xF2))
        .add("gray.300", Rgba::rgb(0xED, 0xED, 0xED))
        .add("gray.400", Rgba::rgb(0xE5, 0xE5, 0xE5))
        .add("gray.500", Rgba::rgb(0xD2, 0xD2, 0xD2))
        .add("gray.600", Rgba::rgb(0x8A, 0x8A, 0x8A))
        .add("gray.700", Rgba::rgb(0x66, 0x66, 0x66))
        .add("gray.800", Rgba::rgb(0x40, 0x40, 0x40))
        // Brand green scale
        .add("pine.200", Rgba::rgb(0xED, 0xF2, 0xF0))
        .add("pine.600", Rgba::rgb(0x50, 0x66, 0x5B))
        .add("pine.700", Rgba::rgb(0x1D, 0x4B, 0x34))
        .add("pine.800", Rgba::rgb(0x12, 0x30, 0x21))
        // Focus teal
        .add("teal.600", Rgba::rgb(0x2E, 0x6B, 0x5C))
        // Status scales
        .add("green.100", Rgba::rgb(0xEA, 0xFF, 0xE5))
        .add("green.400", Rgba::rgb(0x38, 0x7C, 0x2B))
        .add("red.100", Rgba::rgb(0xFF, 0xED, 0xED))
        .add("red.400", Rgba::rgb(0xDC, 0x0A, 0x0A))
        .add("orange.600", Rgba::rgb(0xAB, 0x33, 0x00))
        .add("gold.100", Rgba::rgb(0xFF, 0xF8, 0xE5))
        .add("sky.100", Rgba::rgb(0xED, 0xF6, 0xFF))
        .add("sky.600", Rgba::rgb(0x00, 0x62, 0xC4))
        .add("mist.200", Rgba::rgb(0xE4, 0xEB, 0xE7))
        // Geometry
        .add("radius.xs", 4.0f32)
        .add("radius.sm", 8.0f32)
        .add("radius.pill", 20.0f32)
        .add("radius.circle", 88.0f32)
        .add("border.thin", 1.0f32)
        .add("border.thick", 2.0f32)
        // Shadows
        .add("shadow.none", ShadowSpec::none())
        .add(
            "shadow.focus",
            ShadowSpec::new(vec![
                ShadowLayer::ring(2.0, WHITE),
                ShadowLayer::ring(4.0, Rgba::rgb(0x2E, 0x6B, 0x5C)),
            ]),
        )
        .add(
            "shadow.level1",
            ShadowSpec::new(vec![ShadowLayer {
                dx: 0.0,
                dy: 1.0,
                blur: 2.0,
                spread: 0.0,
                color: Rgba::rgba(0, 0, 0, 26),
            }]),
        )
        // Typography
        .add(
            "typography.button",
            TypographySpec::new("Source Sans 3", 16.0, 600, 1.5),
        )
        .add(
            "typography.side-nav",
            TypographySpec::new("Clario", 14.0, 400, 1.2),
        )
        .add(
            "typography.tab",
            TypographySpec::new("Source Sans 3", 14.0, 600, 1.35),
        )
        .add(
            "typography.badge",
            TypographySpec::new("Source Sans 3", 12.0, 400, 1.2),
        )
        .add(
            "typography.label",
            TypographySpec::new("Source Sans 3", 16.0, 400, 1.5),
        )
        .add(
            "typography.icon",
            TypographySpec::new("Veneer Icons", 16.0, 400, 1.0),
        )
        .add(
            "typography.anchor",
            TypographySpec::new("Clario", 16.0, 500, 1.5),
        )
}

/// Tier 2: semantic roles.
fn semantic_tier(store: TokenStore) -> TokenStore {
    store
        .alias("background.default", "page")
        .alias("background.hidden", "hidden")
        .alias("background.white", "white")
        .alias("border.subtle", "gray.400")
        .alias("border.strong", "gray.500")
        .alias("border.stronger", "gray.600")
        .alias("border.hidden", "hidden")
        .alias("text.heavy", "graphite")
        .alias("text.subtle", "gray.700")
        .alias("text.knockout", "page")
        // Primary interactive triads
        .alias("interactive.primary.background.default", "pine.700")
        .alias("interactive.primary.background.hover", "pine.800")
        .alias("interactive.primary.background.active", "pine.600")
        .alias("interactive.primary.border.default", "pine.700")
        .alias("interactive.primary.border.hover", "pine.800")
        .alias("interactive.primary.border.active", "pine.600")
        .alias("interactive.primary.on.default", "page")
        .alias("interactive.primary.on.hover", "gray.100")
        .alias("interactive.primary.on.active", "white")
        // Secondary
        .alias("interactive.secondary.background.default", "page")
        .alias("interactive.secondary.background.hover", "pine.200")
        .alias("interactive.secondary.background.active", "pine.600")
        .alias("interactive.secondary.border.default", "gray.600")
        .alias("interactive.secondary.border.hover", "gray.600")
        .alias("interactive.secondary.border.active", "pine.600")
        .alias("interactive.secondary.on.default", "graphite")
        .alias("interactive.secondary.on.hover", "pine.700")
        .alias("interactive.secondary.on.active", "white")
        // Tertiary: transparent surface by default
        .alias("interactive.tertiary.background.default", "hidden")
        .alias("interactive.tertiary.background.hover", "pine.200")
        .alias("interactive.tertiary.background.active", "hidden")
        .alias("interactive.tertiary.border.default", "hidden")
        .alias("interactive.tertiary.border.hover", "gray.600")
        .alias("interactive.tertiary.border.active", "gray.600")
        .alias("interactive.tertiary.on.default", "graphite")
        .alias("interactive.tertiary.on.hover", "pine.700")
        .alias("interactive.tertiary.on.active", "graphite")
        // Focus
        .alias("interactive.focus", "teal.600")
        // Disabled
        .alias("interactive.disabled.background.subtle", "gray.200")
        .alias("interactive.disabled.background.strong", "gray.600")
        .alias("interactive.disabled.border.default", "gray.200")
        .alias("interactive.disabled.on.subtle", "gray.600")
        .alias("interactive.disabled.on.strong", "gray.200")
        // Read-only
        .alias("interactive.read-only.background.strong", "gray.700")
        .alias("interactive.read-only.background.subtle", "gray.400")
        .alias("interactive.read-only.border.default", "gray.700")
        .alias("interactive.read-only.on.strong", "gray.400")
        .alias("interactive.read-only.on.subtle", "gray.700")
        // Status
        .alias("status.success.strong", "green.400")
        .alias("status.success.subtle", "green.100")
        .alias("status.error.strong", "red.400")
        .alias("status.error.subtle", "red.100")
        .alias("status.warning.strong", "orange.600")
        .alias("status.warning.subtle", "gold.100")
        .alias("status.info.strong", "sky.600")
        .alias("status.info.subtle", "sky.100")
        .alias("status.neutral.strong", "gray.800")
        .alias("status.neutral.subtle", "gray.300")
        .alias("status.neutral.strong-subtle", "mist.200")
}

/// Tier 3: component overrides.
fn component_tier(store: TokenStore) -> TokenStore {
    store
        // Standalone buttons render a visible tertiary border; the inline
        // icon button keeps the semantic (transparent) default.
        .alias("component.button.tertiary.border.default", "border.stronger")
        // Side-nav buttons have their own muted hover treatment.
        .alias("component.side-nav.background.default", "background.hidden")
        .alias("component.side-nav.background.hover", "gray.500")
        .alias("component.side-nav.border.default", "border.hidden")
        .alias("component.side-nav.border.hover", "border.stronger")
        .alias("component.side-nav.on.default", "text.heavy")
        .alias("component.side-nav.on.hover", "text.heavy")
        // Chat input controls: disabled border intentionally uses the
        // strong disabled background, not the disabled border token.
        .alias(
            "component.chat-control.disabled.border",
            "interactive.disabled.background.strong",
        )
}
