//! Per-kind configuration records.
//!
//! A [`KindProfile`] is the single place where a component kind's design
//! decisions live: which variant axes it honors, its density-to-metrics
//! table, and token role names for every interaction state. The resolver
//! is one generic routine parameterized by these records; no kind carries
//! its own resolution code, so two kinds can never drift apart silently.
//!
//! Roles are token *names*. Profiles never hold concrete values; the
//! engine validates at construction that every referenced role resolves in
//! the token store with the right value type.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::TokenError;
use crate::style::Edges;
use crate::token::TokenStore;
use crate::variant::{Appearance, ComponentKind, Density, StatusValue};

/// Box metrics for one density step. Values are grid units (px).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub height: f32,
    pub padding: Edges,
    pub gap: f32,
    pub icon_size: f32,
    /// Density-scaled font size; family/weight come from the kind's
    /// typography role.
    pub font_size: f32,
}

/// Token role names for one color triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriadRoles {
    pub background: &'static str,
    pub foreground: &'static str,
    pub border: &'static str,
}

/// How a state replaces the default triad.
///
/// The tertiary-appearance asymmetry lives here: primary/secondary
/// disabled is a full triad swap, tertiary keeps its (transparent)
/// surface and swaps foreground only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSwap {
    /// Replace the whole triad.
    Triad(TriadRoles),
    /// Keep the default background/border, replace the foreground role.
    ForegroundOnly(&'static str),
}

/// Color role table for one appearance (and, for status kinds, one value).
///
/// `None` for a state means the kind does not shift colors in that state;
/// the state composer falls through to the next precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppearanceStyle {
    pub default: TriadRoles,
    pub hover: Option<TriadRoles>,
    pub active: Option<TriadRoles>,
    pub disabled: Option<StateSwap>,
    pub loading: Option<StateSwap>,
    pub read_only: Option<TriadRoles>,
}

/// The full configuration record for one component kind.
#[derive(Debug, Clone)]
pub struct KindProfile {
    pub kind: ComponentKind,
    /// Honored appearances; the first is the kind's default.
    pub appearances: Vec<Appearance>,
    /// Honored densities; the first is the kind's default.
    pub densities: Vec<Density>,
    /// Honored status values; empty means the axis is not honored.
    pub values: Vec<StatusValue>,
    pub metrics: Vec<(Density, Metrics)>,
    pub styles: Vec<((Appearance, Option<StatusValue>), AppearanceStyle)>,
    /// Typography role; size is overridden per density.
    pub typography: &'static str,
    /// Length role for corner rounding.
    pub corner_radius: &'static str,
    /// Length role for border width.
    pub border_width: &'static str,
    /// Shadow role applied when focus is visible.
    pub focus_shadow: &'static str,
    /// Intrinsic elevation shadow, for kinds that float.
    pub elevation: Option<&'static str>,
}

impl KindProfile {
    pub fn default_appearance(&self) -> Appearance {
        self.appearances[0]
    }

    pub fn default_density(&self) -> Density {
        self.densities[0]
    }

    /// Default status value for kinds honoring the value axis.
    pub fn default_value(&self) -> Option<StatusValue> {
        self.values.first().copied()
    }

    pub fn supports_appearance(&self, appearance: Appearance) -> bool {
        self.appearances.contains(&appearance)
    }

    pub fn supports_density(&self, density: Density) -> bool {
        self.densities.contains(&density)
    }

    pub fn supports_value(&self, value: StatusValue) -> bool {
        self.values.contains(&value)
    }

    pub fn metrics_for(&self, density: Density) -> Option<&Metrics> {
        self.metrics
            .iter()
            .find(|(d, _)| *d == density)
            .map(|(_, m)| m)
    }

    pub fn style_for(
        &self,
        appearance: Appearance,
        value: Option<StatusValue>,
    ) -> Option<&AppearanceStyle> {
        self.styles
            .iter()
            .find(|(key, _)| *key == (appearance, value))
            .map(|(_, style)| style)
    }

    /// Checks that every token role this profile references resolves in
    /// `store` with the expected value type.
    pub fn validate(&self, store: &TokenStore) -> Result<(), TokenError> {
        store.typography(self.typography)?;
        store.length(self.corner_radius)?;
        store.length(self.border_width)?;
        store.shadow(self.focus_shadow)?;
        if let Some(elevation) = self.elevation {
            store.shadow(elevation)?;
        }

        for (_, style) in &self.styles {
            validate_triad(store, &style.default)?;
            for triad in [style.hover, style.active, style.read_only].into_iter().flatten() {
                validate_triad(store, &triad)?;
            }
            for swap in [style.disabled, style.loading].into_iter().flatten() {
                match swap {
                    StateSwap::Triad(triad) => validate_triad(store, &triad)?,
                    StateSwap::ForegroundOnly(role) => {
                        store.color(role)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn validate_triad(store: &TokenStore, roles: &TriadRoles) -> Result<(), TokenError> {
    store.color(roles.background)?;
    store.color(roles.foreground)?;
    store.color(roles.border)?;
    Ok(())
}

/// Registry of kind profiles, one per component kind.
#[derive(Debug, Clone)]
pub struct KindRegistry {
    profiles: HashMap<ComponentKind, KindProfile>,
}

impl KindRegistry {
    /// An empty registry, for hosts that define their own kinds.
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// The built-in registry covering every [`ComponentKind`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for profile in [
            button(),
            icon_button(),
            side_nav_button(),
            tab(),
            badge(),
            toggle(),
            chat_input_control(),
            anchor_cta(),
        ] {
            registry = registry.register(profile);
        }
        registry
    }

    /// Registers a profile, returning the registry for chaining.
    pub fn register(mut self, profile: KindProfile) -> Self {
        self.profiles.insert(profile.kind, profile);
        self
    }

    pub fn get(&self, kind: ComponentKind) -> Option<&KindProfile> {
        self.profiles.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Validates every profile's role references against `store`.
    pub fn validate(&self, store: &TokenStore) -> Result<(), TokenError> {
        for profile in self.profiles.values() {
            profile.validate(store)?;
        }
        Ok(())
    }
}

impl Default for KindRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn triad(
    background: &'static str,
    foreground: &'static str,
    border: &'static str,
) -> TriadRoles {
    TriadRoles {
        background,
        foreground,
        border,
    }
}

/// Full triad swap to the flat disabled set (primary/secondary policy).
const DISABLED_FLAT: StateSwap = StateSwap::Triad(triad(
    "interactive.disabled.background.subtle",
    "interactive.disabled.on.subtle",
    "interactive.disabled.border.default",
));

/// Foreground-only disabled swap (tertiary policy: the transparent
/// surface stays).
const DISABLED_QUIET: StateSwap = StateSwap::ForegroundOnly("interactive.disabled.on.subtle");

/// Loading for solid appearances: the read-only surface.
const LOADING_SOLID: StateSwap = StateSwap::Triad(triad(
    "interactive.read-only.background.strong",
    "interactive.read-only.on.strong",
    "interactive.read-only.border.default",
));

/// Loading for tertiary: background and border forced fully transparent,
/// read-only foreground.
const LOADING_QUIET: StateSwap = StateSwap::Triad(triad(
    "background.hidden",
    "interactive.read-only.on.subtle",
    "border.hidden",
));

fn button() -> KindProfile {
    KindProfile {
        kind: ComponentKind::Button,
        appearances: vec![Appearance::Primary, Appearance::Secondary, Appearance::Tertiary],
        densities: vec![Density::Standard, Density::Compact, Density::ExtraCompact],
        values: vec![],
        metrics: vec![
            (
                Density::Standard,
                Metrics {
                    height: 40.0,
                    padding: Edges::symmetric(8.0, 16.0),
                    gap: 8.0,
                    icon_size: 16.0,
                    font_size: 16.0,
                },
            ),
            (
                Density::Compact,
                Metrics {
                    height: 32.0,
                    padding: Edges::symmetric(4.0, 12.0),
                    gap: 8.0,
                    icon_size: 14.0,
                    font_size: 14.0,
                },
            ),
            (
                Density::ExtraCompact,
                Metrics {
                    height: 24.0,
                    padding: Edges::symmetric(2.0, 8.0),
                    gap: 8.0,
                    icon_size: 12.0,
                    font_size: 14.0,
                },
            ),
        ],
        styles: vec![
            (
                (Appearance::Primary, None),
                AppearanceStyle {
                    default: triad(
                        "interactive.primary.background.default",
                        "interactive.primary.on.default",
                        "interactive.primary.border.default",
                    ),
                    hover: Some(triad(
                        "interactive.primary.background.hover",
                        "interactive.primary.on.hover",
                        "interactive.primary.border.hover",
                    )),
                    active: Some(triad(
                        "interactive.primary.background.active",
                        "interactive.primary.on.active",
                        "interactive.primary.border.active",
                    )),
                    disabled: Some(DISABLED_FLAT),
                    loading: Some(LOADING_SOLID),
                    read_only: None,
                },
            ),
            (
                (Appearance::Secondary, None),
                AppearanceStyle {
                    default: triad(
                        "interactive.secondary.background.default",
                        "interactive.secondary.on.default",
                        "interactive.secondary.border.default",
                    ),
                    hover: Some(triad(
                        "interactive.secondary.background.hover",
                        "interactive.secondary.on.hover",
                        "interactive.secondary.border.hover",
                    )),
                    active: Some(triad(
                        "interactive.secondary.background.active",
                        "interactive.secondary.on.active",
                        "interactive.secondary.border.active",
                    )),
                    disabled: Some(DISABLED_FLAT),
                    loading: Some(LOADING_SOLID),
                    read_only: None,
                },
            ),
            (
                (Appearance::Tertiary, None),
                AppearanceStyle {
                    // Standalone buttons render a visible tertiary border
                    // (component-tier override).
                    default: triad(
                        "interactive.tertiary.background.default",
                        "interactive.tertiary.on.default",
                        "component.button.tertiary.border.default",
                    ),
                    hover: Some(triad(
                        "interactive.tertiary.background.hover",
                        "interactive.tertiary.on.hover",
                        "interactive.tertiary.border.hover",
                    )),
                    active: Some(triad(
                        "interactive.tertiary.background.active",
                        "interactive.tertiary.on.active",
                        "interactive.tertiary.border.active",
                    )),
                    disabled: Some(DISABLED_QUIET),
                    loading: Some(LOADING_QUIET),
                    read_only: None,
                },
            ),
        ],
        typography: "typography.button",
        corner_radius: "radius.xs",
        border_width: "border.thin",
        focus_shadow: "shadow.focus",
        elevation: None,
    }
}

fn icon_button() -> KindProfile {
    let mut profile = button();
    profile.kind = ComponentKind::IconButton;
    profile.typography = "typography.icon";
    // Square hit areas; icon size does not scale with density.
    profile.metrics = vec![
        (
            Density::Standard,
            Metrics {
                height: 40.0,
                padding: Edges::uniform(12.0),
                gap: 0.0,
                icon_size: 16.0,
                font_size: 16.0,
            },
        ),
        (
            Density::Compact,
            Metrics {
                height: 32.0,
                padding: Edges::uniform(8.0),
                gap: 0.0,
                icon_size: 16.0,
                font_size: 16.0,
            },
        ),
        (
            Density::ExtraCompact,
            Metrics {
                height: 24.0,
                padding: Edges::uniform(4.0),
                gap: 0.0,
                icon_size: 16.0,
                font_size: 16.0,
            },
        ),
    ];
    // Inline icon buttons keep the transparent tertiary border.
    for (key, style) in &mut profile.styles {
        if key.0 == Appearance::Tertiary {
            style.default.border = "interactive.tertiary.border.default";
        }
    }
    profile
}

fn side_nav_button() -> KindProfile {
    KindProfile {
        kind: ComponentKind::SideNavButton,
        appearances: vec![Appearance::Tertiary],
        densities: vec![Density::Standard],
        values: vec![],
        metrics: vec![(
            Density::Standard,
            Metrics {
                height: 32.0,
                padding: Edges::symmetric(4.0, 8.0),
                gap: 8.0,
                icon_size: 16.0,
                font_size: 14.0,
            },
        )],
        styles: vec![(
            (Appearance::Tertiary, None),
            AppearanceStyle {
                default: triad(
                    "component.side-nav.background.default",
                    "component.side-nav.on.default",
                    "component.side-nav.border.default",
                ),
                hover: Some(triad(
                    "component.side-nav.background.hover",
                    "component.side-nav.on.hover",
                    "component.side-nav.border.hover",
                )),
                active: Some(triad(
                    "component.side-nav.background.hover",
                    "component.side-nav.on.hover",
                    "component.side-nav.border.hover",
                )),
                disabled: Some(DISABLED_QUIET),
                loading: Some(LOADING_QUIET),
                read_only: None,
            },
        )],
        typography: "typography.side-nav",
        corner_radius: "radius.xs",
        border_width: "border.thin",
        focus_shadow: "shadow.focus",
        elevation: None,
    }
}

fn tab() -> KindProfile {
    KindProfile {
        kind: ComponentKind::Tab,
        appearances: vec![Appearance::Tertiary],
        densities: vec![Density::Standard],
        values: vec![],
        metrics: vec![(
            Density::Standard,
            Metrics {
                height: 40.0,
                padding: Edges::symmetric(8.0, 12.0),
                gap: 8.0,
                icon_size: 16.0,
                font_size: 14.0,
            },
        )],
        styles: vec![(
            (Appearance::Tertiary, None),
            AppearanceStyle {
                default: triad("background.hidden", "text.subtle", "border.hidden"),
                hover: Some(triad(
                    "interactive.secondary.background.hover",
                    "interactive.secondary.on.hover",
                    "border.hidden",
                )),
                active: None,
                disabled: Some(StateSwap::ForegroundOnly(
                    "interactive.disabled.background.strong",
                )),
                loading: None,
                read_only: None,
            },
        )],
        typography: "typography.tab",
        corner_radius: "radius.xs",
        border_width: "border.thin",
        focus_shadow: "shadow.focus",
        elevation: None,
    }
}

fn badge() -> KindProfile {
    let statuses: [(Appearance, &'static str, &'static str); 5] = [
        (Appearance::Success, "status.success.strong", "status.success.subtle"),
        (Appearance::Error, "status.error.strong", "status.error.subtle"),
        (Appearance::Warning, "status.warning.strong", "status.warning.subtle"),
        (Appearance::Info, "status.info.strong", "status.info.subtle"),
        (Appearance::Neutral, "status.neutral.strong", "status.neutral.subtle"),
    ];

    let mut styles = Vec::with_capacity(statuses.len() * 2);
    for (appearance, strong, _subtle) in statuses {
        // Dark: filled pill. Light: outline only, never a filled pill.
        styles.push((
            (appearance, Some(StatusValue::Dark)),
            AppearanceStyle {
                default: triad(strong, "text.knockout", "border.hidden"),
                hover: None,
                active: None,
                disabled: None,
                loading: None,
                read_only: None,
            },
        ));
        styles.push((
            (appearance, Some(StatusValue::Light)),
            AppearanceStyle {
                default: triad("background.hidden", strong, strong),
                hover: None,
                active: None,
                disabled: None,
                loading: None,
                read_only: None,
            },
        ));
    }

    KindProfile {
        kind: ComponentKind::Badge,
        appearances: vec![
            Appearance::Success,
            Appearance::Error,
            Appearance::Warning,
            Appearance::Info,
            Appearance::Neutral,
        ],
        densities: vec![Density::Standard, Density::Compact],
        values: vec![StatusValue::Dark, StatusValue::Light],
        metrics: vec![
            (
                Density::Standard,
                Metrics {
                    height: 20.0,
                    padding: Edges::symmetric(2.0, 8.0),
                    gap: 4.0,
                    icon_size: 16.0,
                    font_size: 12.0,
                },
            ),
            (
                Density::Compact,
                Metrics {
                    height: 16.0,
                    padding: Edges::symmetric(0.0, 4.0),
                    gap: 4.0,
                    icon_size: 16.0,
                    font_size: 12.0,
                },
            ),
        ],
        styles,
        typography: "typography.badge",
        corner_radius: "radius.pill",
        border_width: "border.thin",
        focus_shadow: "shadow.focus",
        elevation: None,
    }
}

fn toggle() -> KindProfile {
    KindProfile {
        kind: ComponentKind::Toggle,
        appearances: vec![Appearance::Primary],
        densities: vec![Density::Standard],
        values: vec![],
        metrics: vec![(
            Density::Standard,
            Metrics {
                height: 20.0,
                padding: Edges::uniform(2.0),
                gap: 4.0,
                icon_size: 16.0,
                font_size: 16.0,
            },
        )],
        styles: vec![(
            (Appearance::Primary, None),
            AppearanceStyle {
                default: triad(
                    "interactive.primary.background.default",
                    "background.white",
                    "interactive.primary.border.default",
                ),
                hover: Some(triad(
                    "interactive.secondary.background.hover",
                    "background.white",
                    "border.stronger",
                )),
                active: None,
                disabled: Some(StateSwap::Triad(triad(
                    "interactive.disabled.background.subtle",
                    "interactive.disabled.on.subtle",
                    "interactive.disabled.background.subtle",
                ))),
                loading: None,
                read_only: Some(triad(
                    "interactive.read-only.background.subtle",
                    "interactive.read-only.on.subtle",
                    "interactive.read-only.border.default",
                )),
            },
        )],
        typography: "typography.label",
        corner_radius: "radius.circle",
        border_width: "border.thin",
        focus_shadow: "shadow.focus",
        elevation: None,
    }
}

fn chat_input_control() -> KindProfile {
    KindProfile {
        kind: ComponentKind::ChatInputControl,
        appearances: vec![Appearance::Primary],
        densities: vec![Density::Standard],
        values: vec![],
        metrics: vec![(
            Density::Standard,
            Metrics {
                height: 28.0,
                padding: Edges::uniform(8.0),
                gap: 0.0,
                icon_size: 16.0,
                font_size: 16.0,
            },
        )],
        styles: vec![(
            (Appearance::Primary, None),
            AppearanceStyle {
                default: triad(
                    "interactive.primary.background.default",
                    "interactive.primary.on.default",
                    "interactive.primary.border.default",
                ),
                hover: Some(triad(
                    "interactive.primary.background.hover",
                    "interactive.primary.on.hover",
                    "interactive.primary.border.hover",
                )),
                active: Some(triad(
                    "interactive.primary.background.active",
                    "interactive.primary.on.active",
                    "interactive.primary.border.active",
                )),
                // Divergence kept from the chat controls: the disabled
                // border uses the strong disabled background token.
                disabled: Some(StateSwap::Triad(triad(
                    "interactive.disabled.background.subtle",
                    "interactive.disabled.on.subtle",
                    "component.chat-control.disabled.border",
                ))),
                loading: None,
                read_only: None,
            },
        )],
        typography: "typography.icon",
        corner_radius: "radius.circle",
        border_width: "border.thin",
        focus_shadow: "shadow.focus",
        elevation: None,
    }
}

fn anchor_cta() -> KindProfile {
    // Link-shaped call to action: the button triads for hover/active, but
    // no blocked states at all, so disabled/loading flags fall through.
    let mut profile = button();
    profile.kind = ComponentKind::AnchorCta;
    profile.typography = "typography.anchor";
    profile.metrics = vec![
        (
            Density::Standard,
            Metrics {
                height: 40.0,
                padding: Edges::symmetric(8.0, 16.0),
                gap: 8.0,
                icon_size: 16.0,
                font_size: 16.0,
            },
        ),
        (
            Density::Compact,
            Metrics {
                height: 32.0,
                padding: Edges::symmetric(4.0, 8.0),
                gap: 8.0,
                icon_size: 16.0,
                font_size: 16.0,
            },
        ),
        (
            Density::ExtraCompact,
            Metrics {
                height: 24.0,
                padding: Edges::symmetric(4.0, 8.0),
                gap: 8.0,
                icon_size: 16.0,
                font_size: 14.0,
            },
        ),
    ];
    for (key, style) in &mut profile.styles {
        if key.0 == Appearance::Tertiary {
            // Anchors keep the semantic (transparent) tertiary border.
            style.default.border = "interactive.tertiary.border.default";
        }
        style.disabled = None;
        style.loading = None;
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_kind() {
        let registry = KindRegistry::builtin();
        for kind in ComponentKind::ALL {
            assert!(registry.get(kind).is_some(), "missing profile for {}", kind);
        }
    }

    #[test]
    fn test_builtin_validates_against_builtin_store() {
        let registry = KindRegistry::builtin();
        let store = TokenStore::builtin();
        assert!(registry.validate(&store).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_role() {
        let profile = KindProfile {
            typography: "typography.missing",
            ..button()
        };
        let store = TokenStore::builtin();
        assert!(matches!(
            profile.validate(&store),
            Err(TokenError::UnknownToken { .. })
        ));
    }

    #[test]
    fn test_button_density_table_is_monotonic() {
        let profile = button();
        let heights: Vec<f32> = [Density::Standard, Density::Compact, Density::ExtraCompact]
            .iter()
            .map(|d| profile.metrics_for(*d).unwrap().height)
            .collect();
        assert!(heights[0] > heights[1] && heights[1] > heights[2]);
    }

    #[test]
    fn test_icon_button_icon_size_constant_across_densities() {
        let profile = icon_button();
        for density in [Density::Standard, Density::Compact, Density::ExtraCompact] {
            assert_eq!(profile.metrics_for(density).unwrap().icon_size, 16.0);
        }
    }

    #[test]
    fn test_tertiary_disabled_is_foreground_only() {
        for profile in [button(), icon_button()] {
            let style = profile.style_for(Appearance::Tertiary, None).unwrap();
            assert!(matches!(
                style.disabled,
                Some(StateSwap::ForegroundOnly(_))
            ));
        }
    }

    #[test]
    fn test_button_and_icon_button_tertiary_borders_differ() {
        let standalone = button();
        let inline = icon_button();
        let a = standalone.style_for(Appearance::Tertiary, None).unwrap();
        let b = inline.style_for(Appearance::Tertiary, None).unwrap();
        assert_ne!(a.default.border, b.default.border);
    }

    #[test]
    fn test_badge_honors_value_axis() {
        let profile = badge();
        assert_eq!(profile.default_value(), Some(StatusValue::Dark));
        assert!(profile
            .style_for(Appearance::Success, Some(StatusValue::Light))
            .is_some());
        assert!(profile.style_for(Appearance::Success, None).is_none());
    }

    #[test]
    fn test_badge_has_no_pointer_states() {
        let profile = badge();
        let style = profile
            .style_for(Appearance::Error, Some(StatusValue::Dark))
            .unwrap();
        assert!(style.hover.is_none());
        assert!(style.active.is_none());
        assert!(style.disabled.is_none());
    }

    #[test]
    fn test_anchor_cta_has_no_blocked_states() {
        let profile = anchor_cta();
        for appearance in [Appearance::Primary, Appearance::Secondary, Appearance::Tertiary] {
            let style = profile.style_for(appearance, None).unwrap();
            assert!(style.disabled.is_none());
            assert!(style.loading.is_none());
            assert!(style.hover.is_some());
        }
        let tertiary = profile.style_for(Appearance::Tertiary, None).unwrap();
        assert_eq!(tertiary.default.border, "interactive.tertiary.border.default");
    }

    #[test]
    fn test_toggle_supports_read_only() {
        let profile = toggle();
        let style = profile.style_for(Appearance::Primary, None).unwrap();
        assert!(style.read_only.is_some());
    }
}
