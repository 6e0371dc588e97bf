//! Closed variant-axis enumerations.
//!
//! Every axis is a closed domain: a component kind declares which subset of
//! each axis it honors (see [`KindProfile`](crate::profile::KindProfile)),
//! and values outside that subset are rejected at resolution time rather
//! than silently coerced.

use serde::Serialize;

/// The component kinds the engine knows how to style.
///
/// Each kind selects one per-kind profile: which axes it honors, its
/// density-to-metrics table, and its color role tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// Standalone labeled button.
    Button,
    /// Square icon-only button.
    IconButton,
    /// Navigation button for side panels.
    SideNavButton,
    /// Individual tab strip item.
    Tab,
    /// Status indicator badge (filled or outline pill).
    Badge,
    /// Toggle switch track.
    Toggle,
    /// Circular send/stop control embedded in the chat input.
    ChatInputControl,
    /// Call-to-action link with button-like box and underlined text.
    AnchorCta,
}

impl ComponentKind {
    /// Stable identifier, as used in configuration and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::IconButton => "icon-button",
            ComponentKind::SideNavButton => "side-nav-button",
            ComponentKind::Tab => "tab",
            ComponentKind::Badge => "badge",
            ComponentKind::Toggle => "toggle",
            ComponentKind::ChatInputControl => "chat-input-control",
            ComponentKind::AnchorCta => "anchor-cta",
        }
    }

    /// All kinds, in registry order.
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Button,
        ComponentKind::IconButton,
        ComponentKind::SideNavButton,
        ComponentKind::Tab,
        ComponentKind::Badge,
        ComponentKind::Toggle,
        ComponentKind::ChatInputControl,
        ComponentKind::AnchorCta,
    ];
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "button" => Ok(ComponentKind::Button),
            "icon-button" => Ok(ComponentKind::IconButton),
            "side-nav-button" => Ok(ComponentKind::SideNavButton),
            "tab" => Ok(ComponentKind::Tab),
            "badge" => Ok(ComponentKind::Badge),
            "toggle" => Ok(ComponentKind::Toggle),
            "chat-input-control" => Ok(ComponentKind::ChatInputControl),
            "anchor-cta" => Ok(ComponentKind::AnchorCta),
            other => Err(format!("unknown component kind: {}", other)),
        }
    }
}

/// Variant axis selecting a component's primary color role.
///
/// `Primary`/`Secondary`/`Tertiary` apply to interactive kinds; the status
/// appearances apply to badge-style kinds. No kind honors both halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Appearance {
    Primary,
    Secondary,
    Tertiary,
    Success,
    Error,
    Warning,
    Info,
    Neutral,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Primary => "primary",
            Appearance::Secondary => "secondary",
            Appearance::Tertiary => "tertiary",
            Appearance::Success => "success",
            Appearance::Error => "error",
            Appearance::Warning => "warning",
            Appearance::Info => "info",
            Appearance::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Appearance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Appearance::Primary),
            "secondary" => Ok(Appearance::Secondary),
            "tertiary" => Ok(Appearance::Tertiary),
            "success" => Ok(Appearance::Success),
            "error" => Ok(Appearance::Error),
            "warning" => Ok(Appearance::Warning),
            "info" => Ok(Appearance::Info),
            "neutral" => Ok(Appearance::Neutral),
            other => Err(format!("unknown appearance: {}", other)),
        }
    }
}

/// Variant axis selecting the box-metric scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Density {
    Standard,
    Compact,
    ExtraCompact,
}

impl Density {
    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Standard => "standard",
            Density::Compact => "compact",
            Density::ExtraCompact => "extra-compact",
        }
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Density {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Density::Standard),
            "compact" => Ok(Density::Compact),
            "extra-compact" => Ok(Density::ExtraCompact),
            other => Err(format!("unknown density: {}", other)),
        }
    }
}

/// Variant axis for status-style kinds: filled (`Dark`) vs outline-only
/// (`Light`) rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusValue {
    Dark,
    Light,
}

impl StatusValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusValue::Dark => "dark",
            StatusValue::Light => "light",
        }
    }
}

impl std::fmt::Display for StatusValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StatusValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(StatusValue::Dark),
            "light" => Ok(StatusValue::Light),
            other => Err(format!("unknown status value: {}", other)),
        }
    }
}
