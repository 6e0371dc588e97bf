//! Variant resolution: kind plus variant selection to a [`BaseStyle`].

use serde::Serialize;

use crate::error::ResolveError;
use crate::profile::{KindProfile, Metrics, StateSwap, TriadRoles};
use crate::style::ColorTriad;
use crate::token::{ShadowSpec, TokenStore, TypographySpec};
use crate::variant::{Appearance, ComponentKind, Density, StatusValue};

/// A variant selection. Omitted axes fall back to the kind's defaults;
/// set axes are checked against the kind's honored values and rejected
/// when unsupported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub appearance: Option<Appearance>,
    pub density: Option<Density>,
    pub value: Option<StatusValue>,
}

impl Variant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = Some(density);
        self
    }

    pub fn value(mut self, value: StatusValue) -> Self {
        self.value = Some(value);
        self
    }
}

/// Concrete color triads for every interaction state the variant
/// provides. Built once per base resolution; the state composer reads
/// this table and never touches the token store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatePalette {
    pub default: ColorTriad,
    pub hover: Option<ColorTriad>,
    pub active: Option<ColorTriad>,
    pub disabled: Option<ColorTriad>,
    pub loading: Option<ColorTriad>,
    pub read_only: Option<ColorTriad>,
}

/// Everything about a (kind, variant) pair that does not depend on
/// interaction state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseStyle {
    pub kind: ComponentKind,
    pub appearance: Appearance,
    pub density: Density,
    pub value: Option<StatusValue>,
    pub palette: StatePalette,
    pub metrics: Metrics,
    pub typography: TypographySpec,
    pub corner_radius: f32,
    pub border_width: f32,
    pub focus_shadow: ShadowSpec,
    pub elevation: Option<ShadowSpec>,
}

pub(crate) fn resolve_base(
    profile: &KindProfile,
    store: &TokenStore,
    variant: Variant,
) -> Result<BaseStyle, ResolveError> {
    let kind = profile.kind;

    let appearance = match variant.appearance {
        Some(appearance) if profile.supports_appearance(appearance) => appearance,
        Some(appearance) => {
            return Err(unknown(kind, "appearance", appearance.to_string()));
        }
        None => profile.default_appearance(),
    };

    let density = match variant.density {
        Some(density) if profile.supports_density(density) => density,
        Some(density) => return Err(unknown(kind, "density", density.to_string())),
        None => profile.default_density(),
    };

    let value = match variant.value {
        Some(value) if profile.supports_value(value) => Some(value),
        Some(value) => return Err(unknown(kind, "value", value.to_string())),
        None => profile.default_value(),
    };

    let style = profile
        .style_for(appearance, value)
        .ok_or_else(|| unknown(kind, "appearance", appearance.to_string()))?;
    let metrics = profile
        .metrics_for(density)
        .ok_or_else(|| unknown(kind, "density", density.to_string()))?;

    let default = resolve_triad(store, &style.default)?;
    let palette = StatePalette {
        default,
        hover: resolve_opt_triad(store, style.hover)?,
        active: resolve_opt_triad(store, style.active)?,
        disabled: resolve_opt_swap(store, style.disabled, default)?,
        loading: resolve_opt_swap(store, style.loading, default)?,
        read_only: resolve_opt_triad(store, style.read_only)?,
    };

    let typography = store
        .typography(profile.typography)?
        .with_size(metrics.font_size);

    Ok(BaseStyle {
        kind,
        appearance,
        density,
        value,
        palette,
        metrics: *metrics,
        typography,
        corner_radius: store.length(profile.corner_radius)?,
        border_width: store.length(profile.border_width)?,
        focus_shadow: store.shadow(profile.focus_shadow)?.clone(),
        elevation: match profile.elevation {
            Some(role) => Some(store.shadow(role)?.clone()),
            None => None,
        },
    })
}

fn unknown(kind: ComponentKind, axis: &'static str, value: String) -> ResolveError {
    ResolveError::UnknownVariant { kind, axis, value }
}

fn resolve_triad(store: &TokenStore, roles: &TriadRoles) -> Result<ColorTriad, ResolveError> {
    Ok(ColorTriad::new(
        store.color(roles.background)?,
        store.color(roles.foreground)?,
        store.color(roles.border)?,
    ))
}

fn resolve_opt_triad(
    store: &TokenStore,
    roles: Option<TriadRoles>,
) -> Result<Option<ColorTriad>, ResolveError> {
    roles.map(|r| resolve_triad(store, &r)).transpose()
}

fn resolve_opt_swap(
    store: &TokenStore,
    swap: Option<StateSwap>,
    default: ColorTriad,
) -> Result<Option<ColorTriad>, ResolveError> {
    match swap {
        None => Ok(None),
        Some(StateSwap::Triad(roles)) => Ok(Some(resolve_triad(store, &roles)?)),
        Some(StateSwap::ForegroundOnly(role)) => {
            Ok(Some(default.with_foreground(store.color(role)?)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::KindRegistry;

    fn resolve(kind: ComponentKind, variant: Variant) -> Result<BaseStyle, ResolveError> {
        let store = TokenStore::builtin();
        let registry = KindRegistry::builtin();
        let profile = registry.get(kind).unwrap();
        resolve_base(profile, &store, variant)
    }

    #[test]
    fn test_omitted_axes_use_kind_defaults() {
        let base = resolve(ComponentKind::Button, Variant::new()).unwrap();
        assert_eq!(base.appearance, Appearance::Primary);
        assert_eq!(base.density, Density::Standard);
        assert_eq!(base.value, None);
        assert_eq!(base.metrics.height, 40.0);
    }

    #[test]
    fn test_unsupported_appearance_is_rejected() {
        let err = resolve(
            ComponentKind::Button,
            Variant::new().appearance(Appearance::Success),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::UnknownVariant { axis, .. } if axis == "appearance"
        ));
    }

    #[test]
    fn test_unsupported_density_is_rejected() {
        let err = resolve(
            ComponentKind::Tab,
            Variant::new().density(Density::Compact),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::UnknownVariant { axis, .. } if axis == "density"
        ));
    }

    #[test]
    fn test_value_axis_rejected_for_non_status_kinds() {
        let err = resolve(
            ComponentKind::Button,
            Variant::new().value(StatusValue::Dark),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::UnknownVariant { axis, .. } if axis == "value"
        ));
    }

    #[test]
    fn test_badge_defaults_to_dark_value() {
        let base = resolve(
            ComponentKind::Badge,
            Variant::new().appearance(Appearance::Success),
        )
        .unwrap();
        assert_eq!(base.value, Some(StatusValue::Dark));
        assert!(!base.palette.default.background.is_transparent());
    }

    #[test]
    fn test_tertiary_disabled_palette_keeps_surface() {
        let base = resolve(
            ComponentKind::IconButton,
            Variant::new().appearance(Appearance::Tertiary),
        )
        .unwrap();
        let disabled = base.palette.disabled.unwrap();
        assert_eq!(disabled.background, base.palette.default.background);
        assert!(disabled.background.is_transparent());
        assert_ne!(disabled.foreground, base.palette.default.foreground);
    }

    #[test]
    fn test_density_scales_typography_size() {
        let base = resolve(
            ComponentKind::Button,
            Variant::new().density(Density::Compact),
        )
        .unwrap();
        assert_eq!(base.typography.size, 14.0);
        assert_eq!(base.typography.weight, 600);
    }
}
