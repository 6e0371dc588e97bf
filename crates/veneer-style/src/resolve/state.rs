//! State composition: interaction flags to a winning color triad.

use serde::Serialize;

use crate::resolve::base::StatePalette;
use crate::style::ColorTriad;

/// Interaction flags as reported by the host at render time. Flags are
/// independent; precedence is applied here, not by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InteractionState {
    pub hovered: bool,
    pub active: bool,
    pub focus_visible: bool,
    pub disabled: bool,
    pub loading: bool,
    pub read_only: bool,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(mut self) -> Self {
        self.hovered = true;
        self
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn focus_visible(mut self) -> Self {
        self.focus_visible = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn loading(mut self) -> Self {
        self.loading = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

/// Which state won the color precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectiveState {
    Disabled,
    Loading,
    ReadOnly,
    Active,
    Hover,
    Default,
}

/// The state composer's output: the winning triad plus the focus flag,
/// which is additive rather than part of the precedence chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateOverlay {
    pub triad: ColorTriad,
    pub effective: EffectiveState,
    pub focus_ring: bool,
}

/// Picks the winning triad for `state` out of `palette`.
///
/// Precedence is disabled, loading, read-only, active, hover, default;
/// the first state whose flag is set and whose triad the palette provides
/// wins. A set flag the palette has no triad for falls through silently,
/// so e.g. a hovered badge stays in its default colors.
pub fn compose_state(palette: &StatePalette, state: InteractionState) -> StateOverlay {
    let candidates = [
        (state.disabled, palette.disabled, EffectiveState::Disabled),
        (state.loading, palette.loading, EffectiveState::Loading),
        (state.read_only, palette.read_only, EffectiveState::ReadOnly),
        (state.active, palette.active, EffectiveState::Active),
        (state.hovered, palette.hover, EffectiveState::Hover),
    ];

    let (triad, effective) = candidates
        .into_iter()
        .find_map(|(flag, triad, effective)| {
            flag.then_some(()).and(triad).map(|t| (t, effective))
        })
        .unwrap_or((palette.default, EffectiveState::Default));

    StateOverlay {
        triad,
        effective,
        // Focus never renders on a surface that cannot respond to input.
        focus_ring: state.focus_visible && !state.disabled && !state.loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Rgba;

    fn triad(tag: u8) -> ColorTriad {
        ColorTriad::new(
            Rgba::rgb(tag, 0, 0),
            Rgba::rgb(0, tag, 0),
            Rgba::rgb(0, 0, tag),
        )
    }

    fn palette() -> StatePalette {
        StatePalette {
            default: triad(1),
            hover: Some(triad(2)),
            active: Some(triad(3)),
            disabled: Some(triad(4)),
            loading: Some(triad(5)),
            read_only: Some(triad(6)),
        }
    }

    #[test]
    fn test_default_when_no_flags() {
        let overlay = compose_state(&palette(), InteractionState::new());
        assert_eq!(overlay.effective, EffectiveState::Default);
        assert_eq!(overlay.triad, triad(1));
        assert!(!overlay.focus_ring);
    }

    #[test]
    fn test_disabled_beats_everything() {
        let state = InteractionState::new()
            .hovered()
            .active()
            .loading()
            .read_only()
            .disabled();
        let overlay = compose_state(&palette(), state);
        assert_eq!(overlay.effective, EffectiveState::Disabled);
        assert_eq!(overlay.triad, triad(4));
    }

    #[test]
    fn test_loading_beats_pointer_states() {
        let state = InteractionState::new().hovered().active().loading();
        let overlay = compose_state(&palette(), state);
        assert_eq!(overlay.effective, EffectiveState::Loading);
    }

    #[test]
    fn test_active_beats_hover() {
        let state = InteractionState::new().hovered().active();
        let overlay = compose_state(&palette(), state);
        assert_eq!(overlay.effective, EffectiveState::Active);
    }

    #[test]
    fn test_unsupported_flag_falls_through() {
        let mut palette = palette();
        palette.loading = None;
        let state = InteractionState::new().hovered().loading();
        let overlay = compose_state(&palette, state);
        assert_eq!(overlay.effective, EffectiveState::Hover);
        assert_eq!(overlay.triad, triad(2));
    }

    #[test]
    fn test_focus_is_additive_over_hover() {
        let state = InteractionState::new().hovered().focus_visible();
        let overlay = compose_state(&palette(), state);
        assert_eq!(overlay.effective, EffectiveState::Hover);
        assert!(overlay.focus_ring);
    }

    #[test]
    fn test_focus_suppressed_while_disabled_or_loading() {
        for state in [
            InteractionState::new().focus_visible().disabled(),
            InteractionState::new().focus_visible().loading(),
        ] {
            let overlay = compose_state(&palette(), state);
            assert!(!overlay.focus_ring);
        }
    }
}
