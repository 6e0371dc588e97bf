//! Token-driven style resolution for the Veneer component set.
//!
//! Turns a component kind, a variant selection, and the current
//! interaction flags into a fully concrete [`ComponentStyleSpec`] a
//! renderer can paint without further decisions. All design values come
//! from a named token store with three alias tiers, so a deployment can
//! rebrand by overlaying core tokens and every component follows.
//!
//! ```rust
//! use veneer_style::{
//!     engine, Appearance, ComponentKind, Density, InteractionState, Variant,
//! };
//!
//! let spec = engine().resolve(
//!     ComponentKind::Button,
//!     Variant::new()
//!         .appearance(Appearance::Secondary)
//!         .density(Density::Compact),
//!     InteractionState::new().hovered(),
//! )?;
//! assert_eq!(spec.metrics.height, 32.0);
//! # Ok::<(), veneer_style::ResolveError>(())
//! ```
//!
//! Hosts with custom branding build their own engine:
//!
//! ```rust,no_run
//! use veneer_style::{KindRegistry, StyleEngine, TokenStore};
//!
//! let store = TokenStore::builtin().merge(TokenStore::from_file("./brand.yaml")?);
//! let engine = StyleEngine::with(store, KindRegistry::builtin())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Resolution is pure: the same inputs always produce the same spec, and
//! nothing is cached or mutated between calls. Interaction state changes
//! are restyles, not mutations.

mod error;
mod group;
mod profile;
mod resolve;
mod style;
mod token;
mod variant;

pub use error::{ResolveError, TokenError};
pub use group::{GroupItem, GroupLayout, Orientation};
pub use profile::{
    AppearanceStyle, KindProfile, KindRegistry, Metrics, StateSwap, TriadRoles,
};
pub use resolve::{
    assemble, compose_state, engine, BaseStyle, EffectiveState, InteractionState, StateOverlay,
    StatePalette, StyleEngine, Variant,
};
pub use style::{
    BorderStyle, BoxMetrics, ColorTriad, ComponentStyleSpec, CornerRadii, Edges,
};
pub use token::{Rgba, ShadowLayer, ShadowSpec, TokenEntry, TokenStore, TokenValue, TypographySpec};
pub use variant::{Appearance, ComponentKind, Density, StatusValue};
