//! The resolution pipeline.
//!
//! Three stages, each pure given its inputs:
//!
//! 1. [`resolve_base`](StyleEngine::resolve_base) turns a kind plus a
//!    variant selection into a [`BaseStyle`] with every state triad
//!    already concrete. Token lookups happen here and nowhere later.
//! 2. [`compose_state`] picks the winning triad for the current
//!    interaction flags by fixed precedence.
//! 3. [`assemble`] merges base and overlay into the final
//!    [`ComponentStyleSpec`](crate::style::ComponentStyleSpec).
//!
//! [`StyleEngine`] ties the stages together over a validated token store
//! and kind registry.

mod assemble;
mod base;
mod engine;
mod state;

pub use assemble::assemble;
pub use base::{BaseStyle, StatePalette, Variant};
pub use engine::{engine, StyleEngine};
pub use state::{compose_state, EffectiveState, InteractionState, StateOverlay};
