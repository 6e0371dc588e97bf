//! The style engine: validated store plus registry, and the public
//! resolution entry points.

use once_cell::sync::Lazy;

use crate::error::{ResolveError, TokenError};
use crate::profile::KindRegistry;
use crate::resolve::assemble::assemble;
use crate::resolve::base::{resolve_base, BaseStyle, Variant};
use crate::resolve::state::{compose_state, InteractionState};
use crate::style::ComponentStyleSpec;
use crate::token::TokenStore;
use crate::variant::ComponentKind;

static ENGINE: Lazy<StyleEngine> = Lazy::new(StyleEngine::builtin);

/// The process-wide engine over the built-in tokens and kinds.
pub fn engine() -> &'static StyleEngine {
    &ENGINE
}

/// A token store and kind registry checked against each other.
///
/// Construction validates every alias chain and every role reference, so
/// resolution can only fail on a bad variant selection, never on a
/// missing or mistyped token.
#[derive(Debug, Clone)]
pub struct StyleEngine {
    store: TokenStore,
    registry: KindRegistry,
}

impl StyleEngine {
    /// Builds an engine, validating `registry` against `store`.
    pub fn with(store: TokenStore, registry: KindRegistry) -> Result<Self, TokenError> {
        store.validate()?;
        registry.validate(&store)?;
        Ok(Self { store, registry })
    }

    /// An engine over the built-in token set and kind registry.
    pub fn builtin() -> Self {
        match Self::with(TokenStore::builtin(), KindRegistry::builtin()) {
            Ok(engine) => engine,
            // The built-in tables are fixed data; a failure here is a bug
            // in this crate, not in the caller.
            Err(err) => panic!("built-in style data failed validation: {}", err),
        }
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    pub fn registry(&self) -> &KindRegistry {
        &self.registry
    }

    /// Resolves the state-independent portion of a style. Hosts that
    /// restyle on every interaction change can hold the [`BaseStyle`]
    /// and re-run only composition and assembly.
    pub fn resolve_base(
        &self,
        kind: ComponentKind,
        variant: Variant,
    ) -> Result<BaseStyle, ResolveError> {
        let profile = self
            .registry
            .get(kind)
            .ok_or(ResolveError::UnknownKind { kind })?;
        resolve_base(profile, &self.store, variant)
    }

    /// Full resolution: kind, variant, and interaction flags to a
    /// renderer-ready spec.
    pub fn resolve(
        &self,
        kind: ComponentKind,
        variant: Variant,
        state: InteractionState,
    ) -> Result<ComponentStyleSpec, ResolveError> {
        let base = self.resolve_base(kind, variant)?;
        let overlay = compose_state(&base.palette, state);
        Ok(assemble(&base, overlay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{Appearance, Density};

    #[test]
    fn test_builtin_engine_constructs() {
        let engine = StyleEngine::builtin();
        assert!(!engine.registry().is_empty());
    }

    #[test]
    fn test_shared_engine_resolves() {
        let spec = engine()
            .resolve(ComponentKind::Button, Variant::new(), InteractionState::new())
            .unwrap();
        assert_eq!(spec.kind, ComponentKind::Button);
        assert_eq!(spec.metrics.height, 40.0);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let variant = Variant::new()
            .appearance(Appearance::Secondary)
            .density(Density::Compact);
        let state = InteractionState::new().hovered().focus_visible();
        let a = engine().resolve(ComponentKind::Button, variant, state).unwrap();
        let b = engine().resolve(ComponentKind::Button, variant, state).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mismatched_registry_fails_construction() {
        // A registry referencing roles an empty store cannot supply.
        let result = StyleEngine::with(TokenStore::new(), KindRegistry::builtin());
        assert!(matches!(result, Err(TokenError::UnknownToken { .. })));
    }
}
