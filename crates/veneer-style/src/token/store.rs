//! The named token registry.
//!
//! A [`TokenStore`] maps stable token names to primitive design values.
//! Entries are either concrete values or aliases to other entries, which is
//! how the three-tier cascade is expressed: core tokens hold raw values,
//! semantic tokens alias core tokens, and component tokens alias semantic
//! ones. Lookup resolves the alias chain to the underlying concrete value.
//!
//! Stores are immutable once handed to an engine. Construction is either
//! programmatic (builder chaining) or from a YAML overlay:
//!
//! ```rust
//! use veneer_style::{Rgba, TokenStore};
//!
//! let store = TokenStore::new()
//!     .add("pine.700", Rgba::from_hex("#1D4B34").unwrap())
//!     .alias("interactive.primary.background.default", "pine.700");
//! assert!(store.validate().is_ok());
//! ```
//!
//! YAML overlays follow the same shape: hex strings are colors, numbers
//! are lengths, bare strings are aliases, and maps define typography or
//! shadow specs:
//!
//! ```yaml
//! pine.900: "#0B1F15"
//! interactive.primary.background.default: pine.900
//! radius.xs: 4
//! typography.button:
//!   family: "Source Sans 3"
//!   size: 16
//!   weight: 600
//!   line-height: 1.5
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::error::TokenError;

use super::builtin;
use super::value::{Rgba, ShadowLayer, ShadowSpec, TokenValue, TypographySpec};

/// A single store entry: a concrete value or an alias to another entry.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenEntry {
    /// A concrete primitive value.
    Concrete(TokenValue),
    /// An alias referencing another token by name.
    Alias(String),
}

/// Immutable mapping from token names to primitive design values.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    entries: HashMap<String, TokenEntry>,
}

impl TokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in token set: core palette, semantic roles, and
    /// component-tier overrides.
    pub fn builtin() -> Self {
        builtin::store()
    }

    /// Adds a concrete token, returning an updated store for chaining.
    pub fn add(mut self, name: &str, value: impl Into<TokenValue>) -> Self {
        self.entries
            .insert(name.to_string(), TokenEntry::Concrete(value.into()));
        self
    }

    /// Adds an alias token, returning an updated store for chaining.
    pub fn alias(mut self, name: &str, target: &str) -> Self {
        self.entries
            .insert(name.to_string(), TokenEntry::Alias(target.to_string()));
        self
    }

    /// Returns true if a token with this name exists (concrete or alias).
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries (concrete + aliases).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a token, resolving alias chains to the concrete value.
    ///
    /// # Errors
    ///
    /// `UnknownToken` if the name (or an alias target) is absent,
    /// `CycleDetected` if alias resolution loops.
    pub fn get(&self, name: &str) -> Result<&TokenValue, TokenError> {
        let mut current = name;
        let mut path = Vec::new();

        loop {
            match self.entries.get(current) {
                Some(TokenEntry::Concrete(value)) => return Ok(value),
                Some(TokenEntry::Alias(target)) => {
                    path.push(current.to_string());
                    if path.iter().any(|seen| seen == target) {
                        path.push(target.clone());
                        return Err(TokenError::CycleDetected { path });
                    }
                    current = target;
                }
                None => {
                    return Err(TokenError::UnknownToken {
                        name: current.to_string(),
                    })
                }
            }
        }
    }

    /// Looks up a token that must hold a color.
    pub fn color(&self, name: &str) -> Result<Rgba, TokenError> {
        match self.get(name)? {
            TokenValue::Color(color) => Ok(*color),
            other => Err(self.mismatch(name, "color", other)),
        }
    }

    /// Looks up a token that must hold a length.
    pub fn length(&self, name: &str) -> Result<f32, TokenError> {
        match self.get(name)? {
            TokenValue::Length(length) => Ok(*length),
            other => Err(self.mismatch(name, "length", other)),
        }
    }

    /// Looks up a token that must hold a shadow.
    pub fn shadow(&self, name: &str) -> Result<&ShadowSpec, TokenError> {
        match self.get(name)? {
            TokenValue::Shadow(shadow) => Ok(shadow),
            other => Err(self.mismatch(name, "shadow", other)),
        }
    }

    /// Looks up a token that must hold a typography spec.
    pub fn typography(&self, name: &str) -> Result<&TypographySpec, TokenError> {
        match self.get(name)? {
            TokenValue::Typography(typography) => Ok(typography),
            other => Err(self.mismatch(name, "typography", other)),
        }
    }

    fn mismatch(&self, name: &str, expected: &'static str, found: &TokenValue) -> TokenError {
        TokenError::TypeMismatch {
            name: name.to_string(),
            expected,
            found: found.kind_name(),
        }
    }

    /// Validates that every alias resolves to a concrete value without
    /// cycles.
    ///
    /// Called by the engine at construction; a failure here is a broken
    /// token configuration and should abort initialization.
    pub fn validate(&self) -> Result<(), TokenError> {
        for (name, entry) in &self.entries {
            if let TokenEntry::Alias(target) = entry {
                match self.get(name) {
                    Ok(_) => {}
                    Err(TokenError::UnknownToken { .. }) => {
                        return Err(TokenError::UnresolvedAlias {
                            from: name.clone(),
                            to: target.clone(),
                        });
                    }
                    Err(err) => return Err(err),
                }
            }
        }
        Ok(())
    }

    /// Merges another store into this one.
    ///
    /// Entries from `overlay` take precedence, so a host can layer brand
    /// or deployment overrides over the built-in set.
    pub fn merge(mut self, overlay: TokenStore) -> Self {
        self.entries.extend(overlay.entries);
        self
    }

    /// Parses a token overlay from YAML content.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] if the YAML is malformed or a definition
    /// is not a recognizable token shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, TokenError> {
        let doc: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| TokenError::Parse {
                path: None,
                message: e.to_string(),
            })?;

        let mapping = doc.as_mapping().ok_or_else(|| TokenError::Parse {
            path: None,
            message: "token overlay must be a mapping of name to value".to_string(),
        })?;

        let mut store = TokenStore::new();
        for (key, value) in mapping {
            let name = key.as_str().ok_or_else(|| TokenError::Parse {
                path: None,
                message: format!("token name must be a string, got {:?}", key),
            })?;
            let entry = parse_entry(name, value)?;
            store.entries.insert(name.to_string(), entry);
        }
        Ok(store)
    }

    /// Loads a token overlay from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TokenError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Load {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_yaml(&content).map_err(|err| match err {
            TokenError::Parse { message, .. } => TokenError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }
}

fn parse_entry(name: &str, value: &serde_yaml::Value) -> Result<TokenEntry, TokenError> {
    match value {
        serde_yaml::Value::String(s) => {
            if s.starts_with('#') {
                let color = Rgba::from_hex(s).map_err(|_| TokenError::InvalidColor {
                    token: name.to_string(),
                    value: s.clone(),
                })?;
                Ok(TokenEntry::Concrete(TokenValue::Color(color)))
            } else {
                Ok(TokenEntry::Alias(s.clone()))
            }
        }
        serde_yaml::Value::Number(n) => {
            let length = n.as_f64().ok_or_else(|| TokenError::Parse {
                path: None,
                message: format!("invalid length for token '{}': {}", name, n),
            })?;
            Ok(TokenEntry::Concrete(TokenValue::Length(length as f32)))
        }
        serde_yaml::Value::Mapping(map) => parse_structured(name, map),
        other => Err(TokenError::Parse {
            path: None,
            message: format!("invalid definition for token '{}': {:?}", name, other),
        }),
    }
}

/// Parses the two structured token shapes: typography (keyed by `family`)
/// and shadow (keyed by `layers`).
fn parse_structured(
    name: &str,
    map: &serde_yaml::Mapping,
) -> Result<TokenEntry, TokenError> {
    let field = |key: &str| map.get(serde_yaml::Value::String(key.to_string()));

    if let Some(family) = field("family") {
        let family = family.as_str().ok_or_else(|| parse_err(name, "family must be a string"))?;
        let size = field("size")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| parse_err(name, "typography requires a numeric size"))?;
        let weight = field("weight").and_then(|v| v.as_u64()).unwrap_or(400);
        let line_height = field("line-height").and_then(|v| v.as_f64()).unwrap_or(1.2);
        return Ok(TokenEntry::Concrete(TokenValue::Typography(
            TypographySpec::new(family, size as f32, weight as u16, line_height as f32),
        )));
    }

    if let Some(layers) = field("layers") {
        let seq = layers
            .as_sequence()
            .ok_or_else(|| parse_err(name, "shadow layers must be a sequence"))?;
        let mut parsed = Vec::with_capacity(seq.len());
        for layer in seq {
            let get = |key: &str| {
                layer
                    .get(serde_yaml::Value::String(key.to_string()))
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0) as f32
            };
            let color = layer
                .get(serde_yaml::Value::String("color".to_string()))
                .and_then(|v| v.as_str())
                .ok_or_else(|| parse_err(name, "shadow layer requires a color"))?;
            let color = Rgba::from_hex(color).map_err(|_| TokenError::InvalidColor {
                token: name.to_string(),
                value: color.to_string(),
            })?;
            parsed.push(ShadowLayer {
                dx: get("dx"),
                dy: get("dy"),
                blur: get("blur"),
                spread: get("spread"),
                color,
            });
        }
        return Ok(TokenEntry::Concrete(TokenValue::Shadow(ShadowSpec::new(
            parsed,
        ))));
    }

    Err(parse_err(
        name,
        "mapping must define typography (family) or shadow (layers)",
    ))
}

fn parse_err(name: &str, message: &str) -> TokenError {
    TokenError::Parse {
        path: None,
        message: format!("token '{}': {}", name, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenStore {
        TokenStore::new()
            .add("pine.700", Rgba::from_hex("#1D4B34").unwrap())
            .add("radius.xs", 4.0f32)
            .alias("interactive.primary.background.default", "pine.700")
            .alias("component.cta.background", "interactive.primary.background.default")
    }

    #[test]
    fn test_get_concrete() {
        let store = sample();
        assert_eq!(store.color("pine.700").unwrap(), Rgba::rgb(29, 75, 52));
    }

    #[test]
    fn test_get_resolves_alias_chain() {
        let store = sample();
        // Two alias hops down to the core value.
        assert_eq!(
            store.color("component.cta.background").unwrap(),
            Rgba::rgb(29, 75, 52)
        );
    }

    #[test]
    fn test_get_unknown() {
        let store = sample();
        assert_eq!(
            store.get("pine.900"),
            Err(TokenError::UnknownToken {
                name: "pine.900".to_string()
            })
        );
    }

    #[test]
    fn test_get_dangling_alias_reports_target() {
        let store = TokenStore::new().alias("a", "missing");
        assert_eq!(
            store.get("a"),
            Err(TokenError::UnknownToken {
                name: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_get_cycle() {
        let store = TokenStore::new().alias("a", "b").alias("b", "a");
        assert!(matches!(
            store.get("a"),
            Err(TokenError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_typed_accessor_mismatch() {
        let store = sample();
        let err = store.length("pine.700").unwrap_err();
        assert_eq!(
            err,
            TokenError::TypeMismatch {
                name: "pine.700".to_string(),
                expected: "length",
                found: "color",
            }
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_dangling() {
        let store = sample().alias("orphan", "missing");
        assert_eq!(
            store.validate(),
            Err(TokenError::UnresolvedAlias {
                from: "orphan".to_string(),
                to: "missing".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_cycle() {
        let store = sample().alias("a", "b").alias("b", "a");
        assert!(matches!(
            store.validate(),
            Err(TokenError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_merge_overlay_wins() {
        let base = sample();
        let overlay = TokenStore::new().add("pine.700", Rgba::from_hex("#0B1F15").unwrap());
        let merged = base.merge(overlay);
        assert_eq!(merged.color("pine.700").unwrap(), Rgba::rgb(11, 31, 21));
        // Aliases still resolve through the overridden value.
        assert_eq!(
            merged.color("component.cta.background").unwrap(),
            Rgba::rgb(11, 31, 21)
        );
    }

    #[test]
    fn test_from_yaml_colors_lengths_aliases() {
        let store = TokenStore::from_yaml(
            r##"
            pine.900: "#0B1F15"
            radius.xs: 4
            brand: pine.900
            "##,
        )
        .unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.color("brand").unwrap(), Rgba::rgb(11, 31, 21));
        assert_eq!(store.length("radius.xs").unwrap(), 4.0);
    }

    #[test]
    fn test_from_yaml_typography() {
        let store = TokenStore::from_yaml(
            r#"
            typography.button:
              family: "Source Sans 3"
              size: 16
              weight: 600
              line-height: 1.5
            "#,
        )
        .unwrap();

        let spec = store.typography("typography.button").unwrap();
        assert_eq!(spec.family, "Source Sans 3");
        assert_eq!(spec.weight, 600);
    }

    #[test]
    fn test_from_yaml_shadow() {
        let store = TokenStore::from_yaml(
            r##"
            shadow.focus:
              layers:
                - spread: 2
                  color: "#FFFFFF"
                - spread: 4
                  color: "#2E6B5C"
            "##,
        )
        .unwrap();

        let shadow = store.shadow("shadow.focus").unwrap();
        assert_eq!(shadow.layers.len(), 2);
        assert_eq!(shadow.layers[1].spread, 4.0);
    }

    #[test]
    fn test_from_yaml_invalid_color() {
        let result = TokenStore::from_yaml("bad: \"#12345\"");
        assert!(matches!(result, Err(TokenError::InvalidColor { .. })));
    }

    #[test]
    fn test_from_yaml_multibyte_hex_is_invalid_color() {
        let result = TokenStore::from_yaml("bad: \"#€\"");
        assert!(matches!(result, Err(TokenError::InvalidColor { .. })));
    }

    #[test]
    fn test_from_yaml_not_a_mapping() {
        assert!(matches!(
            TokenStore::from_yaml("- a\n- b"),
            Err(TokenError::Parse { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("brand.yaml");
        fs::write(&path, "pine.700: \"#123021\"\n").unwrap();

        let store = TokenStore::from_file(&path).unwrap();
        assert_eq!(store.color("pine.700").unwrap(), Rgba::rgb(18, 48, 33));
    }

    #[test]
    fn test_from_file_not_found() {
        assert!(matches!(
            TokenStore::from_file("/nonexistent/tokens.yaml"),
            Err(TokenError::Load { .. })
        ));
    }

    #[test]
    fn test_builtin_validates() {
        assert!(TokenStore::builtin().validate().is_ok());
    }
}
