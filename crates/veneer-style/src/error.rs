//! Error types for token lookup and variant resolution.
//!
//! The two enums split along the fatal/recoverable line: [`TokenError`]
//! indicates a broken token configuration and is raised while the engine is
//! being constructed, so a misconfigured process never starts resolving.
//! [`ResolveError`] is per-call and should fail only the offending
//! resolution request.

use std::path::PathBuf;

use crate::variant::ComponentKind;

/// Error raised by token store construction, validation, or lookup.
///
/// Any of these surfacing during [`StyleEngine::with`](crate::StyleEngine::with)
/// means the token configuration itself is broken; callers should treat that
/// as fatal rather than catching it per resolution call.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenError {
    /// A requested token identifier is absent from the store.
    UnknownToken { name: String },
    /// A token exists but holds a different value kind than requested.
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
    /// An alias references a token that doesn't exist.
    UnresolvedAlias { from: String, to: String },
    /// A cycle was detected in alias resolution.
    CycleDetected { path: Vec<String> },
    /// A color value could not be parsed.
    InvalidColor { token: String, value: String },
    /// YAML overlay parse error.
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },
    /// File loading error.
    Load { message: String },
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::UnknownToken { name } => {
                write!(f, "unknown token '{}'", name)
            }
            TokenError::TypeMismatch {
                name,
                expected,
                found,
            } => {
                write!(
                    f,
                    "token '{}' holds a {} value, expected {}",
                    name, found, expected
                )
            }
            TokenError::UnresolvedAlias { from, to } => {
                write!(f, "token '{}' aliases non-existent token '{}'", from, to)
            }
            TokenError::CycleDetected { path } => {
                write!(f, "cycle detected in token aliases: {}", path.join(" -> "))
            }
            TokenError::InvalidColor { token, value } => {
                write!(f, "invalid color '{}' for token '{}'", value, token)
            }
            TokenError::Parse { path, message } => {
                if let Some(p) = path {
                    write!(f, "failed to parse token overlay {}: {}", p.display(), message)
                } else {
                    write!(f, "failed to parse token overlay: {}", message)
                }
            }
            TokenError::Load { message } => {
                write!(f, "failed to load token overlay: {}", message)
            }
        }
    }
}

impl std::error::Error for TokenError {}

/// Error returned by a single resolution call.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// An axis value outside the component kind's declared domain.
    UnknownVariant {
        kind: ComponentKind,
        axis: &'static str,
        value: String,
    },
    /// No profile is registered for the requested kind.
    UnknownKind { kind: ComponentKind },
    /// A token lookup failed mid-resolution. Cannot occur through an engine
    /// built with [`StyleEngine::with`](crate::StyleEngine::with), which
    /// validates every role reference up front.
    Token(TokenError),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::UnknownVariant { kind, axis, value } => {
                write!(
                    f,
                    "component kind '{}' does not support {} '{}'",
                    kind.as_str(),
                    axis,
                    value
                )
            }
            ResolveError::UnknownKind { kind } => {
                write!(f, "no profile registered for kind '{}'", kind.as_str())
            }
            ResolveError::Token(source) => {
                write!(f, "token lookup failed during resolution: {}", source)
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::Token(source) => Some(source),
            _ => None,
        }
    }
}

impl From<TokenError> for ResolveError {
    fn from(err: TokenError) -> Self {
        ResolveError::Token(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_token_display() {
        let err = TokenError::UnknownToken {
            name: "gray.950".to_string(),
        };
        assert!(err.to_string().contains("gray.950"));
    }

    #[test]
    fn test_cycle_detected_display() {
        let err = TokenError::CycleDetected {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("cycle"));
        assert!(msg.contains("a -> b -> a"));
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = TokenError::TypeMismatch {
            name: "shadow.focus".to_string(),
            expected: "color",
            found: "shadow",
        };
        let msg = err.to_string();
        assert!(msg.contains("shadow.focus"));
        assert!(msg.contains("expected color"));
    }

    #[test]
    fn test_unknown_variant_display() {
        let err = ResolveError::UnknownVariant {
            kind: ComponentKind::Badge,
            axis: "appearance",
            value: "primary".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("badge"));
        assert!(msg.contains("appearance"));
        assert!(msg.contains("primary"));
    }

    #[test]
    fn test_resolve_error_source_chain() {
        use std::error::Error;

        let err = ResolveError::Token(TokenError::UnknownToken {
            name: "pine.900".to_string(),
        });
        assert!(err.source().is_some());
    }
}
