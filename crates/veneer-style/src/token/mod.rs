//! Design tokens: leaf values and the named registry.
//!
//! A token is a named, immutable primitive design value. The store holds
//! three alias tiers (raw → semantic → component); everything downstream
//! of this module speaks in token *names* and resolves them here at
//! resolution time.
//!
//! The store is created once at process start and never mutated. Host
//! applications can overlay the built-in set with a YAML file:
//!
//! ```rust,no_run
//! use veneer_style::TokenStore;
//!
//! let store = TokenStore::builtin().merge(TokenStore::from_file("./brand.yaml")?);
//! # Ok::<(), veneer_style::TokenError>(())
//! ```

mod builtin;
mod store;
mod value;

pub use store::{TokenEntry, TokenStore};
pub use value::{Rgba, ShadowLayer, ShadowSpec, TokenValue, TypographySpec};
