//! Leaf token value types.
//!
//! Tokens are small immutable records: a color, a length on the 4-unit
//! grid, a shadow stack, or a typography spec. They carry no behavior
//! beyond parsing and formatting; all design decisions live in the token
//! names and the per-kind profiles that reference them.

use serde::Serialize;

/// An 8-bit RGBA color.
///
/// `a == 0` is the engine's notion of "fully transparent"; several policy
/// rules (tertiary surfaces, loading states) key off it.
///
/// # Example
///
/// ```rust
/// use veneer_style::Rgba;
///
/// let brand = Rgba::from_hex("#1D4B34").unwrap();
/// assert_eq!(brand.to_string(), "#1D4B34");
/// assert!(!brand.is_transparent());
/// assert!(Rgba::from_hex("#FCFCFC00").unwrap().is_transparent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent.
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a hex color code, with or without the `#` prefix.
    ///
    /// Supports 3-digit (`#rgb`), 6-digit (`#rrggbb`), and 8-digit
    /// (`#rrggbbaa`) forms.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        // Byte-indexed slicing below; non-ASCII input is a parse error,
        // not a panic.
        if !hex.is_ascii() {
            return Err(format!("invalid hex color: {}", s));
        }

        let channel = |range: &str| -> Result<u8, String> {
            u8::from_str_radix(range, 16).map_err(|_| format!("invalid hex color: {}", s))
        };

        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => {
                let r = channel(&hex[0..1])? * 17;
                let g = channel(&hex[1..2])? * 17;
                let b = channel(&hex[2..3])? * 17;
                Ok(Rgba::rgb(r, g, b))
            }
            6 => {
                let r = channel(&hex[0..2])?;
                let g = channel(&hex[2..4])?;
                let b = channel(&hex[4..6])?;
                Ok(Rgba::rgb(r, g, b))
            }
            8 => {
                let r = channel(&hex[0..2])?;
                let g = channel(&hex[2..4])?;
                let b = channel(&hex[4..6])?;
                let a = channel(&hex[6..8])?;
                Ok(Rgba::rgba(r, g, b, a))
            }
            _ => Err(format!(
                "invalid hex color: {} (must be 3, 6, or 8 digits)",
                s
            )),
        }
    }

    /// Whether the alpha channel is zero.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

/// One layer of a drop-shadow stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowLayer {
    pub dx: f32,
    pub dy: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Rgba,
}

impl ShadowLayer {
    /// A pure spread ring, as used by focus indicators.
    pub const fn ring(spread: f32, color: Rgba) -> Self {
        Self {
            dx: 0.0,
            dy: 0.0,
            blur: 0.0,
            spread,
            color,
        }
    }
}

/// A drop-shadow definition: zero or more layers, outermost last.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ShadowSpec {
    pub layers: Vec<ShadowLayer>,
}

impl ShadowSpec {
    /// No shadow.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(layers: Vec<ShadowLayer>) -> Self {
        Self { layers }
    }

    pub fn is_none(&self) -> bool {
        self.layers.is_empty()
    }
}

/// A resolved font specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypographySpec {
    pub family: String,
    pub size: f32,
    pub weight: u16,
    pub line_height: f32,
}

impl TypographySpec {
    pub fn new(family: impl Into<String>, size: f32, weight: u16, line_height: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight,
            line_height,
        }
    }

    /// The same spec at a different size. Density tables override size
    /// while family/weight/line-height stay per-kind.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

/// A primitive design value stored under a token name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenValue {
    Color(Rgba),
    Length(f32),
    Shadow(ShadowSpec),
    Typography(TypographySpec),
}

impl TokenValue {
    /// The value kind name, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TokenValue::Color(_) => "color",
            TokenValue::Length(_) => "length",
            TokenValue::Shadow(_) => "shadow",
            TokenValue::Typography(_) => "typography",
        }
    }
}

impl From<Rgba> for TokenValue {
    fn from(color: Rgba) -> Self {
        TokenValue::Color(color)
    }
}

impl From<f32> for TokenValue {
    fn from(length: f32) -> Self {
        TokenValue::Length(length)
    }
}

impl From<ShadowSpec> for TokenValue {
    fn from(shadow: ShadowSpec) -> Self {
        TokenValue::Shadow(shadow)
    }
}

impl From<TypographySpec> for TokenValue {
    fn from(typography: TypographySpec) -> Self {
        TokenValue::Typography(typography)
    }
}
