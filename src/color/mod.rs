//! HSL colour values and their CSS text forms.
//!
//! Three forms are produced, matching what the stylesheet consumes:
//! - bare channels `158 64% 52%` (read through `hsl(var(--primary))`)
//! - `hsl(160, 15%, 5%)`
//! - `hsla(158, 40%, 10%, 1)`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    Syntax(String),
    Hue(u16),
    Saturation(u8),
    Lightness(u8),
    Alpha(f32),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Syntax(raw) => write!(f, "not an hsl colour: {raw:?}"),
            ColorError::Hue(h) => write!(f, "hue {h} outside 0..=360"),
            ColorError::Saturation(s) => write!(f, "saturation {s}% outside 0..=100"),
            ColorError::Lightness(l) => write!(f, "lightness {l}% outside 0..=100"),
            ColorError::Alpha(a) => write!(f, "alpha {a} outside 0..=1"),
        }
    }
}

impl std::error::Error for ColorError {}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hsl {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

impl Hsl {
    /// Panics at compile time when used in a `const` with bad channels.
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        assert!(hue <= 360, "hue outside 0..=360");
        assert!(saturation <= 100, "saturation outside 0..=100");
        assert!(lightness <= 100, "lightness outside 0..=100");
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn try_new(hue: u16, saturation: u8, lightness: u8) -> Result<Self, ColorError> {
        if hue > 360 {
            return Err(ColorError::Hue(hue));
        }
        if saturation > 100 {
            return Err(ColorError::Saturation(saturation));
        }
        if lightness > 100 {
            return Err(ColorError::Lightness(lightness));
        }
        Ok(Self {
            hue,
            saturation,
            lightness,
        })
    }

    /// Bare channel form, e.g. `217 91% 60%`.
    pub fn channels(&self) -> String {
        format!("{} {}% {}%", self.hue, self.saturation, self.lightness)
    }

    /// Functional form, e.g. `hsl(222, 47%, 5%)`.
    pub fn css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.channels())
    }
}

/// Accepts both the bare channel form and `hsl(...)`.
impl FromStr for Hsl {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts = match function_args(trimmed, "hsl") {
            Some(args) => split_args(args, ','),
            None => split_args(trimmed, ' '),
        };
        match parts.as_slice() {
            [h, sat, l] => Hsl::try_new(
                parse_hue(h, s)?,
                parse_percent(sat, s)?,
                parse_percent(l, s)?,
            ),
            _ => Err(ColorError::Syntax(s.to_string())),
        }
    }
}

impl TryFrom<String> for Hsl {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hsl> for String {
    fn from(value: Hsl) -> Self {
        value.channels()
    }
}

/// HSL plus alpha, always rendered as `hsla(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hsla {
    hsl: Hsl,
    alpha: f32,
}

impl Hsla {
    pub const fn new(hue: u16, saturation: u8, lightness: u8, alpha: f32) -> Self {
        assert!(alpha >= 0.0 && alpha <= 1.0, "alpha outside 0..=1");
        Self {
            hsl: Hsl::new(hue, saturation, lightness),
            alpha,
        }
    }

    /// Fully opaque.
    pub const fn opaque(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self::new(hue, saturation, lightness, 1.0)
    }

    pub fn try_new(hsl: Hsl, alpha: f32) -> Result<Self, ColorError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ColorError::Alpha(alpha));
        }
        Ok(Self { hsl, alpha })
    }

    pub fn css(&self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hsl.hue, self.hsl.saturation, self.hsl.lightness, self.alpha
        )
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// Accepts `hsla(h, s%, l%, a)` and, with alpha 1, anything [`Hsl`] accepts.
impl FromStr for Hsla {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some(args) = function_args(trimmed, "hsla") else {
            return Ok(Self {
                hsl: trimmed.parse()?,
                alpha: 1.0,
            });
        };
        match split_args(args, ',').as_slice() {
            [h, sat, l, a] => {
                let hsl = Hsl::try_new(
                    parse_hue(h, s)?,
                    parse_percent(sat, s)?,
                    parse_percent(l, s)?,
                )?;
                let alpha = a
                    .parse::<f32>()
                    .map_err(|_| ColorError::Syntax(s.to_string()))?;
                Hsla::try_new(hsl, alpha)
            }
            _ => Err(ColorError::Syntax(s.to_string())),
        }
    }
}

impl TryFrom<String> for Hsla {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hsla> for String {
    fn from(value: Hsla) -> Self {
        value.css()
    }
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_args(s: &str, sep: char) -> Vec<&str> {
    s.split(sep)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

fn parse_hue(part: &str, raw: &str) -> Result<u16, ColorError> {
    part.trim_end_matches("deg")
        .parse()
        .map_err(|_| ColorError::Syntax(raw.to_string()))
}

fn parse_percent(part: &str, raw: &str) -> Result<u8, ColorError> {
    part.strip_suffix('%')
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| ColorError::Syntax(raw.to_string()))
}
