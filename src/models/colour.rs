//! Colours for highlighted keys
//!
//! A thin wrapper over `palette::Srgb<f64>`. Chord palettes use a handful of
//! CSS named colours; mode palettes start from a fixed hue and are
//! brightened or darkened by distance from the tonic.

use palette::{named, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Build a `Colour` from an 8-bit `Srgb` in a const context
macro_rules! srgb8 {
    ($rgb:expr) => {{
        let rgb: palette::Srgb<u8> = $rgb;
        $crate::models::colour::Colour(palette::Srgb::new(
            rgb.red as f64 / 255.0,
            rgb.green as f64 / 255.0,
            rgb.blue as f64 / 255.0,
        ))
    }};
}
pub(crate) use srgb8;

/// Brightness step per semitone of distance from the tonic
pub const BRIGHTNESS_STEP: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Colour(pub Srgb<f64>);

impl Colour {
    pub const WHITE: Colour = srgb8!(named::WHITE);
    pub const BLACK: Colour = srgb8!(named::BLACK);
    pub const WHITESMOKE: Colour = srgb8!(named::WHITESMOKE);
    pub const LIGHTYELLOW: Colour = srgb8!(named::LIGHTYELLOW);
    pub const LIGHTBLUE: Colour = srgb8!(named::LIGHTBLUE);
    pub const LIGHTGREEN: Colour = srgb8!(named::LIGHTGREEN);
    pub const LIGHTSALMON: Colour = srgb8!(named::LIGHTSALMON);
    pub const PLUM: Colour = srgb8!(named::PLUM);
    pub const LIGHTCORAL: Colour = srgb8!(named::LIGHTCORAL);
    pub const DARKRED: Colour = srgb8!(named::DARKRED);
    pub const PINK: Colour = srgb8!(named::PINK);

    pub fn to_srgb8(&self) -> Srgb<u8> {
        self.0.into_format()
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:x}", self.to_srgb8())
    }

    /// Brighten toward white for positive `factor`, darken toward black for
    /// negative `factor`. Every channel is clamped to `[0, 1]`.
    pub fn adjust_brightness(&self, factor: f64) -> Colour {
        let shade = |c: f64| {
            let shaded = if factor > 0.0 {
                c + (1.0 - c) * factor
            } else {
                c * (1.0 + factor)
            };
            shaded.clamp(0.0, 1.0)
        };
        Colour(Srgb::new(
            shade(self.0.red),
            shade(self.0.green),
            shade(self.0.blue),
        ))
    }

    /// Brightness adjustment for a note `semitones` away from the tonic
    pub fn shade_for_distance(&self, semitones: i32) -> Colour {
        self.adjust_brightness(BRIGHTNESS_STEP * semitones as f64)
    }

    /// Mean channel value, used to compare shades
    pub fn luminance(&self) -> f64 {
        (self.0.red + self.0.green + self.0.blue) / 3.0
    }
}

impl From<Srgb<u8>> for Colour {
    fn from(rgb: Srgb<u8>) -> Self {
        Colour(rgb.into_format())
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Hex (`#rrggbb`, `#rgb`, `#` optional) or a CSS colour name
impl FromStr for Colour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(rgb) = s.parse::<Srgb<u8>>() {
            return Ok(rgb.into());
        }
        named::from_str(&s.to_lowercase())
            .map(Colour::from)
            .ok_or_else(|| format!("Invalid colour: '{}'", s))
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> String {
        colour.to_hex()
    }
}

impl TryFrom<String> for Colour {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
