//! Gamma-encoded sRGB in the 0-255 range terminals and displays take.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::colors::linearrgbcolor::{decode_channel, LinearRGBColor};
use crate::colors::xyzcolor::XYZColor;
use crate::consts::CHANNEL_MAX;
use crate::error::{ColorError, Result};

/// An sRGB color with channels nominally in [0, 255]. Colors converted from outside of the sRGB
/// gamut can overshoot either end until [`cap`](GammaRGBColor::cap) is applied. sRGB is always D65.
///
/// # Example
/// ```
/// # use luvtone::colors::GammaRGBColor;
/// let rgb = GammaRGBColor::new(300., -10., 128.);
/// assert_eq!(rgb.cap().rounded(), (255, 0, 128));
/// assert_eq!(rgb.to_hex(), "#ff0080");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GammaRGBColor {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

impl GammaRGBColor {
    /// A color with the given channels.
    pub fn new(r: f64, g: f64, b: f64) -> GammaRGBColor {
        GammaRGBColor { r, g, b }
    }

    /// Clamps every channel into [0, 255].
    pub fn cap(&self) -> GammaRGBColor {
        let clamp = |c: f64| c.clamp(0.0, CHANNEL_MAX);
        GammaRGBColor::new(clamp(self.r), clamp(self.g), clamp(self.b))
    }

    /// The channels rounded to the nearest integer, without capping: values outside of 0-255 are
    /// kept so callers can show how far out of gamut a color is.
    pub fn rounded_unclamped(&self) -> (i64, i64, i64) {
        (
            self.r.round() as i64,
            self.g.round() as i64,
            self.b.round() as i64,
        )
    }

    /// The capped channels rounded to bytes.
    pub fn rounded(&self) -> (u8, u8, u8) {
        let c = self.cap();
        (c.r.round() as u8, c.g.round() as u8, c.b.round() as u8)
    }

    /// Formats the capped, rounded channels as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rounded();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Undoes the transfer function.
    pub fn to_linear_rgb(&self) -> LinearRGBColor {
        LinearRGBColor::new(
            decode_channel(self.r / CHANNEL_MAX),
            decode_channel(self.g / CHANNEL_MAX),
            decode_channel(self.b / CHANNEL_MAX),
        )
    }
}

impl fmt::Display for GammaRGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for GammaRGBColor {
    type Err = ColorError;

    /// Parses `#rrggbb`, with or without the leading `#`.
    fn from_str(s: &str) -> Result<GammaRGBColor> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let invalid = || ColorError::InvalidArgument(format!("'{}' is not a #rrggbb hex code", s));
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(f64::from)
                .map_err(|_| invalid())
        };
        Ok(GammaRGBColor::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Color for GammaRGBColor {
    fn from_xyz(xyz: XYZColor) -> Result<GammaRGBColor> {
        xyz.to_linear_rgb()?.to_gamma_rgb()
    }
    fn to_xyz(&self) -> Result<XYZColor> {
        self.to_linear_rgb().to_xyz()
    }
}
