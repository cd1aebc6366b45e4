//! The CIE 1931 XYZ tristimulus space, the hub every conversion passes through.

use crate::color::Color;
use crate::colors::linearrgbcolor::LinearRGBColor;
use crate::error::Result;
use crate::illuminants::{Illuminant, D65_2};

/// A point in the CIE 1931 XYZ color space, scaled so that the reference white has Y = 100.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis, a mix of the cone responses.
    pub x: f64,
    /// The Y axis: luminance. 0 for black, 100 for the reference white.
    pub y: f64,
    /// The Z axis, roughly the short-wavelength cone response.
    pub z: f64,
    /// The reference white these values are relative to.
    pub illuminant: Illuminant,
}

impl XYZColor {
    /// A D65 color with the given components.
    pub fn new(x: f64, y: f64, z: f64) -> XYZColor {
        XYZColor::with_illuminant(x, y, z, D65_2)
    }

    /// A color with the given components under the given reference white.
    pub fn with_illuminant(x: f64, y: f64, z: f64, illuminant: Illuminant) -> XYZColor {
        XYZColor { x, y, z, illuminant }
    }

    /// The reference white of an illuminant as a color.
    pub fn white_point(illuminant: Illuminant) -> XYZColor {
        let [x, y, z] = illuminant.white_point;
        XYZColor { x, y, z, illuminant }
    }

    /// Converts to linear RGB with the sRGB primaries, anchored to this color's white.
    pub fn to_linear_rgb(&self) -> Result<LinearRGBColor> {
        let transform = self.illuminant.srgb_transform()?;
        let [r, g, b] = transform.to_rgb([self.x / 100.0, self.y / 100.0, self.z / 100.0]);
        Ok(LinearRGBColor::with_illuminant(r, g, b, self.illuminant))
    }

    /// Returns `true` if every component is within `tolerance` of the other color's and both share a
    /// white.
    pub fn approx_equal(&self, other: &XYZColor, tolerance: f64) -> bool {
        self.illuminant == other.illuminant
            && (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> Result<XYZColor> {
        Ok(xyz)
    }
    fn to_xyz(&self) -> Result<XYZColor> {
        Ok(*self)
    }
}
