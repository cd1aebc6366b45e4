//! Linear RGB: sRGB primaries without the transfer function applied, so that values are proportional
//! to emitted light. This is the space luminance is measured in.

use crate::color::{Color, ColorPoint};
use crate::colors::gammargbcolor::GammaRGBColor;
use crate::colors::xyzcolor::XYZColor;
use crate::consts::{
    CHANNEL_MAX, SRGB_GAMMA, SRGB_LINEAR_CUTOFF, SRGB_LINEAR_SLOPE, SRGB_OFFSET, SRGB_SCALE,
};
use crate::coord::Coord;
use crate::error::{ColorError, Result};
use crate::illuminants::{Illuminant, D65_2};

/// A color in linear RGB with the sRGB primaries. Each channel is nominally in [0, 1] but may fall
/// outside of it for colors outside of the sRGB gamut.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRGBColor {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
    /// The reference white the color was converted under.
    pub illuminant: Illuminant,
}

/// Applies the sRGB transfer function to one linear channel, giving a value nominally in [0, 1].
pub fn encode_channel(c: f64) -> f64 {
    if c > SRGB_LINEAR_CUTOFF {
        SRGB_SCALE * c.powf(1.0 / SRGB_GAMMA) - SRGB_OFFSET
    } else {
        SRGB_LINEAR_SLOPE * c
    }
}

/// Undoes the sRGB transfer function on one channel nominally in [0, 1].
pub fn decode_channel(c: f64) -> f64 {
    if c <= SRGB_LINEAR_SLOPE * SRGB_LINEAR_CUTOFF {
        c / SRGB_LINEAR_SLOPE
    } else {
        ((c + SRGB_OFFSET) / SRGB_SCALE).powf(SRGB_GAMMA)
    }
}

impl LinearRGBColor {
    /// A D65 color with the given channels.
    pub fn new(r: f64, g: f64, b: f64) -> LinearRGBColor {
        LinearRGBColor::with_illuminant(r, g, b, D65_2)
    }

    /// A color with the given channels under the given reference white.
    pub fn with_illuminant(r: f64, g: f64, b: f64, illuminant: Illuminant) -> LinearRGBColor {
        LinearRGBColor {
            r,
            g,
            b,
            illuminant,
        }
    }

    /// Gamma-encodes into 0-255 sRGB. sRGB is only defined under D65, so any other white is an
    /// error. The result isn't clamped: see [`GammaRGBColor::cap`].
    pub fn to_gamma_rgb(&self) -> Result<GammaRGBColor> {
        if self.illuminant != D65_2 {
            return Err(ColorError::IlluminantMismatch);
        }
        Ok(GammaRGBColor::new(
            encode_channel(self.r) * CHANNEL_MAX,
            encode_channel(self.g) * CHANNEL_MAX,
            encode_channel(self.b) * CHANNEL_MAX,
        ))
    }

    /// The relative luminance: the Y row of the D65 sRGB matrix dotted with the channels. The
    /// coefficients come from the matrix rather than the rounded BT.709 constants, so that white has
    /// a luminance of exactly 1. D65 is assumed regardless of the color's own white, as that is what
    /// a display shows it under.
    pub fn relative_luminance(&self) -> Result<f64> {
        let row = D65_2.srgb_transform()?.luminance_row();
        Ok(row[0] * self.r + row[1] * self.g + row[2] * self.b)
    }
}

impl Color for LinearRGBColor {
    fn from_xyz(xyz: XYZColor) -> Result<LinearRGBColor> {
        xyz.to_linear_rgb()
    }
    fn to_xyz(&self) -> Result<XYZColor> {
        let transform = self.illuminant.srgb_transform()?;
        let [x, y, z] = transform.to_xyz([self.r, self.g, self.b]);
        Ok(XYZColor::with_illuminant(
            x * 100.0,
            y * 100.0,
            z * 100.0,
            self.illuminant,
        ))
    }
}

impl ColorPoint for LinearRGBColor {
    fn coord(&self) -> Coord {
        Coord {
            x: self.r,
            y: self.g,
            z: self.b,
        }
    }
    fn with_coord(&self, coord: Coord) -> LinearRGBColor {
        LinearRGBColor::with_illuminant(coord.x, coord.y, coord.z, self.illuminant)
    }
    fn illuminant(&self) -> Illuminant {
        self.illuminant
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::consts::TEST_PRECISION;

    #[test]
    fn test_transfer_round_trip() {
        for i in 0..=1000 {
            let c = i as f64 / 1000.0;
            assert!((decode_channel(encode_channel(c)) - c).abs() <= TEST_PRECISION);
        }
    }

    #[test]
    fn test_gamma_round_trip() {
        let rgb = LinearRGBColor::new(0.002, 0.2, 0.9);
        let back = rgb.to_gamma_rgb().unwrap().to_linear_rgb();
        assert!((back.r - rgb.r).abs() <= TEST_PRECISION);
        assert!((back.g - rgb.g).abs() <= TEST_PRECISION);
        assert!((back.b - rgb.b).abs() <= TEST_PRECISION);
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(LinearRGBColor::new(0., 0., 0.).relative_luminance().unwrap(), 0.0);
        let white = LinearRGBColor::new(1., 1., 1.).relative_luminance().unwrap();
        assert!((white - 1.0).abs() <= 1e-10);
    }

    #[test]
    fn test_blend_is_luminance_linear() {
        let black = LinearRGBColor::new(0., 0., 0.);
        let white = LinearRGBColor::new(1., 1., 1.);
        let half = black.blend(&white, 0.5).unwrap();
        assert!((half.relative_luminance().unwrap() - 0.5).abs() <= 1e-10);
    }

    #[test]
    fn test_non_d65_has_no_srgb() {
        let other = Illuminant {
            white_point: [96.422, 100.0, 82.521],
        };
        let rgb = LinearRGBColor::with_illuminant(0.5, 0.5, 0.5, other);
        assert!(rgb.to_gamma_rgb().is_err());
    }
}
