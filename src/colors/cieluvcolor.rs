//! This module implements the CIELUV color specification, which was adopted concurrently with
//! CIELAB. CIELUV is very similar to CIELAB, but with the difference that u and v are roughly
//! equivalent to red and green and luminance is then used to calculate the blue part.
//!
//! CIELUV is where every palette in this crate is designed: lightness is close to perceptually
//! even, and blending two colors keeps their chroma on a straight line, so tints toward a background
//! don't drift in hue the way they do in RGB.

use crate::color::{Color, ColorPoint};
use crate::colors::gammargbcolor::GammaRGBColor;
use crate::colors::linearrgbcolor::LinearRGBColor;
use crate::colors::xyzcolor::XYZColor;
use crate::consts::{CIE_EPSILON, CIE_OFFSET, CIE_SLOPE};
use crate::coord::Coord;
use crate::error::Result;
use crate::illuminants::{Illuminant, D65_2};

/// A similar color system to CIELAB, adapted at the same time and with similar goals. It attempts to
/// be an easy-to-convert color space from XYZ that approaches perceptual uniformity. U and V
/// represent chromaticity and roughly equate to CIELAB's A and B, but they're scaled differently and
/// act slightly differently.
/// # Example
///
/// ```
/// # use luvtone::colors::CIELUVColor;
/// let red = CIELUVColor::new(52., 128., 18.);
/// let dark = CIELUVColor::new(13., 3., 5.);
/// let light = CIELUVColor::new(78., 21., 31.);
/// // mirror the lightness across the dark/light axis, keeping the chroma
/// let reflected = red.reflect_light(&dark, &light).unwrap();
/// assert_eq!(reflected.l, 39.);
/// assert_eq!(reflected.u, 128.);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// The lightness component. Ranges from 0 to 100 by definition, although blending and
    /// reflection may push it slightly past either end.
    pub l: f64,
    /// The component that roughly equates to how red versus green the color is. Unbounded.
    pub u: f64,
    /// The component that roughly equates to how yellow versus blue the color is. Unbounded.
    pub v: f64,
    /// The reference white the color is defined against.
    pub illuminant: Illuminant,
}

/// The u′ and v′ chromaticity of an XYZ triple.
fn uv_prime(x: f64, y: f64, z: f64) -> (f64, f64) {
    let denom = x + 15.0 * y + 3.0 * z;
    (4.0 * x / denom, 9.0 * y / denom)
}

/// Division by zero lightness makes the chromaticity terms meaningless; black has no chroma, so 0 is
/// the right answer.
fn finite_or_zero(c: f64) -> f64 {
    if c.is_finite() {
        c
    } else {
        0.0
    }
}

impl CIELUVColor {
    /// A D65 color with the given components.
    pub fn new(l: f64, u: f64, v: f64) -> CIELUVColor {
        CIELUVColor::with_illuminant(l, u, v, D65_2)
    }

    /// A color with the given components under the given reference white.
    pub fn with_illuminant(l: f64, u: f64, v: f64, illuminant: Illuminant) -> CIELUVColor {
        CIELUVColor {
            l,
            u,
            v,
            illuminant,
        }
    }

    /// Flips lightness end for end: `l' = 100 - l`, chroma untouched.
    pub fn invert_light(&self) -> CIELUVColor {
        CIELUVColor {
            l: 100.0 - self.l,
            ..*self
        }
    }

    /// Mirrors lightness across a dark/light pair: `l' = light.l - l + dark.l`, chroma untouched. A
    /// color as far above `dark` as it is maps to a color as far below `light`, which is how a swatch
    /// designed against a dark background gets its counterpart against a light one.
    pub fn reflect_light(&self, dark: &CIELUVColor, light: &CIELUVColor) -> Result<CIELUVColor> {
        self.check_illuminant(dark)?;
        self.check_illuminant(light)?;
        Ok(CIELUVColor {
            l: light.l - self.l + dark.l,
            ..*self
        })
    }

    /// Converts to linear RGB via XYZ.
    pub fn to_linear_rgb(&self) -> Result<LinearRGBColor> {
        self.to_xyz()?.to_linear_rgb()
    }

    /// Converts to gamma-encoded sRGB via XYZ and linear RGB. Not clamped.
    pub fn to_gamma_rgb(&self) -> Result<GammaRGBColor> {
        self.to_linear_rgb()?.to_gamma_rgb()
    }

    /// Returns `true` if every component is within `tolerance` of the other color's and both share a
    /// white.
    pub fn approx_equal(&self, other: &CIELUVColor, tolerance: f64) -> bool {
        self.illuminant == other.illuminant
            && (self.l - other.l).abs() <= tolerance
            && (self.u - other.u).abs() <= tolerance
            && (self.v - other.v).abs() <= tolerance
    }
}

impl Color for CIELUVColor {
    /// Given an XYZ color, gets a new CIELUV color under the same white.
    fn from_xyz(xyz: XYZColor) -> Result<CIELUVColor> {
        // https://en.wikipedia.org/wiki/CIELUV, in the form tabulated by easyrgb.com
        let [xn, yn, zn] = xyz.illuminant.white_point;
        let (u_prime_n, v_prime_n) = uv_prime(xn, yn, zn);
        let (u_prime, v_prime) = uv_prime(xyz.x, xyz.y, xyz.z);

        let y_scaled = xyz.y / 100.0;
        let f_y = if y_scaled > CIE_EPSILON {
            y_scaled.cbrt()
        } else {
            CIE_SLOPE * y_scaled + CIE_OFFSET
        };
        let l = 116.0 * f_y - 16.0;
        // black has an undefined u′, v′: 0/0
        let u = finite_or_zero(13.0 * l * (u_prime - u_prime_n));
        let v = finite_or_zero(13.0 * l * (v_prime - v_prime_n));
        Ok(CIELUVColor::with_illuminant(l, u, v, xyz.illuminant))
    }

    /// Returns the `XYZColor` under the same white.
    fn to_xyz(&self) -> Result<XYZColor> {
        let [xn, yn, zn] = self.illuminant.white_point;
        let (u_prime_n, v_prime_n) = uv_prime(xn, yn, zn);

        let f_y = (self.l + 16.0) / 116.0;
        let y_scaled = if f_y.powi(3) > CIE_EPSILON {
            f_y.powi(3)
        } else {
            (f_y - CIE_OFFSET) / CIE_SLOPE
        };
        let y = y_scaled * 100.0;

        // these divide by l, and only x and z depend on them
        let u_prime = self.u / (13.0 * self.l) + u_prime_n;
        let v_prime = self.v / (13.0 * self.l) + v_prime_n;
        let x = finite_or_zero(-(9.0 * y * u_prime) / ((u_prime - 4.0) * v_prime - u_prime * v_prime));
        let z = finite_or_zero((9.0 * y - 15.0 * v_prime * y - v_prime * x) / (3.0 * v_prime));
        Ok(XYZColor::with_illuminant(x, y, z, self.illuminant))
    }
}

impl ColorPoint for CIELUVColor {
    fn coord(&self) -> Coord {
        Coord {
            x: self.l,
            y: self.u,
            z: self.v,
        }
    }
    fn with_coord(&self, coord: Coord) -> CIELUVColor {
        CIELUVColor::with_illuminant(coord.x, coord.y, coord.z, self.illuminant)
    }
    fn illuminant(&self) -> Illuminant {
        self.illuminant
    }
}
