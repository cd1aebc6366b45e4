//! WCAG relative luminance and contrast ratio, measured on CIELUV colors.
//!
//! Luminance is taken in linear RGB with the D65 sRGB matrix, i.e. Y/100 of the color's XYZ
//! projection: no capping is applied first, so colors just outside of the gamut still order
//! sensibly.

use std::cmp::Ordering;
use std::fmt;

use crate::color::ColorPoint;
use crate::colors::CIELUVColor;
use crate::error::Result;

/// The relative luminance of a color, in [0, 1] for colors inside the sRGB gamut.
pub fn relative_luminance(color: &CIELUVColor) -> Result<f64> {
    color.to_linear_rgb()?.relative_luminance()
}

/// A WCAG contrast ratio: `(lighter + 0.05) / (darker + 0.05)`. Always at least 1, and 21 between
/// black and white. Displays as `X.XX:1`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastRatio(pub f64);

impl ContrastRatio {
    /// The contrast ratio between two relative luminances, in either order.
    pub fn from_luminances(l1: f64, l2: f64) -> ContrastRatio {
        let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
        ContrastRatio((lighter + 0.05) / (darker + 0.05))
    }

    /// The ratio as a number.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialOrd for ContrastRatio {
    fn partial_cmp(&self, other: &ContrastRatio) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl fmt::Display for ContrastRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1", self.0)
    }
}

/// The contrast ratio between two colors. Symmetric. Fails if the colors don't share an illuminant.
pub fn contrast_ratio(a: &CIELUVColor, b: &CIELUVColor) -> Result<ContrastRatio> {
    a.check_illuminant(b)?;
    Ok(ContrastRatio::from_luminances(
        relative_luminance(a)?,
        relative_luminance(b)?,
    ))
}
