//! This file defines the [`Color`] trait, which every color representation implements by converting
//! to and from CIE 1931 XYZ, and the [`ColorPoint`] trait for colors that can be treated as points in
//! 3D space and blended there.
//!
//! Note that there is one very crucial thing to remember about blending: it differs depending on
//! the color space being used. Blending two colors in CIELUV keeps hue roughly constant and moves
//! evenly in perceived lightness, which is what tints and shades want; blending in linear RGB mixes
//! light the way a display does, which is what luminance arithmetic wants. `A.blend(B)` is only
//! allowed when A and B share a type, so the space is always explicit at the call site.

use crate::colors::xyzcolor::XYZColor;
use crate::coord::Coord;
use crate::error::{ColorError, Result};
use crate::illuminants::Illuminant;

/// A trait that includes any color representation that can be converted to and from the CIE 1931 XYZ
/// color space. Conversions into RGB need the illuminant's RGB transform, which can fail to derive
/// for a degenerate white, so both directions are fallible.
pub trait Color: Sized {
    /// Converts from XYZ to this color.
    fn from_xyz(xyz: XYZColor) -> Result<Self>;
    /// Converts this color to XYZ.
    fn to_xyz(&self) -> Result<XYZColor>;
    /// Converts this color into any other color by going through XYZ.
    fn convert<T: Color>(&self) -> Result<T> {
        T::from_xyz(self.to_xyz()?)
    }
}

/// A color that can be embedded in 3D space and carries the illuminant it is defined under.
pub trait ColorPoint: Copy {
    /// The color's components as a point.
    fn coord(&self) -> Coord;
    /// A color with the given components and this color's illuminant.
    fn with_coord(&self, coord: Coord) -> Self;
    /// The reference white this color is defined under.
    fn illuminant(&self) -> Illuminant;

    /// Fails with [`ColorError::IlluminantMismatch`] unless both colors share a reference white.
    fn check_illuminant(&self, other: &Self) -> Result<()> {
        if self.illuminant() == other.illuminant() {
            Ok(())
        } else {
            Err(ColorError::IlluminantMismatch)
        }
    }

    /// Blends `self` toward `other`: channel by channel `self * (1 - weight) + other * weight`. The
    /// weight is clamped to [0, 1], so the result never overshoots either endpoint. Fails on a
    /// non-finite weight or on colors with different illuminants.
    fn blend(&self, other: &Self, weight: f64) -> Result<Self> {
        if weight.is_nan() {
            return Err(ColorError::InvalidArgument(
                "blend weight must not be NaN".to_string(),
            ));
        }
        self.check_illuminant(other)?;
        let weight = weight.clamp(0.0, 1.0);
        Ok(self.with_coord(self.coord().lerp(&other.coord(), weight)))
    }
}
