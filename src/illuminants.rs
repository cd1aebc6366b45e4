//! This module provides the reference white used to anchor every conversion, along with the RGB
//! primaries and the machinery to turn the two into RGB ↔ XYZ matrices. Rather than copying
//! tabulated matrices, the transforms are derived: the primaries' chromaticities form a basis of XYZ
//! space, and the basis is scaled so that RGB (1, 1, 1) lands exactly on the reference white. This
//! keeps the forward and inverse matrices exact inverses of each other, which the tabulated values
//! are not.

use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

use crate::error::{ColorError, Result};

/// A reference white: the viewing conditions a color is defined under. The white point is
/// normalized so that Y is 100. Its chromaticity is derived from it, so CIELUV and the RGB matrices
/// always agree on where white is.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Illuminant {
    /// The XYZ tristimulus values of the white point, with Y = 100.
    pub white_point: [f64; 3],
}

/// CIE standard illuminant D65 seen by the 2° standard observer: average daylight, and the white
/// point sRGB is defined against. Reference values from easyrgb.com and the sRGB standard.
pub const D65_2: Illuminant = Illuminant {
    white_point: [95.047, 100.0, 108.883],
};

/// The chromaticities of the red, green and blue primaries of an RGB space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primaries {
    /// Red primary (x, y).
    pub red: (f64, f64),
    /// Green primary (x, y).
    pub green: (f64, f64),
    /// Blue primary (x, y).
    pub blue: (f64, f64),
}

/// The ITU-R BT.709 primaries used by sRGB.
pub const SRGB_PRIMARIES: Primaries = Primaries {
    red: (0.64, 0.33),
    green: (0.30, 0.60),
    blue: (0.15, 0.06),
};

/// The pair of matrices that convert between linear RGB and XYZ (with Y = 1 for white) for one
/// choice of primaries and white.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RgbTransform {
    /// Linear RGB to XYZ.
    pub rgb_to_xyz: [[f64; 3]; 3],
    /// XYZ to linear RGB.
    pub xyz_to_rgb: [[f64; 3]; 3],
}

lazy_static! {
    /// sRGB under D65/2°, which is all any color in practice is displayed with. Deriving it can't
    /// fail for these constants, so the error is kept and surfaced at the point of use.
    static ref SRGB_D65: std::result::Result<RgbTransform, String> =
        RgbTransform::derive(&SRGB_PRIMARIES, &D65_2).map_err(|e| e.to_string());
}

/// Completes a chromaticity (x, y) to (x, y, 1 - x - y).
fn complete(xy: (f64, f64)) -> [f64; 3] {
    [xy.0, xy.1, 1.0 - xy.0 - xy.1]
}

fn to_array(m: &Matrix<f64>) -> [[f64; 3]; 3] {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = m[[i, j]];
        }
    }
    out
}

impl Illuminant {
    /// The (x, y) chromaticity of the white point.
    pub fn white_chromaticity(&self) -> (f64, f64) {
        let [x, y, z] = self.white_point;
        let sum = x + y + z;
        (x / sum, y / sum)
    }

    /// The white point as XYZ normalized so that Y is 1, rebuilt from its chromaticity.
    pub fn white_xyz_unit(&self) -> [f64; 3] {
        let (x, y) = self.white_chromaticity();
        [x / y, 1.0, (1.0 - x - y) / y]
    }

    /// Gets the sRGB transform anchored to this white. For D65 this is a cached value; anything else
    /// is derived on the spot.
    pub fn srgb_transform(&self) -> Result<RgbTransform> {
        if *self == D65_2 {
            match *SRGB_D65 {
                Ok(t) => Ok(t),
                Err(ref e) => Err(ColorError::SingularPrimaries(e.clone())),
            }
        } else {
            RgbTransform::derive(&SRGB_PRIMARIES, self)
        }
    }
}

impl RgbTransform {
    /// Derives the transforms for the given primaries and white. The primaries form the columns of a
    /// matrix M; solving M·S = W for the white W (with Y = 1) gives per-channel scales, and the RGB
    /// to XYZ matrix is M·diag(S). Fails if the primaries are collinear or the white point makes a
    /// channel vanish.
    pub fn derive(primaries: &Primaries, illuminant: &Illuminant) -> Result<RgbTransform> {
        let r = complete(primaries.red);
        let g = complete(primaries.green);
        let b = complete(primaries.blue);
        let m = Matrix::new(
            3,
            3,
            vec![
                r[0], g[0], b[0], //
                r[1], g[1], b[1], //
                r[2], g[2], b[2],
            ],
        );
        let white = Vector::new(illuminant.white_xyz_unit().to_vec());
        let scale = m
            .clone()
            .solve(white)
            .map_err(|e| ColorError::SingularPrimaries(e.to_string()))?;
        let scale = [scale[0], scale[1], scale[2]];
        if scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(ColorError::SingularPrimaries(format!(
                "degenerate channel scales {:?}",
                scale
            )));
        }
        let rgb_to_xyz = &m * &Matrix::from_diag(&scale[..]);
        let xyz_to_rgb = rgb_to_xyz
            .clone()
            .inverse()
            .map_err(|e| ColorError::SingularPrimaries(e.to_string()))?;
        Ok(RgbTransform {
            rgb_to_xyz: to_array(&rgb_to_xyz),
            xyz_to_rgb: to_array(&xyz_to_rgb),
        })
    }

    /// The Y row of the RGB to XYZ matrix: the luminance contributed by each linear channel.
    pub fn luminance_row(&self) -> [f64; 3] {
        self.rgb_to_xyz[1]
    }

    /// Multiplies a linear RGB triple into XYZ (Y = 1 for white).
    pub fn to_xyz(&self, rgb: [f64; 3]) -> [f64; 3] {
        mul(&self.rgb_to_xyz, rgb)
    }

    /// Multiplies an XYZ triple (Y = 1 for white) into linear RGB.
    pub fn to_rgb(&self, xyz: [f64; 3]) -> [f64; 3] {
        mul(&self.xyz_to_rgb, xyz)
    }
}

fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for (i, row) in m.iter().enumerate() {
        out[i] = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
    }
    out
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_srgb_matrix_matches_published() {
        // the commonly published sRGB matrix, rounded to 4 places
        let t = D65_2.srgb_transform().unwrap();
        let published = [
            [0.4124, 0.3576, 0.1805],
            [0.2126, 0.7152, 0.0722],
            [0.0193, 0.1192, 0.9505],
        ];
        for i in 0..3 {
            for j in 0..3 {
                assert!((t.rgb_to_xyz[i][j] - published[i][j]).abs() <= 1e-3);
            }
        }
    }

    #[test]
    fn test_inverse_is_inverse() {
        let t = D65_2.srgb_transform().unwrap();
        let rgb = [0.2, 0.5, 0.9];
        let back = t.to_rgb(t.to_xyz(rgb));
        for i in 0..3 {
            assert!((rgb[i] - back[i]).abs() <= 1e-10);
        }
    }

    #[test]
    fn test_white_maps_to_ones() {
        let t = D65_2.srgb_transform().unwrap();
        let rgb = t.to_rgb(D65_2.white_xyz_unit());
        for c in rgb.iter() {
            assert!((c - 1.0).abs() <= 1e-10);
        }
    }

    #[test]
    fn test_luminance_row_sums_to_one() {
        let row = D65_2.srgb_transform().unwrap().luminance_row();
        assert!((row.iter().sum::<f64>() - 1.0).abs() <= 1e-10);
        // the BT.709 coefficients agree to within a thousandth
        assert!((row[0] - 0.2126).abs() < 1e-3);
        assert!((row[1] - 0.7152).abs() < 1e-3);
        assert!((row[2] - 0.0722).abs() < 1e-3);
    }

    #[test]
    fn test_d65_chromaticity() {
        let (x, y) = D65_2.white_chromaticity();
        assert!((x - 0.31271).abs() <= 1e-4);
        assert!((y - 0.32902).abs() <= 1e-4);
    }

    #[test]
    fn test_non_d65_transform_maps_its_own_white() {
        let d50 = Illuminant {
            white_point: [96.422, 100.0, 82.521],
        };
        let t = d50.srgb_transform().unwrap();
        let rgb = t.to_rgb(d50.white_xyz_unit());
        for c in rgb.iter() {
            assert!((c - 1.0).abs() <= 1e-10);
        }
    }

    #[test]
    fn test_collinear_primaries_fail() {
        let bad = Primaries {
            red: (0.2, 0.2),
            green: (0.3, 0.3),
            blue: (0.4, 0.4),
        };
        assert!(RgbTransform::derive(&bad, &D65_2).is_err());
    }
}
