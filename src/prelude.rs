//! This module brings the most common functionality under a single namespace, to prevent excessive
//! imports: both color traits, the CIELUV color every palette is designed in, contrast, and the
//! palette and scheme types. The other color spaces in the [`colors`](crate::colors) module are not
//! included.

pub use crate::color::{Color, ColorPoint};
pub use crate::colors::CIELUVColor;
pub use crate::contrast::{contrast_ratio, ContrastRatio};
pub use crate::error::{ColorError, Result};
pub use crate::illuminants::Illuminant;
pub use crate::palette::{Palette, Swatch, SwatchFlags};
pub use crate::scheme::{Scheme, Variant};
