//! This module contains the color value types, each of which implements [`Color`]. Every type is
//! immutable: transforms return a new value. For convenience, each main type is imported into this
//! module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod cieluvcolor;
pub mod gammargbcolor;
pub mod linearrgbcolor;
pub mod xyzcolor;

// for convenience, use this namespace for the color objects
pub use self::cieluvcolor::CIELUVColor;
pub use self::gammargbcolor::GammaRGBColor;
pub use self::linearrgbcolor::LinearRGBColor;
pub use self::xyzcolor::XYZColor;
