//! This file provides the numeric constants shared by the color conversions. They live here rather
//! than inline so that each forward conversion and its inverse are guaranteed to use the exact same
//! values: a threshold that is off in the fourth decimal on one side of a round trip is enough to
//! make colors drift after a few conversions.

/// The CIE threshold on the relative luminance Y/Yn separating the linear and cube-root parts of
/// the lightness function. The CIE value is (6/29)^3; this is the tabulated truncation.
///
/// Together with the truncated [`CIE_SLOPE`] the two branches don't meet exactly at the threshold.
/// In the band of lightness around L = 8 where forward and inverse conversions pick different
/// branches, a CIELUV round trip is off by up to about 4e-5 in L. Everywhere else it is exact to
/// rounding.
pub const CIE_EPSILON: f64 = 0.008856;

/// The slope of the linear part of the lightness function, applied to Y/Yn. The exact CIE value is
/// 841/108 = 7.7870370...; see [`CIE_EPSILON`] for what the truncation costs.
pub const CIE_SLOPE: f64 = 7.787;

/// The offset of the lightness function, 16/116.
pub const CIE_OFFSET: f64 = 16.0 / 116.0;

/// Below this linear value the sRGB transfer function is linear.
pub const SRGB_LINEAR_CUTOFF: f64 = 0.0031308;

/// Slope of the linear part of the sRGB transfer function.
pub const SRGB_LINEAR_SLOPE: f64 = 12.92;

/// Exponent of the curved part of the sRGB transfer function.
pub const SRGB_GAMMA: f64 = 2.4;

/// Scale of the curved part of the sRGB transfer function.
pub const SRGB_SCALE: f64 = 1.055;

/// Offset of the curved part of the sRGB transfer function.
pub const SRGB_OFFSET: f64 = 0.055;

/// The largest value of a gamma-encoded channel.
pub const CHANNEL_MAX: f64 = 255.0;

/// Tolerance used in tests for values that should survive a round trip unchanged.
#[cfg(test)]
pub const TEST_PRECISION: f64 = 1e-6;
