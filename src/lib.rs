//! Luvtone derives terminal color schemes in CIELUV. A scheme is a background, a foreground and six
//! accent colors; from those it builds a dark palette of tints, shades and grays, and a light
//! palette that mirrors the dark one's lightness while keeping every hue. Working in CIELUV rather
//! than RGB means a blend toward the background stays on the accent's hue, and lightness steps look
//! even, so contrast between swatches is predictable before any of them is ever rendered.
//!
//! Contrast itself is measured the WCAG way, on relative luminance in linear sRGB, and every derived
//! swatch carries its sRGB rendering and luminance along with it.
//!
//! ```
//! use luvtone::prelude::*;
//!
//! let scheme = luvtone::schemes::hammertime()?;
//! let dark = scheme.palette(Variant::Dark)?;
//! let light = scheme.palette(Variant::Light)?;
//! // the light palette swaps which anchor is darker
//! assert!(dark.bg().color().l < dark.fg().color().l);
//! assert!(light.bg().color().l > light.fg().color().l);
//! assert!(dark.bg().contrast(dark.fg()) > ContrastRatio(7.0));
//! # Ok::<(), ColorError>(())
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate termion;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod color;
pub mod colors;
pub mod config;
mod consts;
pub mod contrast;
pub mod coord;
pub mod error;
pub mod illuminants;
pub mod palette;
pub mod prelude;
pub mod render;
pub mod scheme;
pub mod schemes;
pub mod search;
