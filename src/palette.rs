//! Palettes: named, ordered, frozen collections of swatches.
//!
//! A palette is put together in one pass with a [`PaletteBuilder`] and then frozen into a
//! [`Palette`], which can only be read. Swatches are looked up by name or by any of their aliases;
//! iteration follows construction order, which is also each swatch's index.

use std::collections::HashMap;

use crate::color::ColorPoint;
use crate::colors::{CIELUVColor, GammaRGBColor};
use crate::contrast::{contrast_ratio, relative_luminance, ContrastRatio};
use crate::error::{ColorError, Result};

/// The roles a swatch is meant for. A swatch can have any combination, including none.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwatchFlags {
    /// Usable as a background.
    pub background: bool,
    /// Usable as the main text color.
    pub foreground: bool,
    /// Usable as highlighted text.
    pub accent: bool,
    /// A secondary variant of one of the other roles.
    pub alternate: bool,
}

impl SwatchFlags {
    /// No role at all.
    pub const NONE: SwatchFlags = SwatchFlags {
        background: false,
        foreground: false,
        accent: false,
        alternate: false,
    };
    /// Background only.
    pub const BACKGROUND: SwatchFlags = SwatchFlags {
        background: true,
        ..SwatchFlags::NONE
    };
    /// Foreground only.
    pub const FOREGROUND: SwatchFlags = SwatchFlags {
        foreground: true,
        ..SwatchFlags::NONE
    };
    /// Accent only.
    pub const ACCENT: SwatchFlags = SwatchFlags {
        accent: true,
        ..SwatchFlags::NONE
    };

    /// The same flags, also marked alternate.
    pub const fn alternate(self) -> SwatchFlags {
        SwatchFlags {
            alternate: true,
            ..self
        }
    }
}

/// One named color of a palette. The sRGB rendering and luminance are worked out once, when the
/// swatch is added.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    name: String,
    aliases: Vec<String>,
    index: usize,
    color: CIELUVColor,
    flags: SwatchFlags,
    srgb: GammaRGBColor,
    luminance: f64,
}

impl Swatch {
    /// The swatch's primary name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Other names the swatch answers to, in the order they were added.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Position in the palette.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The color itself.
    pub fn color(&self) -> &CIELUVColor {
        &self.color
    }

    /// Usage flags.
    pub fn flags(&self) -> SwatchFlags {
        self.flags
    }

    /// The sRGB rendering, clamped into [0, 255].
    pub fn srgb(&self) -> GammaRGBColor {
        self.srgb.cap()
    }

    /// The sRGB rendering before clamping; out-of-gamut colors overshoot [0, 255].
    pub fn srgb_unclamped(&self) -> GammaRGBColor {
        self.srgb
    }

    /// The clamped sRGB channels as bytes.
    pub fn rgb(&self) -> (u8, u8, u8) {
        self.srgb.rounded()
    }

    /// `#rrggbb`.
    pub fn hex(&self) -> String {
        self.srgb.to_hex()
    }

    /// WCAG relative luminance.
    pub fn relative_luminance(&self) -> f64 {
        self.luminance
    }

    /// Contrast against another swatch.
    pub fn contrast(&self, other: &Swatch) -> ContrastRatio {
        ContrastRatio::from_luminances(self.luminance, other.luminance)
    }

    /// Whether the background flag is set.
    pub fn is_background(&self) -> bool {
        self.flags.background
    }
    /// Whether the foreground flag is set.
    pub fn is_foreground(&self) -> bool {
        self.flags.foreground
    }
    /// Whether the accent flag is set.
    pub fn is_accent(&self) -> bool {
        self.flags.accent
    }
    /// Whether the alternate flag is set.
    pub fn is_alternate(&self) -> bool {
        self.flags.alternate
    }
}

/// Accumulates swatches for a palette. Names and aliases share one namespace and must be unique.
#[derive(Debug, Default)]
pub struct PaletteBuilder {
    swatches: Vec<Swatch>,
    lookup: HashMap<String, usize>,
}

impl PaletteBuilder {
    /// An empty builder.
    pub fn new() -> PaletteBuilder {
        PaletteBuilder::default()
    }

    fn claim(&mut self, name: &str, index: usize) -> Result<()> {
        if self.lookup.contains_key(name) {
            return Err(ColorError::DuplicateSwatch(name.to_string()));
        }
        self.lookup.insert(name.to_string(), index);
        Ok(())
    }

    /// Appends a swatch. Fails if the name is taken or the color's illuminant differs from the
    /// swatches already added.
    pub fn add<S: Into<String>>(
        &mut self,
        name: S,
        color: CIELUVColor,
        flags: SwatchFlags,
    ) -> Result<&mut PaletteBuilder> {
        let name = name.into();
        if let Some(first) = self.swatches.first() {
            first.color.check_illuminant(&color)?;
        }
        let srgb = color.to_gamma_rgb()?;
        let luminance = relative_luminance(&color)?;
        let index = self.swatches.len();
        self.claim(&name, index)?;
        self.swatches.push(Swatch {
            name,
            aliases: Vec::new(),
            index,
            color,
            flags,
            srgb,
            luminance,
        });
        Ok(self)
    }

    /// Gives an existing swatch another name.
    pub fn alias<S: Into<String>>(&mut self, name: &str, alias: S) -> Result<&mut PaletteBuilder> {
        let alias = alias.into();
        let index = *self
            .lookup
            .get(name)
            .ok_or_else(|| ColorError::UnknownSwatch(name.to_string()))?;
        self.claim(&alias, index)?;
        self.swatches[index].aliases.push(alias);
        Ok(self)
    }

    /// Freezes the palette. Every palette needs a `bg` and an `fg` swatch.
    pub fn build(self) -> Result<Palette> {
        let background = *self
            .lookup
            .get("bg")
            .ok_or(ColorError::MissingSwatch("bg"))?;
        let foreground = *self
            .lookup
            .get("fg")
            .ok_or(ColorError::MissingSwatch("fg"))?;
        debug!("froze palette of {} swatches", self.swatches.len());
        Ok(Palette {
            swatches: self.swatches,
            lookup: self.lookup,
            background,
            foreground,
        })
    }
}

/// A frozen, ordered set of swatches.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    swatches: Vec<Swatch>,
    lookup: HashMap<String, usize>,
    background: usize,
    foreground: usize,
}

impl Palette {
    /// Looks a swatch up by name or alias.
    pub fn get(&self, name: &str) -> Option<&Swatch> {
        self.lookup.get(name).map(|&i| &self.swatches[i])
    }

    /// Like [`get`](Palette::get), but a missing swatch is an error.
    pub fn fetch(&self, name: &str) -> Result<&Swatch> {
        self.get(name)
            .ok_or_else(|| ColorError::UnknownSwatch(name.to_string()))
    }

    /// Position of the swatch with the given name or alias.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    /// The `bg` swatch.
    pub fn bg(&self) -> &Swatch {
        &self.swatches[self.background]
    }

    /// The `fg` swatch.
    pub fn fg(&self) -> &Swatch {
        &self.swatches[self.foreground]
    }

    /// `(name, swatch)` pairs in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Swatch)> {
        self.swatches.iter().map(|s| (s.name(), s))
    }

    /// The primary names in construction order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.swatches.iter().map(|s| s.name())
    }

    /// Number of swatches.
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Whether there are no swatches. A built palette always has at least `bg` and `fg`.
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Contrast between two swatches, computed from the colors rather than the cached luminances.
    pub fn contrast(&self, a: &str, b: &str) -> Result<ContrastRatio> {
        contrast_ratio(self.fetch(a)?.color(), self.fetch(b)?.color())
    }

    /// A palette with the same names, aliases, flags and order, with every color replaced by `f`.
    pub fn map<F>(&self, mut f: F) -> Result<Palette>
    where
        F: FnMut(&Swatch) -> Result<CIELUVColor>,
    {
        let mut builder = PaletteBuilder::new();
        for swatch in &self.swatches {
            builder.add(swatch.name.clone(), f(swatch)?, swatch.flags)?;
            for alias in &swatch.aliases {
                builder.alias(&swatch.name, alias.clone())?;
            }
        }
        builder.build()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Swatch;
    type IntoIter = std::slice::Iter<'a, Swatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.swatches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::illuminants::Illuminant;

    fn minimal() -> PaletteBuilder {
        let mut builder = PaletteBuilder::new();
        builder
            .add("bg", CIELUVColor::new(13., 1.8, -0.6), SwatchFlags::BACKGROUND)
            .unwrap()
            .add("fg", CIELUVColor::new(87., 12.7, -16.4), SwatchFlags::FOREGROUND)
            .unwrap()
            .alias("bg", "term0")
            .unwrap();
        builder
    }

    #[test]
    fn test_lookup_by_name_and_alias() {
        let palette = minimal().build().unwrap();
        assert_eq!(palette.get("term0").unwrap().name(), "bg");
        assert_eq!(palette.get("bg").unwrap().aliases(), &["term0".to_string()]);
        assert!(palette.get("nope").is_none());
        assert!(palette.fetch("nope").is_err());
        assert_eq!(palette.bg().name(), "bg");
        assert_eq!(palette.fg().name(), "fg");
        assert_eq!(palette.index_of("term0"), Some(0));
        assert_eq!(palette.index_of("fg"), Some(1));
        assert_eq!(palette.index_of("nope"), None);
    }

    #[test]
    fn test_index_is_construction_order() {
        let mut builder = minimal();
        builder
            .add("red0", CIELUVColor::new(58., 97., -20.), SwatchFlags::ACCENT)
            .unwrap();
        let palette = builder.build().unwrap();
        let names: Vec<&str> = palette.names().collect();
        assert_eq!(names, vec!["bg", "fg", "red0"]);
        for (i, swatch) in palette.into_iter().enumerate() {
            assert_eq!(swatch.index(), i);
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut builder = minimal();
        let err = builder
            .add("bg", CIELUVColor::new(50., 0., 0.), SwatchFlags::NONE)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(builder.alias("fg", "term0").is_err());
        assert!(builder.alias("missing", "term1").is_err());
    }

    #[test]
    fn test_missing_bg_rejected() {
        let mut builder = PaletteBuilder::new();
        builder
            .add("fg", CIELUVColor::new(87., 0., 0.), SwatchFlags::FOREGROUND)
            .unwrap();
        let err = builder.build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_mixed_illuminants_rejected() {
        let other = Illuminant {
            white_point: [96.422, 100.0, 82.521],
        };
        let mut builder = minimal();
        let err = builder
            .add(
                "odd",
                CIELUVColor::with_illuminant(50., 0., 0., other),
                SwatchFlags::NONE,
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IlluminantMismatch);
    }

    #[test]
    fn test_swatch_rendering() {
        let mut builder = PaletteBuilder::new();
        builder
            .add("bg", CIELUVColor::new(0., 0., 0.), SwatchFlags::BACKGROUND)
            .unwrap()
            .add("fg", CIELUVColor::new(100., 0., 0.), SwatchFlags::FOREGROUND)
            .unwrap();
        let palette = builder.build().unwrap();
        assert_eq!(palette.bg().hex(), "#000000");
        assert_eq!(palette.fg().hex(), "#ffffff");
        assert_eq!(palette.fg().rgb(), (255, 255, 255));
        assert!((palette.bg().contrast(palette.fg()).value() - 21.0).abs() < 1e-6);
        assert!((palette.contrast("bg", "fg").unwrap().value() - 21.0).abs() < 1e-6);
        assert!(palette.bg().is_background() && !palette.bg().is_accent());
    }

    #[test]
    fn test_map_keeps_structure() {
        let mut builder = minimal();
        builder
            .add(
                "gray0",
                CIELUVColor::new(20., 0., 0.),
                SwatchFlags::BACKGROUND.alternate(),
            )
            .unwrap();
        let palette = builder.build().unwrap();
        let inverted = palette.map(|s| Ok(s.color().invert_light())).unwrap();
        assert_eq!(
            palette.names().collect::<Vec<_>>(),
            inverted.names().collect::<Vec<_>>()
        );
        assert_eq!(inverted.get("term0").unwrap().color().l, 87.);
        assert!(inverted.get("gray0").unwrap().is_alternate());
    }
}
