//! A scheme is a pair of anchor colors and six accents, from which a dark and a light palette are
//! derived.
//!
//! The dark palette is designed directly: the anchors, a darker alternate background, a family of
//! four swatches per accent, and a grayscale ramp from background to foreground. The light palette
//! is not designed separately. Every dark swatch has its lightness mirrored across the bg/fg axis,
//! which keeps chroma, names, aliases, flags and order identical between the two by construction.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::color::ColorPoint;
use crate::colors::CIELUVColor;
use crate::contrast::contrast_ratio;
use crate::error::{ColorError, Result};
use crate::palette::{Palette, PaletteBuilder, SwatchFlags};
use crate::search::{find, SearchBounds};

/// How many accents a scheme takes.
pub const ACCENT_COUNT: usize = 6;

/// How far the alternate background is pulled toward black.
const ALT_BACKGROUND_WEIGHT: f64 = 0.3;
/// How far the softer accent is pulled toward the background.
const SOFT_ACCENT_WEIGHT: f64 = 0.25;
/// How far the faint accent tint is pulled toward the background.
const FAINT_TINT_WEIGHT: f64 = 0.75;

/// Grayscale steps from background toward foreground: weight, flags, terminal alias.
const GRAYSCALE: [(f64, SwatchFlags, &str); 6] = [
    (0.05, SwatchFlags::BACKGROUND.alternate(), "term17"),
    (0.1, SwatchFlags::NONE, "term18"),
    (0.25, SwatchFlags::NONE, "term8"),
    (0.38, SwatchFlags::NONE, "term19"),
    (0.5, SwatchFlags::ACCENT, "term7"),
    (0.85, SwatchFlags::NONE, "term20"),
];

/// Which of a scheme's two palettes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Light text on a dark background.
    Dark,
    /// Dark text on a light background.
    Light,
}

impl Variant {
    /// Both variants, dark first.
    pub const ALL: [Variant; 2] = [Variant::Dark, Variant::Light];
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Dark => write!(f, "dark"),
            Variant::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Variant {
    type Err = ColorError;

    /// Accepts `dark`/`night` and `light`/`day`, in any case.
    fn from_str(s: &str) -> Result<Variant> {
        match s.to_ascii_lowercase().as_str() {
            "dark" | "night" => Ok(Variant::Dark),
            "light" | "day" => Ok(Variant::Light),
            _ => Err(ColorError::UnknownName {
                what: "variant",
                name: s.to_string(),
            }),
        }
    }
}

/// Seed colors plus the two palettes derived from them. Each palette is built the first time it is
/// asked for and kept for the scheme's lifetime.
///
/// # Example
/// ```
/// # use luvtone::colors::CIELUVColor;
/// # use luvtone::scheme::Scheme;
/// let scheme = Scheme::new(
///     CIELUVColor::new(13., 1.8, -0.6),
///     CIELUVColor::new(87., 12.7, -16.4),
///     vec![
///         ("red", CIELUVColor::new(58., 97., -20.)),
///         ("lime", CIELUVColor::new(58., -7., 45.)),
///         ("yellow", CIELUVColor::new(58., 47., 20.)),
///         ("purple", CIELUVColor::new(58., 9., -84.)),
///         ("orange", CIELUVColor::new(58., 97., 32.)),
///         ("cyan", CIELUVColor::new(58., -33., 4.)),
///     ],
/// ).unwrap();
/// let dark = scheme.dark().unwrap();
/// assert_eq!(dark.get("term1").unwrap().name(), "red0");
/// assert_eq!(scheme.light().unwrap().len(), dark.len());
/// ```
#[derive(Debug, Clone)]
pub struct Scheme {
    bg: CIELUVColor,
    fg: CIELUVColor,
    accents: Vec<(String, CIELUVColor)>,
    dark: OnceLock<Palette>,
    light: OnceLock<Palette>,
}

/// Returns the cached palette, building and caching it on first use. A failed build caches nothing.
fn memoized<F>(cell: &OnceLock<Palette>, build: F) -> Result<&Palette>
where
    F: FnOnce() -> Result<Palette>,
{
    if let Some(palette) = cell.get() {
        return Ok(palette);
    }
    let palette = build()?;
    Ok(cell.get_or_init(|| palette))
}

impl Scheme {
    /// Creates a scheme from a background, a foreground and exactly six named accents, in the order
    /// they should appear. Fails on any other accent count, on repeated accent names and on colors
    /// under different illuminants.
    pub fn new<S, I>(bg: CIELUVColor, fg: CIELUVColor, accents: I) -> Result<Scheme>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, CIELUVColor)>,
    {
        let accents: Vec<(String, CIELUVColor)> = accents
            .into_iter()
            .map(|(name, color)| (name.into(), color))
            .collect();
        if accents.len() != ACCENT_COUNT {
            return Err(ColorError::AccentCount {
                expected: ACCENT_COUNT,
                actual: accents.len(),
            });
        }
        bg.check_illuminant(&fg)?;
        for (i, (name, color)) in accents.iter().enumerate() {
            bg.check_illuminant(color)?;
            if accents[..i].iter().any(|(other, _)| other == name) {
                return Err(ColorError::DuplicateSwatch(name.clone()));
            }
        }
        Ok(Scheme {
            bg,
            fg,
            accents,
            dark: OnceLock::new(),
            light: OnceLock::new(),
        })
    }

    /// The background anchor.
    pub fn bg(&self) -> &CIELUVColor {
        &self.bg
    }

    /// The foreground anchor.
    pub fn fg(&self) -> &CIELUVColor {
        &self.fg
    }

    /// The accents, in order.
    pub fn accents(&self) -> &[(String, CIELUVColor)] {
        &self.accents
    }

    /// The dark palette.
    pub fn dark(&self) -> Result<&Palette> {
        memoized(&self.dark, || self.build_dark())
    }

    /// The light palette: the dark one with each swatch's lightness reflected across bg/fg.
    pub fn light(&self) -> Result<&Palette> {
        memoized(&self.light, || self.build_light())
    }

    /// One of the two palettes.
    pub fn palette(&self, variant: Variant) -> Result<&Palette> {
        match variant {
            Variant::Dark => self.dark(),
            Variant::Light => self.light(),
        }
    }

    /// A palette by variant name, e.g. `"dark"` or `"day"`.
    pub fn by_variant_name(&self, name: &str) -> Result<&Palette> {
        self.palette(name.parse()?)
    }

    fn build_dark(&self) -> Result<Palette> {
        let bg = self.bg;
        let black = CIELUVColor::with_illuminant(0.0, 0.0, 0.0, bg.illuminant);
        let mut builder = PaletteBuilder::new();
        builder
            .add("bg", bg, SwatchFlags::BACKGROUND)?
            .alias("bg", "term0")?
            .add("fg", self.fg, SwatchFlags::FOREGROUND)?
            .alias("fg", "term15")?
            .add(
                "altbg",
                bg.blend(&black, ALT_BACKGROUND_WEIGHT)?,
                SwatchFlags::BACKGROUND.alternate(),
            )?
            .alias("altbg", "term16")?;

        for (k, (name, accent)) in self.accents.iter().enumerate() {
            // the tint that is as distinguishable from the accent as from the background
            let balanced = find(accent, &bg, SearchBounds::default(), |c| {
                Ok(contrast_ratio(c, &bg)?.value() - contrast_ratio(c, accent)?.value())
            })?;
            builder
                .add(format!("{}0", name), *accent, SwatchFlags::ACCENT)?
                .alias(&format!("{}0", name), format!("term{}", 1 + k))?
                .add(
                    format!("{}1", name),
                    accent.blend(&bg, SOFT_ACCENT_WEIGHT)?,
                    SwatchFlags::ACCENT,
                )?
                .alias(&format!("{}1", name), format!("term{}", 9 + k))?
                .add(
                    format!("{}2", name),
                    balanced.color,
                    SwatchFlags::BACKGROUND.alternate(),
                )?
                .add(
                    format!("{}3", name),
                    accent.blend(&bg, FAINT_TINT_WEIGHT)?,
                    SwatchFlags::BACKGROUND,
                )?;
        }

        for (i, &(weight, flags, alias)) in GRAYSCALE.iter().enumerate() {
            let name = format!("gray{}", i);
            builder
                .add(name.clone(), bg.blend(&self.fg, weight)?, flags)?
                .alias(&name, alias)?;
        }
        debug!("built dark palette");
        builder.build()
    }

    fn build_light(&self) -> Result<Palette> {
        let light = self
            .dark()?
            .map(|swatch| swatch.color().reflect_light(&self.bg, &self.fg))?;
        debug!("built light palette");
        Ok(light)
    }
}
