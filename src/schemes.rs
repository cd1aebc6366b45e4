//! The schemes that ship with the crate, designed directly in CIELUV.

use crate::colors::CIELUVColor;
use crate::error::{ColorError, Result};
use crate::scheme::Scheme;

/// The names [`by_name`] knows, in the order they should be listed.
pub const NAMES: [&str; 2] = ["undefined", "hammertime"];

/// A warm, saturated scheme: a reddish-black background, a dusty pink foreground and accents that
/// vary in lightness as well as hue.
pub fn undefined() -> Result<Scheme> {
    Scheme::new(
        CIELUVColor::new(13., 3., 5.),
        CIELUVColor::new(78., 21., 31.),
        vec![
            ("red", CIELUVColor::new(52., 128., 18.)),
            ("lime", CIELUVColor::new(60., 5., 66.)),
            ("yellow", CIELUVColor::new(65., 50., 45.)),
            ("purple", CIELUVColor::new(50., 84., -5.)),
            ("orange", CIELUVColor::new(57., 103., 39.)),
            ("cyan", CIELUVColor::new(60., -30., 1.)),
        ],
    )
}

/// A cooler scheme whose accents all share lightness 58, so they sit at the same contrast against
/// either background.
pub fn hammertime() -> Result<Scheme> {
    Scheme::new(
        CIELUVColor::new(13., 1.8, -0.6),
        CIELUVColor::new(87., 12.7, -16.4),
        vec![
            ("red", CIELUVColor::new(58., 97., -20.)),
            ("lime", CIELUVColor::new(58., -7., 45.)),
            ("yellow", CIELUVColor::new(58., 47., 20.)),
            ("purple", CIELUVColor::new(58., 9., -84.)),
            ("orange", CIELUVColor::new(58., 97., 32.)),
            ("cyan", CIELUVColor::new(58., -33., 4.)),
        ],
    )
}

/// Looks a built-in scheme up by name, ignoring case.
pub fn by_name(name: &str) -> Result<Scheme> {
    match name.to_ascii_lowercase().as_str() {
        "undefined" => undefined(),
        "hammertime" => hammertime(),
        _ => Err(ColorError::UnknownName {
            what: "scheme",
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::scheme::Variant;

    #[test]
    fn test_every_builtin_builds() {
        for name in NAMES.iter() {
            let scheme = by_name(name).unwrap();
            for variant in Variant::ALL.iter() {
                let palette = scheme.palette(*variant).unwrap();
                assert_eq!(palette.len(), 33, "{} {}", name, variant);
            }
        }
    }

    #[test]
    fn test_unknown_scheme() {
        let err = by_name("solarized").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.to_string(), "unknown scheme 'solarized'");
        assert!(by_name("HammerTime").is_ok());
    }

    #[test]
    fn test_anchor_contrast_is_readable() {
        for name in NAMES.iter() {
            let scheme = by_name(name).unwrap();
            let dark = scheme.dark().unwrap();
            assert!(dark.bg().contrast(dark.fg()).value() > 7.0, "{}", name);
        }
    }
}
