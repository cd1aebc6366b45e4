//! Terminal previews of a scheme, drawn with 24-bit ANSI escapes.
//!
//! Nothing here checks whether the output is a terminal; that is up to the caller.

use termion::{color, style};

use crate::error::Result;
use crate::palette::{Palette, Swatch};
use crate::scheme::Scheme;

fn fg(swatch: &Swatch) -> color::Fg<color::Rgb> {
    let (r, g, b) = swatch.rgb();
    color::Fg(color::Rgb(r, g, b))
}

fn bg(swatch: &Swatch) -> color::Bg<color::Rgb> {
    let (r, g, b) = swatch.rgb();
    color::Bg(color::Rgb(r, g, b))
}

/// `text` in `ink` on `paper`, followed by a reset.
pub fn paint(text: &str, ink: &Swatch, paper: &Swatch) -> String {
    format!("{}{}{}{}", fg(ink), bg(paper), text, style::Reset)
}

/// One swatch as seen in its palette: the unclamped sRGB triple, the contrast against the
/// background, the hex code drawn in the swatch on the background, and the foreground drawn on the
/// swatch.
pub fn swatch_cell(swatch: &Swatch, palette: &Palette) -> String {
    let (r, g, b) = swatch.srgb_unclamped().rounded_unclamped();
    let hex = swatch.hex();
    format!(
        "{:4},{:4},{:4} ({}):{}{}",
        r,
        g,
        b,
        swatch.contrast(palette.bg()),
        paint(&hex, swatch, palette.bg()),
        paint(&hex, palette.fg(), swatch),
    )
}

/// One line per swatch, the dark variant next to its light counterpart.
pub fn swatch_rows(scheme: &Scheme) -> Result<String> {
    let dark = scheme.dark()?;
    let light = scheme.light()?;
    let mut out = String::new();
    for (d, l) in dark.into_iter().zip(light) {
        out.push_str(&format!(
            "{:<8}{}  {}\n",
            d.name(),
            swatch_cell(d, dark),
            swatch_cell(l, light)
        ));
    }
    Ok(out)
}

/// A readability grid: a row for every accent swatch, a column for every background swatch, and in
/// each cell their contrast ratio drawn in the one on the other.
pub fn compare_matrix(palette: &Palette) -> String {
    let backgrounds: Vec<&Swatch> = palette.into_iter().filter(|s| s.is_background()).collect();
    let mut out = format!("{:<8}", "");
    for column in &backgrounds {
        out.push_str(&format!(" {:>8}", column.name()));
    }
    out.push('\n');
    for row in palette.into_iter().filter(|s| s.is_accent()) {
        out.push_str(&format!("{:<8}", row.name()));
        for column in &backgrounds {
            let ratio = format!("{:>8.2}", row.contrast(column).value());
            out.push(' ');
            out.push_str(&paint(&ratio, row, column));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::CIELUVColor;
    use crate::palette::{PaletteBuilder, SwatchFlags};
    use crate::schemes;

    fn black_and_white() -> Palette {
        let mut builder = PaletteBuilder::new();
        builder
            .add("bg", CIELUVColor::new(0., 0., 0.), SwatchFlags::BACKGROUND)
            .unwrap()
            .add("fg", CIELUVColor::new(100., 0., 0.), SwatchFlags::FOREGROUND)
            .unwrap()
            .add("hot", CIELUVColor::new(53., 175., 38.), SwatchFlags::ACCENT)
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_paint_escapes() {
        let palette = black_and_white();
        assert_eq!(
            paint("x", palette.fg(), palette.bg()),
            "\x1b[38;2;255;255;255m\x1b[48;2;0;0;0mx\x1b[m"
        );
    }

    #[test]
    fn test_swatch_cell() {
        let palette = black_and_white();
        let cell = swatch_cell(palette.fg(), &palette);
        assert!(cell.starts_with(" 255, 255, 255 (21.00:1):"), "{:?}", cell);
        assert!(cell.contains("\x1b[38;2;255;255;255m\x1b[48;2;0;0;0m#ffffff"));
        assert!(cell.ends_with("\x1b[38;2;255;255;255m\x1b[48;2;255;255;255m#ffffff\x1b[m"));
    }

    #[test]
    fn test_unclamped_triple_is_shown() {
        let palette = black_and_white();
        let hot = palette.get("hot").unwrap();
        let (r, _, _) = hot.srgb_unclamped().rounded_unclamped();
        let cell = swatch_cell(hot, &palette);
        assert!(cell.starts_with(&format!("{:4},", r)));
        // the escapes themselves are always clamped
        assert!(!cell.contains("38;2;-"));
    }

    #[test]
    fn test_swatch_rows() {
        let scheme = schemes::hammertime().unwrap();
        let rows = swatch_rows(&scheme).unwrap();
        let lines: Vec<&str> = rows.lines().collect();
        assert_eq!(lines.len(), scheme.dark().unwrap().len());
        assert!(lines[0].starts_with("bg      "));
        assert!(lines[32].starts_with("gray5   "));
    }

    #[test]
    fn test_compare_matrix() {
        let palette = black_and_white();
        let matrix = compare_matrix(&palette);
        let lines: Vec<&str> = matrix.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("{:<8} {:>8}", "", "bg"));
        assert!(lines[1].starts_with("hot     "));
    }
}
