//! Reading scheme seeds from a CSV table.
//!
//! A seed table has a `name,l,u,v` header and one row per seed color, all D65 CIELUV. The rows
//! named `bg` and `fg` are the anchors; every other row is an accent, taken in file order:
//!
//! ```text
//! name,l,u,v
//! bg,13,1.8,-0.6
//! fg,87,12.7,-16.4
//! red,58,97,-20
//! ...
//! ```

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::colors::CIELUVColor;
use crate::error::{ColorError, Result};
use crate::scheme::Scheme;

#[derive(Debug, Serialize, Deserialize)]
struct Record {
    name: String,
    l: f64,
    u: f64,
    v: f64,
}

/// Reads a seed table and builds a scheme from it.
pub fn from_reader<R: io::Read>(rdr: R) -> Result<Scheme> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(rdr);
    let mut bg = None;
    let mut fg = None;
    let mut accents = vec![];
    for result in reader.deserialize() {
        let record: Record = result?;
        let color = CIELUVColor::new(record.l, record.u, record.v);
        let anchor = match record.name.as_str() {
            "bg" => Some(&mut bg),
            "fg" => Some(&mut fg),
            _ => None,
        };
        match anchor {
            Some(slot) => {
                if slot.replace(color).is_some() {
                    return Err(ColorError::DuplicateSwatch(record.name));
                }
            }
            None => accents.push((record.name, color)),
        }
    }
    let bg = bg.ok_or(ColorError::MissingSwatch("bg"))?;
    let fg = fg.ok_or(ColorError::MissingSwatch("fg"))?;
    debug!("read seed table with {} accents", accents.len());
    Scheme::new(bg, fg, accents)
}

/// Reads the seed table at `path`.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Scheme> {
    let file = File::open(path.as_ref()).map_err(csv::Error::from)?;
    debug!("reading seed table {}", path.as_ref().display());
    from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const HAMMERTIME: &str = "name,l,u,v
bg,13,1.8,-0.6
fg,87,12.7,-16.4
red,58,97,-20
lime,58,-7,45
yellow,58,47,20
purple,58,9,-84
orange,58,97,32
cyan,58,-33,4
";

    #[test]
    fn test_reads_seed_table() {
        let scheme = from_reader(HAMMERTIME.as_bytes()).unwrap();
        assert_eq!(scheme.bg(), &CIELUVColor::new(13., 1.8, -0.6));
        assert_eq!(scheme.fg(), &CIELUVColor::new(87., 12.7, -16.4));
        let names: Vec<&str> = scheme.accents().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["red", "lime", "yellow", "purple", "orange", "cyan"]);
        assert_eq!(scheme.accents()[3].1, CIELUVColor::new(58., 9., -84.));
    }

    #[test]
    fn test_matches_builtin() {
        let from_csv = from_reader(HAMMERTIME.as_bytes()).unwrap();
        let builtin = crate::schemes::hammertime().unwrap();
        assert_eq!(from_csv.dark().unwrap(), builtin.dark().unwrap());
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let table = HAMMERTIME.replace(',', ", ");
        assert!(from_reader(table.as_bytes()).is_ok());
    }

    #[test]
    fn test_missing_anchor() {
        let table: String = HAMMERTIME
            .lines()
            .filter(|line| !line.starts_with("fg"))
            .map(|line| format!("{}\n", line))
            .collect();
        let err = from_reader(table.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "palette is missing its 'fg' swatch");
    }

    #[test]
    fn test_repeated_anchor() {
        let table = format!("{}bg,20,0,0\n", HAMMERTIME);
        let err = from_reader(table.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_too_few_accents() {
        let table: String = HAMMERTIME.lines().take(8).map(|l| format!("{}\n", l)).collect();
        let err = from_reader(table.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("got 5"));
    }

    #[test]
    fn test_bad_number() {
        let table = HAMMERTIME.replace("58,97,-20", "58,lots,-20");
        let err = from_reader(table.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_missing_file() {
        assert!(from_path("/nonexistent/seeds.csv").is_err());
    }
}
