//! Errors produced while deriving colors and palettes. Every failure here is a programming or
//! configuration mistake: nothing is transient, so nothing is ever retried.

use thiserror::Error;

/// The broad class an error belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The scheme or palette was set up wrong: bad accent count, duplicate or missing swatches,
    /// unreadable seed tables, degenerate primaries.
    Configuration,
    /// A caller passed arguments outside of an operation's domain, such as inverted search bounds.
    InvalidArgument,
    /// Two colors anchored to different reference whites were combined.
    IlluminantMismatch,
}

/// Everything that can go wrong in this crate.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A scheme was given the wrong number of accent colors.
    #[error("a scheme needs exactly {expected} accent colors, got {actual}")]
    AccentCount {
        /// How many accents a scheme takes.
        expected: usize,
        /// How many were given.
        actual: usize,
    },

    /// A swatch name or alias was registered twice in the same palette.
    #[error("swatch name or alias '{0}' is already taken")]
    DuplicateSwatch(String),

    /// An alias was attached to a swatch that doesn't exist.
    #[error("no swatch named '{0}'")]
    UnknownSwatch(String),

    /// A palette was frozen without one of the swatches every palette needs.
    #[error("palette is missing its '{0}' swatch")]
    MissingSwatch(&'static str),

    /// No built-in scheme or variant has the given name.
    #[error("unknown {what} '{name}'")]
    UnknownName {
        /// What was being looked up, e.g. "scheme".
        what: &'static str,
        /// The name that matched nothing.
        name: String,
    },

    /// The primaries (or white point) don't span a usable RGB space.
    #[error("cannot derive an RGB/XYZ transform: {0}")]
    SingularPrimaries(String),

    /// An argument was outside of its allowed domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Colors with different illuminants were blended, reflected or compared.
    #[error("cannot combine colors anchored to different illuminants")]
    IlluminantMismatch,

    /// A seed table couldn't be read or deserialized.
    #[error("could not read seed table: {0}")]
    SeedTable(#[from] csv::Error),
}

impl ColorError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ColorError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ColorError::IlluminantMismatch => ErrorKind::IlluminantMismatch,
            ColorError::AccentCount { .. }
            | ColorError::DuplicateSwatch(_)
            | ColorError::UnknownSwatch(_)
            | ColorError::MissingSwatch(_)
            | ColorError::UnknownName { .. }
            | ColorError::SingularPrimaries(_)
            | ColorError::SeedTable(_) => ErrorKind::Configuration,
        }
    }
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;
