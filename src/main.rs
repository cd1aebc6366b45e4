//! Previews a scheme in the terminal.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::{debug, LevelFilter};

use luvtone::render;
use luvtone::scheme::{Scheme, Variant};
use luvtone::{config, schemes};

/// What to draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Every swatch, dark and light side by side
    Swatches,
    /// Contrast of every accent swatch on every background swatch
    Compare,
}

/// luvtone - terminal color schemes derived in CIELUV
#[derive(Parser, Debug)]
#[command(name = "luvtone")]
#[command(version)]
#[command(about = "Derives dark and light terminal palettes from a handful of CIELUV seeds", long_about = None)]
struct Args {
    /// What to draw
    #[arg(value_enum, default_value = "swatches")]
    mode: Mode,

    /// Built-in scheme to draw (undefined, hammertime)
    #[arg(short, long, default_value = "undefined", conflicts_with = "seeds")]
    scheme: String,

    /// Read the seeds from a CSV table with name,l,u,v columns instead
    #[arg(long)]
    seeds: Option<PathBuf>,

    /// Palette to compare in (dark, light)
    #[arg(long, default_value = "dark")]
    variant: Variant,

    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Draw even when stdout isn't a terminal
    #[arg(long)]
    force: bool,
}

fn setup_logging(verbose: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}

fn load_scheme(args: &Args) -> luvtone::error::Result<Scheme> {
    match &args.seeds {
        Some(path) => config::from_path(path),
        None => schemes::by_name(&args.scheme),
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    if !args.force && !termion::is_tty(&io::stdout()) {
        debug!("stdout is not a terminal, nothing to draw");
        return Ok(());
    }
    let scheme = load_scheme(args)?;
    let output = match args.mode {
        Mode::Swatches => render::swatch_rows(&scheme)?,
        Mode::Compare => render::compare_matrix(scheme.palette(args.variant)?),
    };
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    handle.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = setup_logging(args.verbose) {
        eprintln!("could not set up logging: {}", e);
    }
    if let Err(e) = run(&args) {
        eprintln!("luvtone: {}", e);
        process::exit(1);
    }
}
