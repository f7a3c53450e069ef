//! Drumkit CLI - generates percussion sound files
//!
//! This binary renders the built-in percussion instruments (hi-hat, snare,
//! cymbal, tom) and writes each to a mono 16-bit PCM WAV file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use drumkit_synth::{render_instrument, write_sound, Instrument};

/// Drumkit - deterministic percussion sound generator
#[derive(Parser)]
#[command(name = "drumkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory for the generated .wav files
    #[arg(short, long, default_value = "sounds")]
    out_dir: PathBuf,

    /// Seed for reproducible noise (omit for different noise on every run)
    #[arg(long)]
    seed: Option<u32>,

    /// Audio sample rate in Hz
    #[arg(long, default_value_t = 44100)]
    sample_rate: u32,

    /// Instrument to generate: hihat, snare, cymbal, or tom
    /// (repeatable; default: all four)
    #[arg(long = "instrument", value_name = "NAME")]
    instruments: Vec<Instrument>,

    /// Suppress per-file progress output
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Requested instruments, defaulting to the full kit.
    fn selected_instruments(&self) -> Vec<Instrument> {
        if self.instruments.is_empty() {
            Instrument::ALL.to_vec()
        } else {
            self.instruments.clone()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}

/// Runs the generator and returns the number of failed instruments.
///
/// Instruments are independent, so a failure for one is logged and the rest
/// still render.
fn run(cli: &Cli) -> Result<usize> {
    let instruments = cli.selected_instruments();

    std::fs::create_dir_all(&cli.out_dir).with_context(|| {
        format!(
            "failed to create output directory: {}",
            cli.out_dir.display()
        )
    })?;

    let mut failures = 0usize;
    for instrument in instruments {
        match generate_one(cli, instrument) {
            Ok(path) => {
                if !cli.quiet {
                    println!("{} {}", "Wrote".green().bold(), path.display());
                }
            }
            Err(err) => {
                failures += 1;
                eprintln!("{} {}: {err:#}", "error:".red().bold(), instrument);
            }
        }
    }

    if failures > 0 {
        eprintln!(
            "{} {failures} instrument(s) failed",
            "warning:".yellow().bold()
        );
    }

    Ok(failures)
}

/// Renders one instrument and writes its file.
fn generate_one(cli: &Cli, instrument: Instrument) -> Result<PathBuf> {
    let sound = render_instrument(instrument, cli.sample_rate, cli.seed)
        .with_context(|| format!("failed to synthesize {instrument}"))?;

    write_sound(&sound, &cli.out_dir)
        .with_context(|| format!("failed to write {}", instrument.file_name()))
}
