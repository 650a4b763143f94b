use clap::Parser;
use clap_verbosity_flag::Verbosity;
use minado_core::Difficulty;
use std::path::PathBuf;

/// Play minesweeper in the terminal.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Board preset: easy (8x8, 10 mines), medium (12x12, 20) or hard (16x16, 40)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for reproducible boards
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// How long a hold must last to count as a long press, in milliseconds
    #[arg(long)]
    pub long_press_ms: Option<u64>,

    /// Settings file in TOML format
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity,
}
