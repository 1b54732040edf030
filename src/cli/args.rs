//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{BorderColor, Format};
use crate::color::Color;

/// Render letter grids and word-guessing boards as images
#[derive(Parser, Debug)]
#[command(name = "letters-in-squares")]
#[command(version, about = "Render letters in squares as PNG or WebP images", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a word-guessing board image
    #[command(after_help = "EXAMPLES:
    letters-in-squares wordle -w crane -g slate -g crane
    letters-in-squares wordle -w crane -g slate trace crane -f webp -o board.webp")]
    Wordle(WordleArgs),

    /// Render an arbitrary grid of letters (a space is an empty square)
    #[command(after_help = "EXAMPLES:
    letters-in-squares grid -r HELLO -r 'WO LD'
    letters-in-squares grid --file board.txt --border-color none")]
    Grid(GridArgs),

    /// Print the classification of each guess as JSON, one line per guess
    Score(ScoreArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug)]
pub struct WordleArgs {
    /// Secret word
    #[arg(short, long)]
    pub word: String,

    /// Guess, one board row each
    #[arg(short = 'g', long = "guess", required = true, num_args = 1..)]
    pub guesses: Vec<String>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

#[derive(clap::Args, Debug)]
pub struct GridArgs {
    /// Grid row, one per flag
    #[arg(short = 'r', long = "row", num_args = 1.., required_unless_present = "file")]
    pub rows: Vec<String>,

    /// Read rows from a text file, one per line
    #[arg(long, conflicts_with = "rows")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    /// Secret word
    #[arg(short, long)]
    pub word: String,

    /// Guess to classify
    #[arg(short = 'g', long = "guess", required = true, num_args = 1..)]
    pub guesses: Vec<String>,
}

/// Layout and output flags shared by the rendering commands.
///
/// Unset flags fall back to the config file, then the command default.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Square size in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Gap between squares in pixels
    #[arg(long)]
    pub gap: Option<u32>,

    /// Image padding in pixels
    #[arg(long)]
    pub padding: Option<u32>,

    /// Output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Square fill color
    #[arg(long)]
    pub square_color: Option<Color>,

    /// Letter color
    #[arg(long)]
    pub text_color: Option<Color>,

    /// Border color, or "none"
    #[arg(long)]
    pub border_color: Option<BorderColor>,

    /// Border width in pixels
    #[arg(long)]
    pub border_width: Option<u32>,

    /// Canvas background color
    #[arg(long)]
    pub background: Option<Color>,

    /// Font file for letters
    #[arg(long)]
    pub font: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show config file location and values
    Show,
    /// Create default config file
    Init,
}
