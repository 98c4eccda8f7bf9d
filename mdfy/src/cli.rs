use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for mdfy
#[derive(Parser, Debug)]
#[command(author, version, about = "mdfy: compose Markdown from typed building blocks")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times) Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(
    short = 'c',
    long = "config-file",
    global = true,
    action = clap::ArgAction::Append
  )]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", global = true, action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the mdfy CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new mdfy configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "mdfy.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Apply inline style markers and print the result, one line per argument.
  Style {
    /// Text containing `[content:style]` markers.
    #[arg(required = true)]
    text: Vec<String>,
  },

  /// Render a JSON object or array of objects as a Markdown table.
  Table {
    /// JSON file to read, or `-` for standard input.
    input: PathBuf,

    /// Swap header and row labels.
    #[arg(short, long)]
    transpose: bool,

    /// Number of decimal places for floats.
    #[arg(short, long)]
    precision: Option<usize>,

    /// Custom header label (can be specified multiple times)
    #[arg(short = 'H', long = "header", action = clap::ArgAction::Append)]
    header: Vec<String>,

    /// Row label (can be specified multiple times)
    #[arg(short = 'r', long = "row-label", action = clap::ArgAction::Append)]
    row_labels: Vec<String>,

    /// Write the table to this file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Render a JSON document description into Markdown.
  Render {
    /// JSON document to read, or `-` for standard input.
    input: PathBuf,

    /// Write the document to this file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
