//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--color`, `--verbose`, `--root`) are inherited
//! by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileArg {
    Client,
    Example,
}

impl From<ProfileArg> for firecat::Profile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Client => firecat::Profile::Client,
            ProfileArg::Example => firecat::Profile::Example,
        }
    }
}

/// firecat - build and input tooling for the game client
#[derive(Parser, Debug)]
#[command(name = "firecat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Production build into the output directory
    Build {
        /// Output directory (relative to the project root)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Public path prefix for emitted URLs
        #[arg(long)]
        base: Option<String>,

        /// Defaults to use for base and target
        #[arg(long, value_enum)]
        profile: Option<ProfileArg>,
    },

    /// Build, then rebuild whenever sources change
    Dev {
        /// Port reported for the dev address
        #[arg(long)]
        port: Option<u16>,

        /// Host reported for the dev address
        #[arg(long)]
        host: Option<String>,
    },

    /// Show what the last build would serve
    Preview {
        /// Output directory of the build (relative to the project root)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        #[arg(long)]
        port: Option<u16>,

        #[arg(long)]
        host: Option<String>,
    },

    /// Check whether the capture filter would swallow a key event
    Keys {
        /// Key name as reported by the browser (`a`, `F5`, `Escape`)
        key: String,

        #[arg(long)]
        ctrl: bool,

        #[arg(long)]
        alt: bool,

        #[arg(long)]
        meta: bool,

        /// Key-up instead of key-down
        #[arg(long)]
        up: bool,
    },
}
