use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::transform::image_scale::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::models::UnsupportedFilePolicy;

#[derive(Parser, Debug)]
#[command(name = "rezip")]
#[command(version)]
#[command(about = "Extract a zip archive, transform every file, and repack it", long_about = None)]
#[command(after_help = "Examples:\n  \
  rezip replace notes.zip Maria Mario -o renamed.zip\n  \
  rezip scale photos.zip --width 640 --height 480\n  \
  rezip replace mixed.zip foo bar --on-unsupported skip --json")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace every occurrence of a string in each text file
    Replace {
        /// Source zip archive
        #[arg(value_name = "ARCHIVE")]
        archive: PathBuf,

        /// String to search for
        #[arg(value_name = "SEARCH")]
        search: String,

        /// Replacement string
        #[arg(value_name = "REPLACE")]
        replace: String,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Resize each image file to fixed dimensions
    Scale {
        /// Source zip archive
        #[arg(value_name = "ARCHIVE")]
        archive: PathBuf,

        /// Target width in pixels
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u32,

        /// Target height in pixels
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u32,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Destination archive (default: <name>_transformed.zip next to the source)
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// What to do with files the transformation cannot handle
    #[arg(long, value_enum, default_value_t = PolicyArg::Fail)]
    pub on_unsupported: PolicyArg,

    /// Print the run report as JSON instead of a human-readable summary
    #[arg(long)]
    pub json: bool,
}

/// CLI mirror of `UnsupportedFilePolicy`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    /// Abort the run on the first unsupported file
    Fail,
    /// Carry unsupported files through unchanged
    Skip,
}

impl From<PolicyArg> for UnsupportedFilePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Fail => UnsupportedFilePolicy::Fail,
            PolicyArg::Skip => UnsupportedFilePolicy::Skip,
        }
    }
}
