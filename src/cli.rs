use clap::Parser;
use std::path::PathBuf;

use lsdir::{DEFAULT_IGNORE_FILE, TreeOptions};

#[derive(Parser, Debug)]
#[command(name = "lsdir", version)]
#[command(about = "Display a directory structure in tree format", long_about = None)]
pub struct Cli {
    /// Path to the directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// File of substrings; any path containing one is left out
    #[arg(long, value_name = "PATH", default_value = DEFAULT_IGNORE_FILE)]
    pub ignore_file: PathBuf,

    /// Show every entry, ignoring the ignore file
    #[arg(long)]
    pub show_all: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Cli> for TreeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.path,
            ignore_file: cli.ignore_file,
            show_all: cli.show_all,
        }
    }
}
