use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "typeahead",
    about = "Weighted prefix autocomplete over a term file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single prefix query against a term file
    Query {
        /// Term file: "<weight> <text>" lines, or JSON with --json
        #[arg(short, long)]
        file: PathBuf,

        /// Parse the term file as a JSON array of {"text", "weight"}
        #[arg(long)]
        json: bool,

        /// Print at most this many matches
        #[arg(short, long)]
        limit: Option<usize>,

        /// The prefix to complete
        prefix: String,
    },

    /// Read prefixes from stdin, one per line, and print matches for each
    Repl {
        /// Term file: "<weight> <text>" lines, or JSON with --json
        #[arg(short, long)]
        file: PathBuf,

        /// Parse the term file as a JSON array of {"text", "weight"}
        #[arg(long)]
        json: bool,

        /// Print at most this many matches per prefix
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}
