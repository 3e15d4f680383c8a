use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;

use typeahead::{load_terms, Autocomplete, LoadError};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query {
            file,
            json,
            limit,
            prefix,
        } => run_query(&file, json, limit, &prefix),
        Commands::Repl { file, json, limit } => run_repl(&file, json, limit),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn build(file: &Path, json: bool) -> Result<Autocomplete, LoadError> {
    let terms = load_terms(file, json)?;
    Ok(Autocomplete::new(terms))
}

fn print_matches(ac: &Autocomplete, prefix: &str, limit: Option<usize>) {
    let matches = ac.all_matches(prefix);
    let shown = limit.unwrap_or(matches.len()).min(matches.len());
    for term in &matches[..shown] {
        println!("{}", term);
    }
}

fn run_query(
    file: &Path,
    json: bool,
    limit: Option<usize>,
    prefix: &str,
) -> Result<(), LoadError> {
    let ac = build(file, json)?;
    print_matches(&ac, prefix, limit);
    Ok(())
}

fn run_repl(file: &Path, json: bool, limit: usize) -> Result<(), LoadError> {
    let ac = build(file, json)?;
    // Only prompt when a human is typing, so piped input stays clean.
    let interactive = atty::is(atty::Stream::Stdin);

    let stdin = io::stdin();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let prefix = line.trim_end_matches(&['\r', '\n'][..]);
        print_matches(&ac, prefix, Some(limit));
    }
    Ok(())
}
