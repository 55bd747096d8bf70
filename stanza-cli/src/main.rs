//! Stanza CLI - Command line interface
//!
//! Loads a configuration file, tokenizes it and dumps the tokens.

use clap::Parser;
use std::path::PathBuf;
use std::process;

mod config;
mod logging;
mod output;
mod platform;

use crate::logging::LogFormat;
use crate::output::OutputFormat;
use crate::platform::print_error_with_source;
use stanza_core::{tokenize, Token, TokenStream};
use tracing::{debug, info};

const TARGET: &str = "stanza::cli";

#[derive(Parser, Debug)]
#[command(
    name = "stanza",
    about = "Tokenize block-directive configuration files",
    version
)]
struct Cli {
    /// Configuration file to tokenize
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the raw scan, comments included
    #[arg(long)]
    raw: bool,

    /// Token output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Global log level: off (or silent), error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Logging settings file (JSON)
    #[arg(long, value_name = "SETTINGS")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let log_config = match config::load_log_config(cli.config.as_deref(), cli.log_level.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_ref()) {
        eprintln!("Error: cannot open log file: {}", e);
        process::exit(1);
    }

    // Read source file
    let source = match std::fs::read(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {}", cli.file.display(), e);
            process::exit(1);
        }
    };
    info!(target: TARGET, file = %cli.file.display(), bytes = source.len(), "Tokenizing");

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            print_error_with_source(&e, &source);
            process::exit(1);
        }
    };

    let tokens: Vec<Token> = if cli.raw {
        tokens
    } else {
        TokenStream::new(tokens).collect()
    };
    debug!(target: TARGET, count = tokens.len(), raw = cli.raw, "Rendering tokens");

    match output::render(&tokens, cli.format) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Error: cannot render tokens: {}", e);
            process::exit(1);
        }
    }
}
