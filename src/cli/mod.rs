pub mod parser;
pub mod reader;

pub use parser::ParsedConfig;

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::{ArgEnum, Parser};
use parser::parse_config;
use reader::read_config;

use crate::config::{ExecutionMode, Scheme};

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Clone every repository listed in a file into one directory.
#[derive(Parser, Debug)]
#[clap(name = "bulkclone", version)]
pub struct Args {
    /// File with one repository URL per line, `-` for stdin
    #[clap(short, long, parse(from_os_str))]
    input: Option<std::path::PathBuf>,

    /// Directory the repositories are cloned into
    #[clap(short, long, parse(from_os_str))]
    destination: Option<std::path::PathBuf>,

    /// YAML file with defaults for these flags
    #[clap(short, long, parse(from_os_str))]
    config: Option<std::path::PathBuf>,

    /// Transport every known-host URL is rewritten to
    #[clap(long, arg_enum)]
    scheme: Option<Scheme>,

    /// Run clones one by one or all at once
    #[clap(long, arg_enum, conflicts_with = "parallel")]
    mode: Option<ExecutionMode>,

    /// Shorthand for `--mode concurrent`
    #[clap(short, long)]
    parallel: bool,

    /// Go through the whole run without cloning anything
    #[clap(long)]
    dry_run: bool,

    /// Host whose URLs are normalized
    #[clap(long)]
    host: Option<String>,

    /// Create shallow clones with this many commits
    #[clap(long)]
    depth: Option<u32>,

    #[clap(long, arg_enum, default_value = "text")]
    output: OutputFormat,

    /// Never draw the progress spinner
    #[clap(long)]
    no_progress: bool,
}

pub fn run() -> Result<ParsedConfig> {
    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("could not read file `{:?}`", path))?;
            read_config(&content).with_context(|| format!("could not parse config `{:?}`", path))?
        }
        None => reader::Config::default(),
    };

    let parsed = parse_config(&args, file_config, std::io::stderr().is_terminal())?;

    Ok(parsed)
}
