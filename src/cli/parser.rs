use std::path::PathBuf;

use crate::{
    config::{ExecutionMode, InputSource, RunConfiguration, Scheme, DEFAULT_HOST},
    error::ConfigurationError,
};

use super::{reader, Args, OutputFormat};

#[derive(Clone, Debug, PartialEq)]
pub struct ParsedConfig {
    pub run: RunConfiguration,
    pub output: OutputFormat,
    pub progress: bool,
}

/// Merges flags over the optional config file. Flags win.
pub fn parse_config(
    args: &Args,
    file: reader::Config,
    interactive: bool,
) -> Result<ParsedConfig, ConfigurationError> {
    let input = args
        .input
        .clone()
        .or(file.input)
        .ok_or(ConfigurationError::MissingInput)?;

    let mode = args
        .mode
        .or_else(|| args.parallel.then(|| ExecutionMode::Concurrent))
        .or(file.mode)
        .unwrap_or(ExecutionMode::Sequential);

    let run = RunConfiguration {
        destination: args
            .destination
            .clone()
            .or(file.destination)
            .unwrap_or_else(|| PathBuf::from(".")),
        input: InputSource::from(input),
        mode,
        scheme: args.scheme.or(file.scheme).unwrap_or(Scheme::Ssh),
        host: args
            .host
            .clone()
            .or(file.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        dry_run: args.dry_run || file.dry_run.unwrap_or(false),
        depth: args.depth.or(file.depth),
    };

    Ok(ParsedConfig {
        progress: interactive && !args.no_progress && mode == ExecutionMode::Concurrent,
        output: args.output,
        run,
    })
}
