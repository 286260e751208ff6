use std::path::PathBuf;

use serde::Deserialize;

use crate::config::{ExecutionMode, Scheme};

/// Optional YAML file supplying defaults for the command-line flags.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Config {
    pub destination: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub scheme: Option<Scheme>,
    pub mode: Option<ExecutionMode>,
    pub host: Option<String>,
    pub dry_run: Option<bool>,
    pub depth: Option<u32>,
}

pub fn read_config(config: &str) -> Result<Config, serde_yaml::Error> {
    serde_yaml::from_str(config)
}
