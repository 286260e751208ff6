use std::path::PathBuf;

use clap::ArgEnum;
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "github.com";

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Ssh,
    Https,
}

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Sequential,
    Concurrent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl From<PathBuf> for InputSource {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(path)
        }
    }
}

/// Everything a run needs, fixed before the first job is dispatched.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfiguration {
    pub destination: PathBuf,
    pub input: InputSource,
    pub mode: ExecutionMode,
    pub scheme: Scheme,
    pub host: String,
    pub dry_run: bool,
    pub depth: Option<u32>,
}
