use std::path::PathBuf;

use thiserror::Error;

/// Per-job failures. These never escape a job: the dispatcher turns each one
/// into a `Failure` outcome.
#[derive(Error, Debug)]
pub enum CloneError {
    #[error("malformed repository reference `{0}`")]
    MalformedReference(String),

    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("clone of `{url}` into `{target:?}` failed: {reason}")]
    CloneFailure {
        url: String,
        target: PathBuf,
        reason: String,
    },
}

/// Errors that stop the run before any job is dispatched.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("no input file given, pass --input or set `input` in the config file")]
    MissingInput,

    #[error("invalid host `{host}`: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: regex::Error,
    },
}
