use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::CloneError;

#[async_trait]
pub trait CloneExecutor: Send + Sync {
    async fn clone_repository(&self, url: &str, target: &Path) -> Result<(), CloneError>;
}

/// Runs `git clone` as a child process.
#[derive(Clone, Debug)]
pub struct GitExecutor {
    program: String,
    depth: Option<u32>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        GitExecutor {
            program: "git".to_string(),
            depth: None,
        }
    }
}

impl GitExecutor {
    pub fn new() -> Self {
        GitExecutor::default()
    }

    pub fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    pub fn with_depth(mut self, depth: Option<u32>) -> Self {
        self.depth = depth;
        self
    }

    fn command(&self, url: &str, target: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("clone").arg("--quiet");
        if let Some(depth) = self.depth {
            command.arg("--depth").arg(depth.to_string());
        }
        command
            .arg(url)
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        command
    }
}

#[async_trait]
impl CloneExecutor for GitExecutor {
    async fn clone_repository(&self, url: &str, target: &Path) -> Result<(), CloneError> {
        let output = self
            .command(url, target)
            .output()
            .await
            .map_err(|source| CloneError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match stderr.trim() {
            "" => output.status.to_string(),
            message => format!("{}: {}", output.status, message),
        };

        Err(CloneError::CloneFailure {
            url: url.to_string(),
            target: target.to_path_buf(),
            reason,
        })
    }
}
