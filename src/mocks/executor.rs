use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::{error::CloneError, executor::CloneExecutor};

/// Records every clone request instead of running git. URLs registered with
/// `failing_on` report a clone failure, those registered with `panicking_on`
/// panic inside the executor.
#[derive(Debug, Default)]
pub struct MockExecutor {
    failing: HashSet<String>,
    panicking: HashSet<String>,
    delay: Duration,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        MockExecutor::default()
    }

    pub fn failing_on(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn panicking_on(mut self, url: &str) -> Self {
        self.panicking.insert(url.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|(url, _)| url).collect()
    }
}

#[async_trait]
impl CloneExecutor for MockExecutor {
    async fn clone_repository(&self, url: &str, target: &Path) -> Result<(), CloneError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((url.to_string(), target.to_path_buf()));

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.panicking.contains(url) {
            panic!("mock executor panicked on `{}`", url);
        }

        if self.failing.contains(url) {
            return Err(CloneError::CloneFailure {
                url: url.to_string(),
                target: target.to_path_buf(),
                reason: "mock failure".to_string(),
            });
        }

        Ok(())
    }
}
