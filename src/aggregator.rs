use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::job::Outcome;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AggregatedResults {
    #[serde(rename = "successful")]
    pub successes: Vec<String>,
    #[serde(rename = "failed")]
    pub failures: Vec<String>,
}

impl AggregatedResults {
    pub fn push(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success(label) => self.successes.push(label),
            Outcome::Failure(reference) => self.failures.push(reference),
        }
    }

    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Shared sink for job outcomes. Clones hand out the same underlying storage,
/// so every spawned job can hold its own handle.
#[derive(Clone, Debug, Default)]
pub struct Aggregator {
    inner: Arc<Mutex<AggregatedResults>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Aggregator::default()
    }

    pub fn record(&self, outcome: Outcome) {
        // A poisoned lock only means another writer panicked mid-push; the
        // vectors themselves are still consistent.
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(outcome);
    }

    /// Must only be called once every writer has finished.
    pub fn finish(self) -> AggregatedResults {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => shared
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }
}
