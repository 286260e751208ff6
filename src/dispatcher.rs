use std::io;
use std::sync::Arc;

use futures::future::join_all;
use log::{debug, error, warn};
use tokio::task::{JoinError, JoinHandle};

use crate::{
    aggregator::{AggregatedResults, Aggregator},
    config::{ExecutionMode, RunConfiguration},
    error::ConfigurationError,
    executor::CloneExecutor,
    job::{CloneJob, Outcome},
    normalizer::Normalizer,
    spinner,
};

pub struct Dispatcher {
    config: RunConfiguration,
    normalizer: Normalizer,
    executor: Arc<dyn CloneExecutor>,
    progress: bool,
}

impl Dispatcher {
    pub fn new(
        config: RunConfiguration,
        executor: Arc<dyn CloneExecutor>,
    ) -> Result<Self, ConfigurationError> {
        let normalizer = Normalizer::new(config.scheme, &config.host).map_err(|source| {
            ConfigurationError::InvalidHost {
                host: config.host.clone(),
                source,
            }
        })?;

        Ok(Dispatcher {
            config,
            normalizer,
            executor,
            progress: false,
        })
    }

    /// Draw the spinner on stderr while concurrent jobs run.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Clones every reference and returns once all of them have an outcome.
    pub async fn run<I>(&self, references: I) -> AggregatedResults
    where
        I: IntoIterator<Item = String>,
    {
        let aggregator = Aggregator::new();

        match self.config.mode {
            ExecutionMode::Sequential => self.run_sequential(references, &aggregator).await,
            ExecutionMode::Concurrent => self.run_concurrent(references, &aggregator).await,
        }

        aggregator.finish()
    }

    async fn run_sequential<I>(&self, references: I, aggregator: &Aggregator)
    where
        I: IntoIterator<Item = String>,
    {
        for reference in references {
            match self.build_job(&reference) {
                Some(job) => {
                    let handle = self.spawn_job(job, aggregator);
                    settle(reference, handle.await, aggregator);
                }
                None => aggregator.record(Outcome::Failure(reference)),
            }
        }
    }

    async fn run_concurrent<I>(&self, references: I, aggregator: &Aggregator)
    where
        I: IntoIterator<Item = String>,
    {
        let mut launched = Vec::new();
        let mut handles = Vec::new();

        for reference in references {
            match self.build_job(&reference) {
                Some(job) => {
                    handles.push(self.spawn_job(job, aggregator));
                    launched.push(reference);
                }
                None => aggregator.record(Outcome::Failure(reference)),
            }
        }

        if self.progress {
            let mut stderr = io::stderr();
            let watched = spinner::watch(&handles, spinner::POLL_INTERVAL, &mut stderr).await;
            if let Err(err) = watched {
                debug!("progress indicator stopped: {}", err);
            }
        }

        for (reference, joined) in launched.into_iter().zip(join_all(handles).await) {
            settle(reference, joined, aggregator);
        }
    }

    /// Runs one job on its own task. The task records the outcome itself; a
    /// panic surfaces as a `JoinError` for `settle`.
    fn spawn_job(&self, job: CloneJob, aggregator: &Aggregator) -> JoinHandle<()> {
        let aggregator = aggregator.clone();
        let executor = Arc::clone(&self.executor);
        let dry_run = self.config.dry_run;

        tokio::spawn(async move {
            let outcome = execute(job, dry_run, executor.as_ref()).await;
            aggregator.record(outcome);
        })
    }

    fn build_job(&self, reference: &str) -> Option<CloneJob> {
        match CloneJob::new(reference, &self.normalizer, &self.config.destination) {
            Ok(job) => Some(job),
            Err(err) => {
                warn!("{}", err);
                None
            }
        }
    }
}

fn settle(reference: String, joined: Result<(), JoinError>, aggregator: &Aggregator) {
    if let Err(err) = joined {
        error!("clone task for `{}` did not complete: {}", reference, err);
        aggregator.record(Outcome::Failure(reference));
    }
}

async fn execute(job: CloneJob, dry_run: bool, executor: &dyn CloneExecutor) -> Outcome {
    if dry_run {
        debug!("dry run: would clone {} into {:?}", job.url, job.target);
        return job.succeeded();
    }

    debug!("cloning {} into {:?}", job.url, job.target);
    let result = executor.clone_repository(&job.url, &job.target).await;
    match result {
        Ok(()) => job.succeeded(),
        Err(err) => {
            warn!("{}", err);
            job.failed()
        }
    }
}
