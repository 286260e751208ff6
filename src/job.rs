use std::path::{Path, PathBuf};

use crate::{error::CloneError, normalizer::Normalizer};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `<owner>-<repository>`
    Success(String),
    /// The reference exactly as it appeared in the input.
    Failure(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CloneJob {
    pub reference: String,
    pub url: String,
    pub owner: String,
    pub repository: String,
    pub target: PathBuf,
}

impl CloneJob {
    pub fn new(
        reference: &str,
        normalizer: &Normalizer,
        destination: &Path,
    ) -> Result<Self, CloneError> {
        let normalized = normalizer.normalize(reference)?;
        let target = destination.join(format!(
            "{owner}-{repository}",
            owner = normalized.owner,
            repository = normalized.repository
        ));

        Ok(CloneJob {
            reference: reference.to_string(),
            url: normalized.url,
            owner: normalized.owner,
            repository: normalized.repository,
            target,
        })
    }

    pub fn label(&self) -> String {
        format!(
            "{owner}-{repository}",
            owner = self.owner,
            repository = self.repository
        )
    }

    pub fn succeeded(self) -> Outcome {
        Outcome::Success(self.label())
    }

    pub fn failed(self) -> Outcome {
        Outcome::Failure(self.reference)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{CloneJob, Outcome};
    use crate::{config::Scheme, normalizer::Normalizer};

    #[test]
    fn target_and_label() {
        let normalizer = Normalizer::new(Scheme::Ssh, "github.com").unwrap();
        let job = CloneJob::new(
            "https://github.com/octocat/hello-world.git",
            &normalizer,
            Path::new("/srv/mirrors"),
        )
        .unwrap();

        assert_eq!(job.url, "git@github.com:octocat/hello-world.git");
        assert_eq!(job.target, PathBuf::from("/srv/mirrors/octocat-hello-world"));
        assert_eq!(job.label(), "octocat-hello-world");
    }

    #[test]
    fn failure_keeps_original_reference() {
        let normalizer = Normalizer::new(Scheme::Ssh, "github.com").unwrap();
        let reference = "https://github.com/octocat/hello-world";
        let job = CloneJob::new(reference, &normalizer, Path::new(".")).unwrap();

        assert_eq!(job.failed(), Outcome::Failure(reference.to_string()));
    }
}
