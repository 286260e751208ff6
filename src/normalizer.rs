use regex::Regex;

use crate::{config::Scheme, error::CloneError};

const REPOSITORY_SUFFIX: &str = ".git";

#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedUrl {
    pub url: String,
    pub owner: String,
    pub repository: String,
}

/// Rewrites references to the known host into a single transport scheme.
///
/// Two forms are recognised, `https://<host>/<owner>/<repo>` and
/// `git@<host>:<owner>/<repo>`. Anything else (another host, a custom scheme,
/// a bare word) is passed through untouched and only has its owner and
/// repository extracted.
#[derive(Clone, Debug)]
pub struct Normalizer {
    scheme: Scheme,
    host: String,
    https: Regex,
    ssh: Regex,
}

impl Normalizer {
    pub fn new(scheme: Scheme, host: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(host);
        let https = Regex::new(&format!(r"^https://{host}/(.+)$", host = escaped))?;
        let ssh = Regex::new(&format!(r"^git@{host}:(.+)$", host = escaped))?;

        Ok(Normalizer {
            scheme,
            host: host.to_string(),
            https,
            ssh,
        })
    }

    pub fn normalize(&self, reference: &str) -> Result<NormalizedUrl, CloneError> {
        let malformed = || CloneError::MalformedReference(reference.to_string());

        match self.remainder(reference) {
            Some(remainder) => {
                let (owner, repository) =
                    split_owner_repository(remainder).ok_or_else(malformed)?;

                Ok(NormalizedUrl {
                    url: self.prefix(remainder),
                    owner,
                    repository,
                })
            }
            None => {
                let (owner, repository) =
                    split_owner_repository(reference).ok_or_else(malformed)?;

                Ok(NormalizedUrl {
                    url: reference.to_string(),
                    owner,
                    repository,
                })
            }
        }
    }

    /// The `owner/repo[.git]` part of a reference to the known host.
    fn remainder<'a>(&self, reference: &'a str) -> Option<&'a str> {
        self.https
            .captures(reference)
            .or_else(|| self.ssh.captures(reference))
            .and_then(|captures| captures.get(1))
            .map(|found| found.as_str())
    }

    fn prefix(&self, remainder: &str) -> String {
        match self.scheme {
            Scheme::Ssh => format!(
                "git@{host}:{remainder}",
                host = self.host,
                remainder = remainder
            ),
            Scheme::Https => format!(
                "https://{host}/{remainder}",
                host = self.host,
                remainder = remainder
            ),
        }
    }
}

/// Owner is the second-to-last path segment, repository the last one without
/// its `.git` suffix. `:` separators count as `/`.
pub fn split_owner_repository(url: &str) -> Option<(String, String)> {
    let collapsed = url.replace(':', "/");
    let segments: Vec<&str> = collapsed.split('/').filter(|s| !s.is_empty()).collect();

    if segments.len() < 2 {
        return None;
    }

    let owner = segments[segments.len() - 2];
    let last = segments[segments.len() - 1];
    let repository = last.strip_suffix(REPOSITORY_SUFFIX).unwrap_or(last);

    if repository.is_empty() {
        return None;
    }

    Some((owner.to_string(), repository.to_string()))
}
