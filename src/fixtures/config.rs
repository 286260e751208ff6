use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::{ExecutionMode, InputSource, RunConfiguration, Scheme, DEFAULT_HOST};

static NEXT_DESTINATION: AtomicUsize = AtomicUsize::new(0);

/// A destination under the temp dir that no other test uses. It is never
/// created here.
pub fn unique_destination() -> PathBuf {
    std::env::temp_dir().join(format!(
        "bulkclone-test-{pid}-{n}",
        pid = std::process::id(),
        n = NEXT_DESTINATION.fetch_add(1, Ordering::SeqCst)
    ))
}

pub fn run_configuration(mode: ExecutionMode, scheme: Scheme, dry_run: bool) -> RunConfiguration {
    RunConfiguration {
        destination: unique_destination(),
        input: InputSource::Stdin,
        mode,
        scheme,
        host: DEFAULT_HOST.to_string(),
        dry_run,
        depth: None,
    }
}
