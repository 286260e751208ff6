use std::io::{self, Write};
use std::time::Duration;

use tokio::task::JoinHandle;

pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Redraws a rotating indicator on `out` until every handle has finished.
///
/// Only liveness is observed; the tasks' results are left for the caller to
/// join.
pub async fn watch<T, W: Write>(
    handles: &[JoinHandle<T>],
    interval: Duration,
    out: &mut W,
) -> io::Result<()> {
    let total = handles.len();
    let mut frame = 0;

    loop {
        let running = handles.iter().filter(|handle| !handle.is_finished()).count();
        if running == 0 {
            break;
        }

        write!(
            out,
            "\r{} waiting for {} of {} clones",
            FRAMES[frame % FRAMES.len()],
            running,
            total
        )?;
        out.flush()?;

        frame += 1;
        tokio::time::sleep(interval).await;
    }

    if frame > 0 {
        write!(out, "\r\x1b[2K")?;
        out.flush()?;
    }

    Ok(())
}
