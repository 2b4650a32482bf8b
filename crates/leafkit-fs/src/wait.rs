//! Async polling for file state.
//!
//! Both waits poll on a tokio timer and give up at a deadline. They return
//! `bool` rather than `Result`: callers only care whether the condition was
//! reached in time. Dropping the future cancels the wait.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use leafkit_fs::wait::wait_for_file_exists;
//!
//! # async fn run() {
//! if wait_for_file_exists("/tmp/ready.flag", Duration::from_secs(5)).await {
//!     println!("ready");
//! }
//! # }
//! ```

use std::io;
use std::path::Path;
use std::time::Duration;

use leafkit_core::first_non_zero;
use tokio::process::Command;
use tokio::time::{Instant, MissedTickBehavior};

use crate::DEFAULT_POLL_INTERVAL;

/// Polling settings for the waits in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Time between checks. Zero means [`DEFAULT_POLL_INTERVAL`].
    pub interval: Duration,
}

impl PollConfig {
    /// Create a config polling every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// The interval actually used.
    pub fn interval(&self) -> Duration {
        first_non_zero([self.interval, DEFAULT_POLL_INTERVAL])
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

/// Wait until something exists at `path`.
///
/// Returns `true` as soon as it does, `false` when `timeout` passes first or
/// when checking fails for a reason other than "not found". The path is
/// checked once before the deadline is considered, so a zero timeout still
/// reports a path that is already there.
pub async fn wait_for_file_exists(path: impl AsRef<Path>, timeout: Duration) -> bool {
    wait_for_file_exists_with(path, timeout, PollConfig::default()).await
}

/// [`wait_for_file_exists`] with an explicit [`PollConfig`].
pub async fn wait_for_file_exists_with(
    path: impl AsRef<Path>,
    timeout: Duration,
    config: PollConfig,
) -> bool {
    let path = path.as_ref();
    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);

    if let Some(found) = check_exists(path).await {
        return found;
    }

    let period = config.interval();
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = &mut deadline => {
                log::debug!("{} did not appear within {timeout:?}", path.display());
                return false;
            }
            _ = ticker.tick() => {
                if let Some(found) = check_exists(path).await {
                    return found;
                }
            }
        }
    }
}

/// `Some(true)` if `path` exists, `Some(false)` on a stat failure other than
/// not-found, `None` to keep polling.
async fn check_exists(path: &Path) -> Option<bool> {
    match tokio::fs::metadata(path).await {
        Ok(_) => Some(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Stopped waiting for {}: {e}", path.display());
            Some(false)
        }
    }
}

/// Wait until no process holds `path` open, as reported by `lsof`.
///
/// With `local`, `lsof` is asked about `path` directly. Otherwise the full
/// `lsof` listing is searched for lines mentioning `path`, which also sees
/// handles `lsof <path>` can miss (for example on network filesystems).
///
/// A failing or missing `lsof` counts as "no handlers". Returns `false` if
/// handlers are still open when `timeout` passes.
pub async fn wait_for_no_file_handlers(
    path: impl AsRef<Path>,
    timeout: Duration,
    local: bool,
) -> bool {
    wait_for_no_file_handlers_with(path, timeout, local, PollConfig::default()).await
}

/// [`wait_for_no_file_handlers`] with an explicit [`PollConfig`].
pub async fn wait_for_no_file_handlers_with(
    path: impl AsRef<Path>,
    timeout: Duration,
    local: bool,
    config: PollConfig,
) -> bool {
    let path = path.as_ref();
    let deadline = Instant::now() + timeout;

    while Instant::now() < deadline {
        if !has_open_handlers(path, local).await {
            return true;
        }
        tokio::time::sleep(config.interval()).await;
    }

    log::debug!("{} still open after {timeout:?}", path.display());
    false
}

async fn has_open_handlers(path: &Path, local: bool) -> bool {
    let mut command = Command::new("lsof");
    if local {
        command.arg(path);
    }

    let output = match command.output().await {
        Ok(output) => output,
        Err(e) => {
            log::debug!("lsof unavailable: {e}");
            return false;
        }
    };
    if !output.status.success() {
        return false;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if local {
        !stdout.trim().is_empty()
    } else {
        let needle = path.to_string_lossy();
        stdout.lines().any(|line| line.contains(needle.as_ref()))
    }
}
