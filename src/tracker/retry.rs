//! Bounded-retry wrapper shared by the fetch and publish steps

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::warn;

/// Retry policy: total attempt budget and fixed delay between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one
    pub max_attempts: u32,
    /// Fixed delay between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    /// 3 attempts total with a fixed 1 second delay between them.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with the given attempt budget and inter-attempt delay.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

/// Run `operation` up to `policy.max_attempts` times with a fixed delay
/// between attempts.
///
/// Returns the first success immediately, or the last error once the attempt
/// budget is exhausted. The inter-attempt sleep suspends only the calling
/// task, so retries for one event never delay another event's job or the
/// registry's control operations.
pub async fn with_retry<T, E, F, Fut>(
    policy: RetryPolicy,
    label: &str,
    mut operation: F,
) -> std::result::Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Display,
{
    // A zero-attempt policy still runs the operation once.
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                warn!(
                    "{} attempt {}/{} failed: {}",
                    label, attempt, max_attempts, err
                );
                sleep(policy.delay).await;
                attempt += 1;
            }
            Err(err) => {
                warn!("{} failed after {} attempts: {}", label, max_attempts, err);
                return Err(err);
            }
        }
    }
}
