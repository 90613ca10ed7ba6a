use time::ext::NumericalStdDuration as _;
use tokio::time::Instant;

use super::*;

/// Fixed-interval poller: check once immediately, then once per interval
/// until the check yields a value, fails, or the timeout elapses.
///
/// There is no backoff and no jitter.
#[derive(Clone, Copy, Debug)]
pub struct Poller {
    interval: Duration,
    timeout: Duration,
}

impl Poller {
    pub fn new() -> Self {
        Self {
            interval: 1.std_seconds(),
            timeout: 60.std_seconds(),
        }
    }

    pub fn with_interval(self, interval: Duration) -> Self {
        Self { interval, ..self }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Runs `check` until it settles.
    ///
    /// `Ok(Some(value))` finishes with `value`, `Ok(None)` means "not yet" and
    /// `Err` is terminal. A final check runs at the deadline; after that the
    /// result is [`Error::Timeout`].
    ///
    /// A timeout too large to be added to the current instant means there is
    /// no deadline at all.
    pub async fn poll_immediate<T, F, Fut>(&self, mut check: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
    {
        let deadline = Instant::now().checked_add(self.timeout);
        loop {
            if let Some(value) = check().await? {
                return Ok(value);
            }

            let pause = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return Err(Error::Timeout {
                            timeout: self.timeout,
                        });
                    }
                    self.interval.min(deadline - now)
                }
                None => self.interval,
            };
            tokio::time::sleep(pause).await;
        }
    }
}

impl Default for Poller {
    fn default() -> Self {
        Self::new()
    }
}
