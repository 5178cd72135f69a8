/*!
 * Request pacing for rate-limited providers.
 *
 * The orchestration loop never sleeps on its own; it awaits a pacer before
 * each external call. Keeping the throttling strategy behind this gate leaves
 * the ordering logic independent of how requests are spaced, so a different
 * strategy (or bounded parallelism) does not touch the chunk-to-unit
 * contract.
 */

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// A gate that spaces successive calls by a fixed interval.
///
/// The first caller passes immediately; each subsequent caller waits until
/// the interval has elapsed since the previous caller was admitted. Safe to
/// share across concurrent in-flight requests: the internal lock is held
/// while waiting, so admissions stay spaced even under contention.
#[derive(Debug)]
pub struct FixedIntervalPacer {
    /// Minimum spacing between admitted calls
    interval: Duration,

    /// When the previous call was admitted
    last_admitted: Mutex<Option<Instant>>,
}

impl FixedIntervalPacer {
    /// Create a pacer with the given interval
    pub fn new(interval: Duration) -> Self {
        FixedIntervalPacer {
            interval,
            last_admitted: Mutex::new(None),
        }
    }

    /// Create a pacer from a millisecond delay, zero disabling pacing
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// Wait until this caller may issue its request
    pub async fn wait_turn(&self) {
        if self.interval.is_zero() {
            return;
        }

        let mut last = self.last_admitted.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}
