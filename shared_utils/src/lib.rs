use std::time::Duration;

use tokio_retry::{strategy::ExponentialBackoff, Retry};
use tracing::{error, warn};

/// Backoff settings for retried asynchronous operations, such as content
/// fetches against the CMS.
#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub max_retries: u32,
}

impl RetryConfig {
    #[must_use]
    pub const fn new(initial_delay: Duration, max_delay: Duration, max_retries: u32) -> Self {
        Self {
            initial_delay,
            max_delay,
            max_retries,
        }
    }

    /// Total number of attempts, counting the initial one.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.max_retries + 1
    }

    fn strategy(&self) -> impl Iterator<Item = Duration> + Clone {
        let initial_millis = u64::try_from(self.initial_delay.as_millis()).unwrap_or(u64::MAX);
        ExponentialBackoff::from_millis(initial_millis.max(1))
            .max_delay(self.max_delay)
            .take(self.max_retries as usize)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(50),
            max_delay: Duration::from_secs(2),
            max_retries: 3,
        }
    }
}

/// Execute an asynchronous operation with exponential backoff.
///
/// `context` identifies the call site in log output. The final error is
/// returned unchanged once the configured retries are exhausted.
pub async fn retry_async<F, Fut, T, E>(
    context: &str,
    config: RetryConfig,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Debug,
{
    let result = Retry::spawn(config.strategy(), || {
        let fut = operation();
        async move {
            match fut.await {
                Ok(value) => Ok(value),
                Err(err) => {
                    warn!(error = ?err, retry_context = context, "Operation failed; retrying");
                    Err(err)
                }
            }
        }
    })
    .await;

    if let Err(err) = &result {
        error!(
            error = ?err,
            retry_context = context,
            "Operation failed after exhausting retries"
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn succeeds_once_transient_failures_clear() {
        tokio_test::block_on(async {
            let attempts = Arc::new(AtomicUsize::new(0));
            let tracker = attempts.clone();

            let result = retry_async("fetch_links", RetryConfig::default(), move || {
                let tracker = tracker.clone();
                async move {
                    if tracker.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err::<_, &'static str>("connection reset")
                    } else {
                        Ok::<_, &'static str>("links")
                    }
                }
            })
            .await;

            assert_eq!(result.unwrap(), "links");
            assert_eq!(attempts.load(Ordering::SeqCst), 3);
        });
    }

    #[test]
    fn surfaces_the_error_after_exhausting_retries() {
        tokio_test::block_on(async {
            let attempts = Arc::new(AtomicUsize::new(0));
            let tracker = attempts.clone();

            let config = RetryConfig::default();
            let result: Result<(), &str> = retry_async("fetch_article", config, move || {
                let tracker = tracker.clone();
                async move {
                    tracker.fetch_add(1, Ordering::SeqCst);
                    Err("service unavailable")
                }
            })
            .await;

            assert_eq!(result.unwrap_err(), "service unavailable");
            assert_eq!(attempts.load(Ordering::SeqCst), config.attempts() as usize);
        });
    }

    #[test]
    fn honors_custom_attempt_counts() {
        tokio_test::block_on(async {
            let config = RetryConfig::new(Duration::from_millis(5), Duration::from_millis(50), 5);
            let attempts = Arc::new(AtomicUsize::new(0));
            let tracker = attempts.clone();

            let _ = retry_async("probe", config, move || {
                let tracker = tracker.clone();
                async move {
                    tracker.fetch_add(1, Ordering::SeqCst);
                    Err::<(), &str>("down")
                }
            })
            .await;

            assert_eq!(attempts.load(Ordering::SeqCst), 6);
        });
    }

    #[test]
    fn attempts_counts_the_initial_call() {
        let config = RetryConfig::new(Duration::from_millis(10), Duration::from_secs(1), 2);
        assert_eq!(config.attempts(), 3);
        assert_eq!(RetryConfig::default().attempts(), 4);
    }
}
