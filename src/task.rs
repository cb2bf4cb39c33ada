use std::time::Duration;

use crate::error::{Error, Result};

/// Waits `delay` on the tokio timer, then hands back `value`.
pub async fn delayed<T>(value: T, delay: Duration) -> T {
    tokio::time::sleep(delay).await;
    value
}

/// Drives [`delayed`] to completion on a fresh current-thread runtime.
///
/// Must not be called from inside another tokio runtime.
pub fn run_delayed<T>(value: T, delay: Duration) -> Result<T> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(Error::Runtime)?;

    log::debug!("running delayed task ({delay:?})");
    Ok(runtime.block_on(delayed(value, delay)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_delayed_returns_value_after_delay() {
        let start = Instant::now();
        let result = delayed("task 1 completed", Duration::from_millis(20)).await;

        assert_eq!(result, "task 1 completed");
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_delayed_tasks_run_concurrently() {
        let start = Instant::now();
        let (a, b) = tokio::join!(
            delayed(1, Duration::from_millis(50)),
            delayed(2, Duration::from_millis(50)),
        );

        assert_eq!((a, b), (1, 2));
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_run_delayed_blocks_until_done() {
        let value = run_delayed(String::from("done"), Duration::from_millis(5)).unwrap();
        assert_eq!(value, "done");
    }

    #[test]
    fn test_run_delayed_zero_delay() {
        assert_eq!(run_delayed(7, Duration::ZERO).unwrap(), 7);
    }
}
