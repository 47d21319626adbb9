//! Async delay helper.

use std::time::Duration;

/// Waits for `ms` milliseconds.
pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_advances_clock() {
        let start = Instant::now();
        sleep(250).await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_zero_returns() {
        sleep(0).await;
    }
}
