use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::constants::DEBOUNCE_WINDOW_MS;

/// Trailing-edge debouncer: every call cancels the pending one, so only
/// the last call inside the window executes. Used for range-input typing.
pub struct Debouncer {
    window: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_WINDOW_MS))
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `action` to run after the window, cancelling whatever was
    /// already scheduled.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        let window = self.window;
        *pending = Some(tokio::spawn(async move {
            sleep(window).await;
            action();
        }));
    }

    /// Cancel the pending action without running it.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn only_the_last_call_in_the_window_runs() {
        let ran = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new(Duration::from_millis(30));

        for value in [1usize, 2, 3] {
            let ran = ran.clone();
            debouncer.call(move || {
                ran.store(value, Ordering::SeqCst);
            });
            sleep(Duration::from_millis(5)).await;
        }

        sleep(Duration::from_millis(100)).await;
        assert_eq!(ran.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn cancel_prevents_the_pending_action() {
        let ran = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new(Duration::from_millis(20));

        {
            let ran = ran.clone();
            debouncer.call(move || {
                ran.store(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel();

        sleep(Duration::from_millis(60)).await;
        assert_eq!(ran.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn spaced_calls_each_run() {
        let ran = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new(Duration::from_millis(10));

        for _ in 0..2 {
            let ran = ran.clone();
            debouncer.call(move || {
                ran.fetch_add(1, Ordering::SeqCst);
            });
            sleep(Duration::from_millis(50)).await;
        }

        assert_eq!(ran.load(Ordering::SeqCst), 2);
    }
}
