use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Cancelable trailing-edge timer
///
/// Each call to [`Debouncer::trigger`] aborts the pending action, if any, and
/// schedules the new one to run after `delay` of silence. Only the last action
/// of a burst ever runs. Dropping the debouncer aborts whatever is pending.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `action` to run once the quiet window elapses
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        // Spawned under the lock so the stored handle is always the newest trigger.
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Aborts the pending action without scheduling a new one
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.take() {
            previous.abort();
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
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_trigger_runs() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let fired = Arc::new(Mutex::new(Vec::new()));

        for value in ["b", "ba", "bat"] {
            let fired = fired.clone();
            debouncer.trigger(async move {
                fired.lock().unwrap().push(value);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(*fired.lock().unwrap(), vec!["bat"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_waits_for_quiet_window() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let count = Arc::new(AtomicUsize::new(0));

        let c = count.clone();
        debouncer.trigger(async move {
            c.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending() {
        let count = Arc::new(AtomicUsize::new(0));
        {
            let debouncer = Debouncer::new(Duration::from_millis(300));
            let c = count.clone();
            debouncer.trigger(async move {
                c.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_triggers_leave_one_pending_action() {
        let debouncer = Arc::new(Debouncer::new(Duration::from_millis(50)));
        let count = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let debouncer = debouncer.clone();
                let count = count.clone();
                tokio::spawn(async move {
                    debouncer.trigger(async move {
                        count.fetch_add(1, Ordering::SeqCst);
                    });
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
