//! Cancellable periodic ticking

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A periodic task running on a background thread.
///
/// The callback fires once per interval until `stop` is called or the
/// ticker is dropped. `stop` joins the thread, so no tick can fire after
/// it returns.
pub struct Ticker {
    shutdown: Sender<()>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a ticker invoking `on_tick` every `interval`
    pub fn spawn<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (shutdown, signal) = mpsc::channel::<()>();
        let handle = thread::spawn(move || loop {
            match signal.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => on_tick(),
                // Shutdown message or sender dropped
                _ => break,
            }
        });

        Self { shutdown, handle }
    }

    /// Cancel the ticker deterministically.
    ///
    /// Blocks until the background thread has exited; a tick already in
    /// flight completes first, and none fires afterwards.
    pub fn stop(self) {
        let _ = self.shutdown.send(());
        let _ = self.handle.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_ticks_fire_periodically() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let ticker = Ticker::spawn(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        thread::sleep(Duration::from_millis(100));
        ticker.stop();

        assert!(count.load(Ordering::SeqCst) >= 2);
    }

    #[test]
    fn test_no_tick_after_stop_returns() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let ticker = Ticker::spawn(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        thread::sleep(Duration::from_millis(50));
        ticker.stop();
        let after_stop = count.load(Ordering::SeqCst);

        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn test_drop_cancels_ticker() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        {
            let _ticker = Ticker::spawn(Duration::from_millis(10), move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        // The sender is gone; the thread exits on its next wakeup.
        thread::sleep(Duration::from_millis(40));
        let settled = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(40));
        assert_eq!(count.load(Ordering::SeqCst), settled);
    }
}
