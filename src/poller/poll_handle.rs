//! Repeating poll timer as an owned resource.

use std::{future::Future, time::Duration};

use log::debug;
use tokio::{
    task::{JoinHandle, JoinSet},
    time::{self, Instant, MissedTickBehavior},
};

/// Handle on the background task re-running a fetch at a fixed period.
///
/// The task is aborted when the handle is cancelled or dropped, so a timer
/// never outlives its owner.
pub struct PollHandle {
    handle: JoinHandle<()>,
}

impl PollHandle {
    /// Spawns a task calling `tick` every `period`, first call one period from now.
    ///
    /// Each call runs in its own task, so a call that hangs does not hold
    /// back the next ones.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn spawn<F, Fut>(period: Duration, tick: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            // Dropped with the timer task, which aborts the calls still running
            let mut running = JoinSet::new();

            loop {
                interval.tick().await;
                while running.try_join_next().is_some() {}

                debug!("poll timer fired, {} previous calls running", running.len());
                running.spawn(tick());
            }
        });

        PollHandle { handle }
    }

    /// Stops the timer. Fetches already running are aborted with it.
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    fn counting_handle(counter: &Arc<AtomicUsize>) -> PollHandle {
        let counter = Arc::clone(counter);
        PollHandle::spawn(Duration::from_secs(60), move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_period() {
        let counter = Arc::new(AtomicUsize::new(0));
        let _handle = counting_handle(&counter);

        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        time::sleep(Duration::from_secs(100)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_tick_does_not_delay_next_ticks() {
        let counter = Arc::new(AtomicUsize::new(0));
        let tick_counter = Arc::clone(&counter);
        let _handle = PollHandle::spawn(Duration::from_secs(60), move || {
            let counter = Arc::clone(&tick_counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                std::future::pending::<()>().await;
            }
        });

        time::sleep(Duration::from_secs(301)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_running_tick() {
        let finished = Arc::new(AtomicUsize::new(0));
        let tick_finished = Arc::clone(&finished);
        let handle = PollHandle::spawn(Duration::from_secs(60), move || {
            let finished = Arc::clone(&tick_finished);
            async move {
                time::sleep(Duration::from_secs(30)).await;
                finished.fetch_add(1, Ordering::SeqCst);
            }
        });

        time::sleep(Duration::from_secs(70)).await;
        handle.cancel();
        time::sleep(Duration::from_secs(600)).await;

        assert_eq!(finished.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticking() {
        let counter = Arc::new(AtomicUsize::new(0));
        let handle = counting_handle(&counter);

        time::sleep(Duration::from_secs(61)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        handle.cancel();
        time::sleep(Duration::from_secs(600)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticking() {
        let counter = Arc::new(AtomicUsize::new(0));
        {
            let handle = counting_handle(&counter);
            assert!(handle.is_active());
        }

        time::sleep(Duration::from_secs(600)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
