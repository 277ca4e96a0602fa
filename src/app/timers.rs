//! Cancellable background tasks that report back through the app channel.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::AppMessage;

/// A spawned task that is aborted when the handle is dropped.
///
/// Owning the handle ties the task to its owner's lifetime: a lesson's
/// timers die with the lesson, the recovery timer dies with the app.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Spawn `future` on the current runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Send `message` once after `delay`.
    pub fn after(delay: Duration, tx: UnboundedSender<AppMessage>, message: AppMessage) -> Self {
        Self::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(message);
        })
    }

    /// Send a message built by `make` every `period`, first after one full period.
    pub fn every(
        period: Duration,
        tx: UnboundedSender<AppMessage>,
        make: fn() -> AppMessage,
    ) -> Self {
        Self::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(make()).is_err() {
                    break;
                }
            }
        })
    }

}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_after_fires_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _task = ScheduledTask::after(
            Duration::from_millis(1500),
            tx,
            AppMessage::HeartRecoveryTick,
        );

        tokio::time::sleep(Duration::from_millis(1400)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(matches!(rx.try_recv(), Ok(AppMessage::HeartRecoveryTick)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let task =
            ScheduledTask::after(Duration::from_millis(10), tx, AppMessage::HeartRecoveryTick);
        drop(task);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_ticks_after_each_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _task = ScheduledTask::every(Duration::from_secs(300), tx, || {
            AppMessage::HeartRecoveryTick
        });

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_secs(600)).await;
        let mut ticks = 0;
        while rx.try_recv().is_ok() {
            ticks += 1;
        }
        assert_eq!(ticks, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_stops_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let task = ScheduledTask::every(Duration::from_secs(1), tx, || {
            AppMessage::HeartRecoveryTick
        });
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(rx.try_recv().is_ok());

        drop(task);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
