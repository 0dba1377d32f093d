//! Carousel auto-advance timer.
//!
//! At most one timer runs at a time. The runner calls
//! [`AutoplayScheduler::reconcile`] after every update cycle with the key
//! the state asks for; a changed key replaces the running timer.

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::core::{
    msg::{widget::WidgetMsg, Msg},
    state::AutoplayKey,
};

/// A running timer; cancelled when dropped
#[derive(Debug)]
pub struct AutoplayTimer {
    cancellation_token: CancellationToken,
    task: JoinHandle<()>,
}

impl AutoplayTimer {
    /// Send an `AutoplayTick` for `generation` every `period`, the first one
    /// a full period from now.
    pub fn spawn(generation: u64, period: Duration, msg_tx: mpsc::UnboundedSender<Msg>) -> Self {
        let cancellation_token = CancellationToken::new();
        let token = cancellation_token.clone();
        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        let tick = Msg::Widget(WidgetMsg::AutoplayTick { generation });
                        if msg_tx.send(tick).is_err() {
                            break;
                        }
                    }
                }
            }
            log::debug!("Autoplay timer of generation {generation} stopped");
        });
        Self {
            cancellation_token,
            task,
        }
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
    }
}

/// Keeps the running timer in line with the state's [`AutoplayKey`]
#[derive(Debug)]
pub struct AutoplayScheduler {
    period: Duration,
    msg_tx: mpsc::UnboundedSender<Msg>,
    current: Option<AutoplayKey>,
    timer: Option<AutoplayTimer>,
}

impl AutoplayScheduler {
    pub fn new(period: Duration, msg_tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            period,
            msg_tx,
            current: None,
            timer: None,
        }
    }

    pub fn reconcile(&mut self, key: AutoplayKey) {
        if self.current == Some(key) {
            return;
        }
        self.current = Some(key);
        // the previous timer is cancelled before a new one starts
        self.timer = None;
        if key.armed() {
            log::debug!("Arming autoplay timer of generation {}", key.generation);
            self.timer = Some(AutoplayTimer::spawn(
                key.generation,
                self.period,
                self.msg_tx.clone(),
            ));
        }
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn stop(&mut self) {
        self.timer = None;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::widget::WidgetType;

    const PERIOD: Duration = Duration::from_secs(4);

    fn key(autoplay: bool, count: usize, generation: u64) -> AutoplayKey {
        AutoplayKey {
            widget_type: WidgetType::Carousel,
            autoplay,
            count,
            generation,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_ticks_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = AutoplayTimer::spawn(3, PERIOD, tx);

        tokio::time::sleep(PERIOD - Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(
            rx.try_recv().ok(),
            Some(Msg::Widget(WidgetMsg::AutoplayTick { generation: 3 }))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_timer_stops() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = AutoplayTimer::spawn(0, PERIOD, tx);
        drop(timer);

        tokio::time::sleep(PERIOD * 3).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduler_replaces_timer_on_key_change() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = AutoplayScheduler::new(PERIOD, tx);

        scheduler.reconcile(key(true, 3, 0));
        assert!(scheduler.is_armed());
        tokio::time::sleep(PERIOD / 2).await;

        scheduler.reconcile(key(true, 3, 1));
        tokio::time::sleep(PERIOD / 2).await;
        tokio::task::yield_now().await;
        // the first timer would have fired here
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(PERIOD / 2).await;
        tokio::task::yield_now().await;
        assert_eq!(
            rx.try_recv().ok(),
            Some(Msg::Widget(WidgetMsg::AutoplayTick { generation: 1 }))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduler_disarms_when_not_needed() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut scheduler = AutoplayScheduler::new(PERIOD, tx);

        scheduler.reconcile(key(true, 1, 0));
        assert!(!scheduler.is_armed());

        scheduler.reconcile(key(true, 2, 1));
        assert!(scheduler.is_armed());

        scheduler.reconcile(key(false, 2, 2));
        assert!(!scheduler.is_armed());
    }
}
