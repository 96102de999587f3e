use std::time::Duration;

use flume::Sender;
use tokio::{task::JoinHandle, time::Instant};
use tracing::debug;

use crate::event::events::{Event, ViewId};

/// Fixed-period tick source for one player view.
///
/// The task lives exactly as long as this value; dropping it aborts the
/// task, so no tick is emitted for a view after it is gone.
pub struct ProgressTicker {
    handle: JoinHandle<()>,
}

impl ProgressTicker {
    pub fn spawn(view_id: ViewId, period: Duration, tx: Sender<Event>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(Event::ProgressTick(view_id)).is_err() {
                    debug!(%view_id, "ticker_receiver_closed");
                    break;
                }
            }
        });

        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn drain(rx: &flume::Receiver<Event>) -> usize {
        rx.drain().count()
    }

    #[tokio::test(start_paused = true)]
    async fn emits_one_tick_per_period() {
        let (tx, rx) = flume::unbounded();
        let id = Uuid::new_v4();
        let _ticker = ProgressTicker::spawn(id, Duration::from_secs(1), tx);

        tokio::time::sleep(Duration::from_millis(3500)).await;

        let ticks: Vec<Event> = rx.drain().collect();
        assert_eq!(ticks.len(), 3);
        assert!(ticks.iter().all(|e| matches!(e, Event::ProgressTick(v) if *v == id)));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_stops_ticks() {
        let (tx, rx) = flume::unbounded();
        let ticker = ProgressTicker::spawn(Uuid::new_v4(), Duration::from_secs(1), tx);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(drain(&rx), 1);

        drop(ticker);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(drain(&rx), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_receiver_is_gone() {
        let (tx, rx) = flume::unbounded();
        let ticker = ProgressTicker::spawn(Uuid::new_v4(), Duration::from_secs(1), tx);
        drop(rx);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(ticker.is_finished());
    }
}
