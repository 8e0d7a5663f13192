use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sentinel_core::metrics::MetricsWindow;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

use crate::generator::{self, GeneratorParams};

/// Cancel handle for a running metrics feed.
///
/// The feed also ends on its own when the receiver is dropped; `stop` exists
/// for callers that want to halt the cadence while keeping the channel alive.
#[derive(Debug)]
pub struct FeedHandle {
    task: JoinHandle<()>,
}

impl FeedHandle {
    /// Cancel the feed. No further windows are published.
    pub fn stop(self) {
        self.task.abort();
        tracing::debug!("metrics feed stopped");
    }
}

/// Spawn a background Tokio task that seeds a metrics window, then advances
/// it every `interval_ms` milliseconds and forwards each [`MetricsWindow`]
/// snapshot through the returned channel.
///
/// The seeded window is published immediately, so consumers never start from
/// an empty chart. Passing a `seed` makes the whole stream deterministic.
pub fn spawn_feed(
    interval_ms: u64,
    seed: Option<u64>,
) -> (FeedHandle, mpsc::Receiver<MetricsWindow>) {
    let (tx, rx) = mpsc::channel(4);
    let interval = Duration::from_millis(interval_ms);

    let task = tokio::spawn(async move {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let params = GeneratorParams::default();
        let mut window = generator::initialize(&params, &mut rng);
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await; // first tick completes immediately
            if tx.send(window.clone()).await.is_err() {
                break; // all receivers dropped
            }
            window = generator::tick(&params, &window, &mut rng);
        }
    });

    (FeedHandle { task }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_core::metrics::WINDOW_LEN;

    #[tokio::test]
    async fn feed_publishes_seeded_then_slid_windows() {
        let (handle, mut rx) = spawn_feed(1, Some(42));

        let first = rx.recv().await.expect("seeded window");
        assert_eq!(first.samples().len(), WINDOW_LEN);
        assert_eq!(first.samples()[0].hour, 0);
        assert_eq!(first.latest().hour, 23);

        let second = rx.recv().await.expect("first advanced window");
        assert_eq!(second.samples()[..WINDOW_LEN - 1], first.samples()[1..]);
        assert_eq!(second.latest().hour, 0);

        handle.stop();
    }

    #[tokio::test]
    async fn same_seed_yields_identical_streams() {
        let (a_handle, mut a) = spawn_feed(1, Some(7));
        let (b_handle, mut b) = spawn_feed(1, Some(7));

        assert_eq!(a.recv().await, b.recv().await);
        assert_eq!(a.recv().await, b.recv().await);

        a_handle.stop();
        b_handle.stop();
    }
}
