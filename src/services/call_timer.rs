//! Call duration ticker
//!
//! [`CallTimer`] owns a background task that bumps an elapsed-seconds counter
//! once per second. The task lives exactly as long as the handle: dropping the
//! timer aborts it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

const TICK: Duration = Duration::from_secs(1);

pub struct CallTimer {
    elapsed: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

impl CallTimer {
    /// Start ticking on `runtime`
    pub fn start(runtime: &Handle) -> Self {
        let elapsed = Arc::new(AtomicU64::new(0));
        let counter = elapsed.clone();

        let task = runtime.spawn(async move {
            let mut ticks = interval_at(Instant::now() + TICK, TICK);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                ticks.tick().await;
                counter.fetch_add(1, Ordering::Relaxed);
            }
        });

        tracing::debug!("Call timer started");
        Self { elapsed, task }
    }

    /// Seconds since the timer started
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.load(Ordering::Relaxed)
    }

    /// Elapsed time as `MM:SS`
    pub fn display(&self) -> String {
        format_duration(self.elapsed_secs())
    }

    #[cfg(test)]
    fn counter(&self) -> Arc<AtomicU64> {
        self.elapsed.clone()
    }
}

impl Drop for CallTimer {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("Call timer stopped at {}s", self.elapsed_secs());
    }
}

/// Format seconds as zero-padded `MM:SS`
pub fn format_duration(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
