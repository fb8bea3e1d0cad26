use crate::config::GovernorConfig;
use crate::pacing;
use crate::process;
use crate::report::TickReport;
use crate::runtime::CollectorRuntime;
use crate::target::TargetStore;
use parking_lot::Mutex;
use std::sync::{mpsc, Arc};
use std::thread;

type TickListener = Arc<dyn Fn(TickReport) + Send + Sync>;

struct MonitorState {
    stop_tx: mpsc::Sender<()>,
    join: thread::JoinHandle<()>,
}

struct Inner {
    store: Arc<TargetStore>,
    runtime: Arc<dyn CollectorRuntime>,
    config: GovernorConfig,
    listeners: Mutex<Vec<TickListener>>,
    monitor: Mutex<Option<MonitorState>>,
}

/// Feedback governor that keeps a collected process under a resident-memory
/// target by retuning the collector's pacing every tick.
///
/// The governor is a cheap clonable handle; all clones share one target store
/// and one monitor thread. [`Governor::tick`] is deterministic and
/// synchronous, so tests (or hosts with their own scheduler) can drive it
/// directly instead of starting the monitor.
#[derive(Clone)]
pub struct Governor {
    inner: Arc<Inner>,
}

impl Governor {
    pub fn new(store: Arc<TargetStore>, runtime: Arc<dyn CollectorRuntime>) -> Self {
        Self::with_config(store, runtime, GovernorConfig::default())
    }

    pub fn with_config(
        store: Arc<TargetStore>,
        runtime: Arc<dyn CollectorRuntime>,
        config: GovernorConfig,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                runtime,
                config,
                listeners: Mutex::new(Vec::new()),
                monitor: Mutex::new(None),
            }),
        }
    }

    pub fn config(&self) -> GovernorConfig {
        self.inner.config
    }

    /// Set the desired ceiling on process resident memory, in bytes,
    /// returning the previous setting. Pass a negative value to disable
    /// governance; the monitor goes inert from its very next tick.
    pub fn set_target_bytes(&self, bytes: i64) -> i64 {
        self.inner.store.set(bytes)
    }

    /// Subscribe to per-tick reports. Listeners run on the ticking thread
    /// after the tick's side effects have been applied; disabled ticks are
    /// not reported.
    pub fn subscribe(&self, listener: TickListener) {
        self.inner.listeners.lock().push(listener);
    }

    /// Evaluate and apply the pacing policy once.
    ///
    /// Returns `None` without any side effects when no target is set. The
    /// target is read exactly once and that snapshot drives both the pacing
    /// computation and the release decision.
    pub fn tick(&self) -> Option<TickReport> {
        let mut stats = self.inner.runtime.memory_stats();
        if self.inner.config.sample_os_rss {
            // The OS figure is an upper bound over what the runtime
            // self-reports; freed-but-unreturned pages only show up here.
            if let Some(rss) = process::current_rss_bytes() {
                stats.resident_bytes = stats.resident_bytes.max(rss);
            }
        }

        let target_bytes = self.inner.store.get();
        let decision = pacing::plan(target_bytes, &stats)?;

        let previous_percent = self.inner.runtime.set_pacing_percent(decision.percent);
        tracing::debug!(
            target = "heapgov",
            percent = decision.percent,
            raw_percent = decision.raw_percent,
            target_bytes,
            soft_limit_bytes = decision.soft_limit_bytes,
            allocated_bytes = stats.allocated_bytes,
            resident_bytes = stats.resident_bytes,
            "adjusted collector pacing"
        );

        if decision.release {
            tracing::info!(
                target = "heapgov",
                resident_bytes = stats.resident_bytes,
                target_bytes,
                "resident memory over hard threshold, forcing collection"
            );
            self.inner.runtime.collect();
            self.inner.runtime.release_os_memory();
        }

        let report = TickReport {
            target_bytes,
            soft_limit_bytes: decision.soft_limit_bytes,
            allocated_bytes: stats.allocated_bytes,
            resident_bytes: stats.resident_bytes,
            raw_percent: decision.raw_percent,
            applied_percent: decision.percent,
            previous_percent,
            released: decision.release,
        };

        let listeners = self.inner.listeners.lock().clone();
        for listener in listeners {
            listener(report);
        }

        Some(report)
    }

    /// Start the background monitor thread. Idempotent while running.
    ///
    /// The thread ticks every `config.interval`; a slow tick delays the next
    /// one rather than queueing it. The stop signal is checked before each
    /// sleep, so [`Governor::stop`] takes effect within one interval.
    pub fn start(&self) {
        let mut monitor = self.inner.monitor.lock();
        if monitor.is_some() {
            return;
        }

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let governor = self.clone();
        let interval = self.inner.config.interval;
        let join = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    governor.tick();
                }
                Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        });

        *monitor = Some(MonitorState { stop_tx, join });
    }

    /// Stop the background monitor and wait for it to exit. No-op when the
    /// monitor is not running.
    pub fn stop(&self) {
        let state = self.inner.monitor.lock().take();
        if let Some(state) = state {
            let _ = state.stop_tx.send(());
            let _ = state.join.join();
        }
    }

    /// Whether the background monitor thread is currently running.
    pub fn is_running(&self) -> bool {
        self.inner.monitor.lock().is_some()
    }
}
