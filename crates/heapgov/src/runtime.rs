use serde::{Deserialize, Serialize};

/// Point-in-time memory figures for the governed process.
///
/// Recomputed from scratch every tick; never cached across ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStats {
    /// Heap bytes the collector currently considers reachable and in use.
    pub allocated_bytes: u64,
    /// Total memory the OS attributes to the process, including freed heap
    /// pages not yet returned.
    pub resident_bytes: u64,
}

/// Host-side seam to the garbage-collected runtime being governed.
///
/// Every operation is infallible by contract: statistics queries and pacing
/// writes are externally synchronized by the runtime itself, and the governor
/// adds no locking around them.
pub trait CollectorRuntime: Send + Sync {
    /// Current live-heap and OS-resident byte counts.
    fn memory_stats(&self) -> MemoryStats;

    /// Set the grow-before-collect ratio, in percent, returning the previous
    /// setting. Higher values let the heap grow further between collections.
    fn set_pacing_percent(&self, percent: u32) -> u32;

    /// Run a full collection immediately.
    fn collect(&self);

    /// Return freed heap pages to the OS.
    fn release_os_memory(&self);
}
