use std::time::Duration;

/// Tuning knobs for the background monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovernorConfig {
    /// How often the monitor thread evaluates the pacing policy.
    pub interval: Duration,
    /// Fold the OS-reported resident set size into each tick's resident
    /// figure as an upper bound over what the runtime self-reports. Disable
    /// for deterministic tests.
    pub sample_os_rss: bool,
}

impl Default for GovernorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            sample_os_rss: true,
        }
    }
}
