use serde::{Deserialize, Serialize};

/// Summary of one governed tick, intended for telemetry.
///
/// Delivered to every subscribed listener after the tick's side effects have
/// been applied. Ticks taken while governance is disabled produce no report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// The target in effect for this tick, in bytes.
    pub target_bytes: i64,
    /// Float-path soft limit (`target * 0.7`) the pacing was derived from.
    pub soft_limit_bytes: f64,
    /// Live-heap bytes sampled at the start of the tick.
    pub allocated_bytes: u64,
    /// Resident bytes used for the release decision (after any OS RSS merge).
    pub resident_bytes: u64,
    /// Proportional percent before clamping and truncation.
    pub raw_percent: f64,
    /// The percent actually written to the collector.
    pub applied_percent: u32,
    /// The collector's pacing percent before this tick overwrote it.
    pub previous_percent: u32,
    /// Whether the forced collection + OS release path fired.
    pub released: bool,
}
