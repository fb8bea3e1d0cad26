use crate::runtime::MemoryStats;

/// Occupancy fraction of the target used as the soft limit. Pacing turns
/// aggressive before the target itself is reached, leaving 30% headroom.
pub const SOFT_LIMIT_RATIO: f64 = 0.7;

/// Floor for the applied pacing percent. Below this, collection frequency
/// rises enough that governance itself dominates CPU time.
pub const MIN_PACING_PERCENT: u32 = 50;

/// Outcome of one pacing evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacingDecision {
    /// `target * 0.7`, the float-path soft limit the percent is derived from.
    pub soft_limit_bytes: f64,
    /// Proportional percent before clamping and truncation.
    pub raw_percent: f64,
    /// The percent to hand to the collector: floor-clamped, then truncated.
    pub percent: u32,
    /// Whether resident memory crossed the hard threshold and a forced
    /// collection plus OS release should run.
    pub release: bool,
}

/// Evaluate the pacing policy for one tick.
///
/// Returns `None` when `target_bytes` is negative: governance is disabled and
/// the caller must perform no side effects at all for this tick.
///
/// The soft limit is computed in floating point while the release threshold
/// uses integer-truncated `target * 70 / 100`. Both express the same nominal
/// 70% ratio but round differently near the boundary; the two paths are kept
/// separate on purpose.
pub fn plan(target_bytes: i64, stats: &MemoryStats) -> Option<PacingDecision> {
    if target_bytes < 0 {
        return None;
    }

    let soft_limit_bytes = target_bytes as f64 * SOFT_LIMIT_RATIO;
    // A zero live-heap reading would divide by zero; clamp the denominator.
    let raw_percent = soft_limit_bytes / stats.allocated_bytes.max(1) as f64 * 100.0;

    let percent = if raw_percent < MIN_PACING_PERCENT as f64 {
        MIN_PACING_PERCENT
    } else {
        // Truncation, not rounding; the cast saturates on overflow.
        raw_percent as u32
    };

    // Widened multiply: any i64 target is accepted, including ones where
    // `target * 70` would not fit in 64 bits.
    let release = stats.resident_bytes > (target_bytes as u128 * 70 / 100) as u64;

    Some(PacingDecision {
        soft_limit_bytes,
        raw_percent,
        percent,
        release,
    })
}
