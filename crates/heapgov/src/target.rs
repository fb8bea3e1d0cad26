use parking_lot::RwLock;

/// Sentinel stored while no resident-memory target is configured.
///
/// Any negative value disables governance; `-1` is the canonical form and the
/// initial state.
pub const TARGET_UNSET: i64 = -1;

/// Desired ceiling on process resident memory, in bytes.
///
/// The store holds a single current value with no history. Setters swap it
/// atomically from any thread; the governor snapshots it once per tick under
/// the same lock, so readers never observe a torn value.
#[derive(Debug)]
pub struct TargetStore {
    bytes: RwLock<i64>,
}

impl TargetStore {
    pub fn new() -> Self {
        Self {
            bytes: RwLock::new(TARGET_UNSET),
        }
    }

    /// Replace the target, returning the value that was stored immediately
    /// before the call so a caller can restore it later.
    ///
    /// Negative values (canonically [`TARGET_UNSET`]) disable governance; no
    /// other validation is applied.
    pub fn set(&self, bytes: i64) -> i64 {
        let mut current = self.bytes.write();
        std::mem::replace(&mut *current, bytes)
    }

    /// Snapshot the current target.
    pub fn get(&self) -> i64 {
        *self.bytes.read()
    }

    /// Whether a non-negative target is currently configured.
    pub fn is_set(&self) -> bool {
        self.get() >= 0
    }
}

impl Default for TargetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let store = TargetStore::new();
        assert_eq!(store.get(), TARGET_UNSET);
        assert!(!store.is_set());
    }

    #[test]
    fn set_returns_previous_value() {
        let store = TargetStore::new();
        assert_eq!(store.set(1_000_000), TARGET_UNSET);
        assert_eq!(store.set(2_000_000), 1_000_000);
        assert_eq!(store.get(), 2_000_000);
    }

    #[test]
    fn zero_is_a_valid_target() {
        let store = TargetStore::new();
        store.set(0);
        assert!(store.is_set());
    }
}
