//! Best-effort sampling of the process's OS-resident memory.

/// Extract the resident set size, in bytes, from `/proc/self/status` contents.
///
/// This is a pure helper intended for unit testing; it does not touch the
/// filesystem.
pub fn parse_vm_rss_bytes(status: &str) -> Option<u64> {
    for line in status.lines() {
        let line = line.trim_start();
        let Some(rest) = line.strip_prefix("VmRSS:") else {
            continue;
        };
        let kb = rest.split_whitespace().next()?;
        return kb.parse::<u64>().ok().map(|kb| kb.saturating_mul(1024));
    }
    None
}

/// Read the process's current resident set size from the OS.
///
/// Returns `None` on non-Linux platforms and whenever `/proc` is unreadable
/// or malformed; resident sampling is best-effort by design.
pub fn current_rss_bytes() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let status = match std::fs::read_to_string("/proc/self/status") {
            Ok(status) => status,
            Err(err) => {
                // `/proc` may be missing in sandboxed environments; only log
                // unexpected filesystem errors, and only once.
                if err.kind() != std::io::ErrorKind::NotFound {
                    static REPORTED: std::sync::OnceLock<()> = std::sync::OnceLock::new();
                    if REPORTED.set(()).is_ok() {
                        tracing::debug!(
                            target = "heapgov",
                            error = %err,
                            "failed to read /proc/self/status while sampling rss"
                        );
                    }
                }
                return None;
            }
        };
        parse_vm_rss_bytes(&status)
    }

    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}
