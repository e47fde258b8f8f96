//! Best-effort process memory introspection.
//!
//! Readings are observational only; a failed sample is `None`, never an
//! error, and nothing downstream gates on the value.

/// Peak resident set size of this process in bytes.
#[cfg(unix)]
pub fn max_rss_bytes() -> Option<u64> {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::uninit();
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    let usage = unsafe { usage.assume_init() };
    let maxrss = usage.ru_maxrss as u64;
    // Linux reports kilobytes, macOS reports bytes.
    if cfg!(target_os = "macos") {
        Some(maxrss)
    } else {
        Some(maxrss * 1024)
    }
}

#[cfg(not(unix))]
pub fn max_rss_bytes() -> Option<u64> {
    None
}
