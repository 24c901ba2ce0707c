//! Performance instrumentation for hot drag paths.
//!
//! Drag move events arrive at pointer rate, so collision resolution and move
//! handling are wrapped in [`profile_scope!`]. The macro compiles to nothing
//! unless the `profiling` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! fridgeboard = { features = ["profiling"] }
//! ```

use crate::constants::SLOW_SCOPE_MS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{trace, warn};

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Flip scope timing on or off without rebuilding. Only timers created
/// afterwards see the change.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer: logs at `warn` when the scope outlives its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    active: bool,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            active: true,
        }
    }

    /// Timer honoring the runtime profiling switch
    pub fn for_profiling(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms: SLOW_SCOPE_MS,
            active: is_profiling_enabled(),
        }
    }

    /// Whether this timer will report when dropped
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            warn!(scope = self.name, elapsed_ms = elapsed, "slow scope");
        } else {
            trace!(scope = self.name, elapsed_ms = elapsed, "scope timing");
        }
    }
}
