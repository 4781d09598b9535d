//! Timing for the input hot paths.
//!
//! Pointer moves arrive at display rate and every pointer-down and edge drop
//! runs a hit test, so those paths are wrapped in `profile_scope!`. Without the
//! `profiling` feature the macro expands to nothing.
//!
//! ```toml
//! [dependencies]
//! nodeboard = { features = ["profiling"] }
//! ```
//!
//! A scope that runs over its budget is reported at `warn`. With
//! [`set_verbose`] every timed scope is also reported at `trace`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{trace, warn};

/// One frame at 60 FPS. A single input event should never take this long.
pub const FRAME_BUDGET: Duration = Duration::from_micros(16_667);

/// Default budget for a `profile_scope!` without an explicit one
pub const SCOPE_BUDGET: Duration = Duration::from_millis(1);

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Time the rest of the enclosing scope. Compiles to nothing unless the
/// `profiling` feature is on.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _scope_timer = $crate::perf::ScopeTimer::start($name, $crate::perf::SCOPE_BUDGET);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $budget:expr) => {
        #[cfg(feature = "profiling")]
        let _scope_timer = $crate::perf::ScopeTimer::start($name, $budget);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $budget);
    };
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

#[inline]
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Reports on drop how long its scope took.
pub struct ScopeTimer {
    name: &'static str,
    started: Instant,
    budget: Duration,
}

impl ScopeTimer {
    pub fn start(name: &'static str, budget: Duration) -> Self {
        Self {
            name,
            started: Instant::now(),
            budget,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn over_budget(&self) -> bool {
        self.elapsed() > self.budget
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        if elapsed > self.budget {
            warn!(
                scope = self.name,
                elapsed_us = elapsed.as_micros() as u64,
                budget_us = self.budget.as_micros() as u64,
                "Input handling over budget"
            );
        } else if is_verbose() {
            trace!(scope = self.name, elapsed_us = elapsed.as_micros() as u64, "Scope timed");
        }
    }
}

/// Run `f`, returning its result and how long it took.
#[inline]
pub fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let result = f();
    (result, started.elapsed())
}
