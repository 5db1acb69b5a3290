//! Event-rate limiting for high-frequency browser events.
//!
//! DESIGN
//! ======
//! Pure window bookkeeping driven by an injected now-milliseconds value, so
//! both limiters are testable without timers. The browser wrappers bind the
//! cores to `Date::now` and `gloo` timeouts:
//! - leading-edge throttle for scroll (fire first, drop the burst);
//! - trailing-edge debounce for resize (fire once after the burst stops).

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod rate_limit_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

/// Leading-edge limiter. The first call in a window fires; calls within
/// `limit_ms` of that firing are dropped; the window re-opens `limit_ms`
/// after the firing regardless of suppressed calls.
#[derive(Clone, Copy, Debug)]
pub struct ThrottleGate {
    limit_ms: f64,
    open_at_ms: f64,
}

impl ThrottleGate {
    #[must_use]
    pub fn new(limit_ms: f64) -> Self {
        Self { limit_ms, open_at_ms: f64::MIN }
    }

    /// Whether a call arriving at `now_ms` should run. Firing closes the
    /// window until `now_ms + limit_ms`.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        if now_ms < self.open_at_ms {
            return false;
        }
        self.open_at_ms = now_ms + self.limit_ms;
        true
    }
}

/// Trailing-edge limiter. Each call supersedes the pending deadline; only
/// `wait_ms` of quiet lets the last call through.
#[derive(Clone, Copy, Debug)]
pub struct DebounceWindow {
    wait_ms: f64,
    deadline_ms: Option<f64>,
}

impl DebounceWindow {
    #[must_use]
    pub fn new(wait_ms: f64) -> Self {
        Self { wait_ms, deadline_ms: None }
    }

    /// Record a call at `now_ms`, replacing any pending deadline.
    pub fn push(&mut self, now_ms: f64) {
        self.deadline_ms = Some(now_ms + self.wait_ms);
    }

    /// Whether the deferred call is due at `now_ms`. Firing clears it.
    pub fn fire_due(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }
}

/// Wrap `f` so bursts run it at most once per `limit_ms`, on the burst's
/// leading edge.
#[cfg(feature = "hydrate")]
pub fn throttled(limit_ms: f64, mut f: impl FnMut() + 'static) -> impl FnMut() {
    let mut gate = ThrottleGate::new(limit_ms);
    move || {
        if gate.try_fire(js_sys::Date::now()) {
            f();
        }
    }
}

/// Wrap `f` so it runs once, `wait_ms` after the last call of a burst.
/// Replacing the pending timeout drops (and thereby cancels) the old one.
#[cfg(feature = "hydrate")]
pub fn debounced(wait_ms: u32, f: impl Fn() + Clone + 'static) -> impl FnMut() {
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move || {
        let f = f.clone();
        // Replacing the slot drops the superseded timeout, cancelling it;
        // dropping an already-fired one is a no-op.
        *pending.borrow_mut() = Some(Timeout::new(wait_ms, move || f()));
    }
}
