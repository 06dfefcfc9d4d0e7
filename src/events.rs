//! Event wiring: an explicit subscription with a debounced resize policy.
//!
//! Rather than registering global listeners, consumers hold a
//! [`Subscription`] that they feed triggers into. Resize bursts coalesce
//! through a clock-injected [`Debouncer`], so rapid successive events run a
//! single selection pass once the stream goes quiet. Load-style triggers
//! fire the handler immediately. Nothing here touches a real event loop;
//! callers pass `Instant`s in, which keeps the whole surface testable.

use log::{debug, trace};
use std::time::{Duration, Instant};

/// Events that cause a full scan-select-write cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// First pass over the document after the shim activates
    InitialScan,
    /// DOM finished parsing
    ContentLoaded,
    /// Full page load (fallback when content-loaded never fired)
    Load,
    /// Viewport geometry changed
    Resize,
}

/// Coalesces a burst of observations into a single firing after a
/// quiescence window. Callers supply the clock.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<Instant>,
}

impl Debouncer {
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record an observation; restarts the quiescence window.
    pub fn observe(&mut self, at: Instant) {
        self.pending = Some(at);
    }

    /// True (once) when the window has elapsed since the last observation.
    pub fn ready(&mut self, at: Instant) -> bool {
        match self.pending {
            Some(last) if at.duration_since(last) >= self.window => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

type Handler = Box<dyn FnMut(Trigger) + Send>;

/// A handler bound to the trigger stream, with an explicit attach/detach
/// lifecycle. Detached subscriptions drop notifications on the floor.
pub struct Subscription {
    handler: Handler,
    debouncer: Debouncer,
    attached: bool,
}

impl Subscription {
    /// Create a detached subscription with the default resize window.
    pub fn new<F>(handler: F) -> Self
    where
        F: FnMut(Trigger) + Send + 'static,
    {
        Self::with_window(handler, Debouncer::DEFAULT_WINDOW)
    }

    pub fn with_window<F>(handler: F, window: Duration) -> Self
    where
        F: FnMut(Trigger) + Send + 'static,
    {
        Self {
            handler: Box::new(handler),
            debouncer: Debouncer::new(window),
            attached: false,
        }
    }

    pub fn attach(&mut self) {
        debug!("subscription attached");
        self.attached = true;
    }

    /// Detach and discard any pending debounced resize.
    pub fn detach(&mut self) {
        debug!("subscription detached");
        self.attached = false;
        self.debouncer.clear();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Feed a trigger in. Resize events are debounced and delivered by a
    /// later [`poll`](Self::poll); everything else fires immediately.
    pub fn notify(&mut self, trigger: Trigger, at: Instant) {
        if !self.attached {
            return;
        }
        match trigger {
            Trigger::Resize => {
                trace!("resize observed, debouncing");
                self.debouncer.observe(at);
            }
            other => (self.handler)(other),
        }
    }

    /// Deliver a pending debounced resize once its window has elapsed.
    pub fn poll(&mut self, at: Instant) {
        if self.attached && self.debouncer.ready(at) {
            (self.handler)(Trigger::Resize);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.attached)
            .field("debouncer", &self.debouncer)
            .finish()
    }
}
