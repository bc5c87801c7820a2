use std::time::Instant;

use tracing::trace;

use crate::debouncer::Debouncer;
use crate::gate::ClickGate;

/// What a listener did with a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The handler ran.
    Fired,

    /// This listener accepted a click less than the minimum interval ago.
    /// The gate is still closed for the rest of the frame.
    TooSoon,

    /// Another click already went through this frame. Nothing changed.
    FrameBusy,
}

impl Activation {
    pub fn fired(self) -> bool {
        matches!(self, Activation::Fired)
    }
}

/// Wraps a click handler so that it fires at most once per frame across
/// all listeners of a gate, and never twice within the gate's minimum
/// interval for this listener.
pub struct DebouncingListener<F> {
    gate: ClickGate,
    debouncer: Debouncer,
    handler: F,
}

impl<F> DebouncingListener<F> {
    pub fn new(gate: &ClickGate, handler: F) -> Self {
        Self {
            gate: gate.clone(),
            debouncer: Debouncer::new(),
            handler,
        }
    }

    pub fn gate(&self) -> &ClickGate {
        &self.gate
    }

    /// Handle a click happening now. The cooldown is measured from when
    /// this call finishes, so clicks that queued up behind a slow handler
    /// are still too soon.
    pub fn on_click<S: ?Sized>(&mut self, source: &S) -> Activation
    where
        F: FnMut(&S),
    {
        self.activate(source, Instant::now(), Instant::now)
    }

    /// Handle a click that happened at `now`, treating the handler as
    /// instantaneous.
    ///
    /// The timestamp is recorded for every click that gets past the frame
    /// gate, even when the handler is skipped, so a burst of clicks keeps
    /// pushing the next accepted one out.
    pub fn on_click_at<S: ?Sized>(&mut self, source: &S, now: Instant) -> Activation
    where
        F: FnMut(&S),
    {
        self.activate(source, now, || now)
    }

    fn activate<S: ?Sized>(
        &mut self,
        source: &S,
        now: Instant,
        finished_at: impl FnOnce() -> Instant,
    ) -> Activation
    where
        F: FnMut(&S),
    {
        if !self.gate.try_close() {
            trace!("click dropped, gate already closed this frame");
            return Activation::FrameBusy;
        }

        let interval = self.gate.min_interval();
        let activation = if self.debouncer.should_act_at(now, interval) {
            (self.handler)(source);
            Activation::Fired
        } else {
            trace!(
                "click dropped, {:?} since last (min {:?})",
                self.debouncer.elapsed_since_last(now),
                interval
            );
            Activation::TooSoon
        };

        self.debouncer.bounce_at(finished_at());
        activation
    }
}

impl<F> std::fmt::Debug for DebouncingListener<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebouncingListener")
            .field("gate", &self.gate)
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}
