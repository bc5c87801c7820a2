use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::listener::DebouncingListener;
use crate::queue::UiQueue;

/// How long a listener waits between accepted clicks unless configured
/// otherwise.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug)]
struct GateState {
    open: Cell<bool>,
    min_interval: Cell<Duration>,
}

/// State shared by every listener in a UI: the per-frame gate and the
/// minimum interval between clicks.
///
/// A click accepted by any listener closes the gate for every listener
/// until the reopen task posted to the UI queue runs, which is the next
/// turn of the event loop. Cloning is cheap and clones share state.
#[derive(Clone)]
pub struct ClickGate {
    state: Rc<GateState>,
    queue: Rc<dyn UiQueue>,
}

impl ClickGate {
    pub fn new(queue: Rc<dyn UiQueue>) -> Self {
        Self {
            state: Rc::new(GateState {
                open: Cell::new(true),
                min_interval: Cell::new(DEFAULT_MIN_INTERVAL),
            }),
            queue,
        }
    }

    pub fn with_min_interval(self, min_interval: Duration) -> Self {
        self.set_min_interval(min_interval);
        self
    }

    pub fn min_interval(&self) -> Duration {
        self.state.min_interval.get()
    }

    /// Applies to every listener on this gate, including existing ones.
    pub fn set_min_interval(&self, min_interval: Duration) {
        debug!("click gate min interval set to {:?}", min_interval);
        self.state.min_interval.set(min_interval);
    }

    pub fn is_open(&self) -> bool {
        self.state.open.get()
    }

    /// Force the gate open without waiting for the queued reopen task.
    pub fn reopen(&self) {
        self.state.open.set(true);
    }

    /// Claim the gate for the current frame. Returns false if some other
    /// click already claimed it.
    pub(crate) fn try_close(&self) -> bool {
        if !self.state.open.get() {
            return false;
        }

        self.state.open.set(false);
        let state = Rc::downgrade(&self.state);
        self.queue.post(Box::new(move || {
            if let Some(state) = state.upgrade() {
                state.open.set(true);
            }
        }));

        true
    }

    pub fn listener<F>(&self, handler: F) -> DebouncingListener<F> {
        DebouncingListener::new(self, handler)
    }
}

impl std::fmt::Debug for ClickGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickGate")
            .field("open", &self.is_open())
            .field("min_interval", &self.min_interval())
            .finish()
    }
}
