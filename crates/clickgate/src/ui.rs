//! egui glue: a UI queue drained at the top of every frame and a helper
//! for routing button clicks through a [`DebouncingListener`].

use std::rc::Rc;
use std::time::Duration;

use crate::{ClickGate, ClickSettings, DebouncingListener, FrameQueue, Task, UiQueue};

/// Tasks posted here run when the app calls [`EguiQueue::begin_frame`].
/// Posting requests a repaint so that frame is not left waiting on input.
pub struct EguiQueue {
    ctx: egui::Context,
    frame: FrameQueue,
}

impl EguiQueue {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            ctx: ctx.clone(),
            frame: FrameQueue::new(),
        }
    }

    pub fn begin_frame(&self) -> usize {
        self.frame.run_pending()
    }

    pub fn pending(&self) -> usize {
        self.frame.len()
    }
}

impl UiQueue for EguiQueue {
    fn post(&self, task: Task) {
        self.frame.post(task);
        self.ctx.request_repaint();
    }
}

/// Owns the click gate for an egui app. Keep one per app, call
/// [`ClickGuard::begin_frame`] first thing in `update`, and create a
/// listener per button.
pub struct ClickGuard {
    queue: Rc<EguiQueue>,
    gate: ClickGate,
}

impl ClickGuard {
    pub fn new(ctx: &egui::Context) -> Self {
        let queue = Rc::new(EguiQueue::new(ctx));
        let gate = ClickGate::new(queue.clone());
        Self { queue, gate }
    }

    pub fn from_settings(ctx: &egui::Context, settings: &ClickSettings) -> Self {
        let guard = Self::new(ctx);
        guard.set_min_interval(settings.min_interval());
        guard
    }

    /// Run the tasks deferred from the previous frame, reopening the gate
    /// if a click closed it.
    #[profiling::function]
    pub fn begin_frame(&self) {
        self.queue.begin_frame();
    }

    pub fn gate(&self) -> &ClickGate {
        &self.gate
    }

    pub fn min_interval(&self) -> Duration {
        self.gate.min_interval()
    }

    pub fn set_min_interval(&self, min_interval: Duration) {
        self.gate.set_min_interval(min_interval);
    }

    pub fn listener<F>(&self, handler: F) -> DebouncingListener<F>
    where
        F: FnMut(&egui::Response),
    {
        self.gate.listener(handler)
    }
}

pub trait DebouncedResponse {
    /// Forward a click on this widget through `listener`. Returns whether
    /// the listener's handler ran.
    fn debounced_click<F>(&self, listener: &mut DebouncingListener<F>) -> bool
    where
        F: FnMut(&Self);
}

impl DebouncedResponse for egui::Response {
    fn debounced_click<F>(&self, listener: &mut DebouncingListener<F>) -> bool
    where
        F: FnMut(&Self),
    {
        self.clicked() && listener.on_click(self).fired()
    }
}
