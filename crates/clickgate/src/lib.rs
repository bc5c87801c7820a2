//! Click debouncing for egui apps.
//!
//! Every [`DebouncingListener`] created from the same [`ClickGate`] shares
//! one per-frame gate: once any of them accepts a click, the rest ignore
//! clicks until the next frame. Each listener also ignores clicks that come
//! within the gate's minimum interval of its previous one.

mod args;
mod debouncer;
mod error;
mod gate;
mod listener;
mod queue;
mod settings;
pub mod storage;
pub mod ui;

pub use args::Args;
pub use debouncer::Debouncer;
pub use error::{Error, Result};
pub use gate::{ClickGate, DEFAULT_MIN_INTERVAL};
pub use listener::{Activation, DebouncingListener};
pub use queue::{FrameQueue, Task, UiQueue};
pub use settings::{ClickSettings, SettingsHandler};
pub use storage::{DataPath, DataPathType, Directory};
pub use ui::{ClickGuard, DebouncedResponse, EguiQueue};

// export libs
pub use egui;
