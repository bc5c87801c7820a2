use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use clickgate::{
    ClickGuard, ClickSettings, DataPath, DebouncedResponse, DebouncingListener, SettingsHandler,
};
use tracing::{error, info, trace};

type ClickHandler = Box<dyn FnMut(&egui::Response)>;

const MAX_INTERVAL_MS: u64 = 2_000;

struct DemoButton {
    label: &'static str,
    clicks: Rc<Cell<u32>>,
    dropped: u32,
    listener: DebouncingListener<ClickHandler>,
}

impl DemoButton {
    fn new(guard: &ClickGuard, label: &'static str) -> Self {
        let clicks = Rc::new(Cell::new(0));
        let handler: ClickHandler = {
            let clicks = clicks.clone();
            Box::new(move |_resp| {
                clicks.set(clicks.get() + 1);
                info!("{label} clicked");
            })
        };

        Self {
            label,
            clicks,
            dropped: 0,
            listener: guard.listener(handler),
        }
    }

    /// Route a response through the listener. Returns whether the widget
    /// was clicked at all.
    fn route(&mut self, resp: &egui::Response) -> bool {
        if !resp.clicked() {
            return false;
        }

        if !resp.debounced_click(&mut self.listener) {
            trace!("{} click debounced", self.label);
            self.dropped += 1;
        }
        true
    }
}

pub struct DemoApp {
    guard: ClickGuard,
    buttons: Vec<DemoButton>,
    settings: ClickSettings,
    settings_handler: SettingsHandler,
    settings_dirty: bool,
    raw_clicks: u32,
}

impl DemoApp {
    pub fn new(ctx: &egui::Context, path: &DataPath, interval_override: Option<Duration>) -> Self {
        let settings_handler = SettingsHandler::new(path);
        let mut settings = settings_handler.load();
        if let Some(interval) = interval_override {
            info!("using click interval {:?} from args", interval);
            settings.min_interval_ms = interval.as_millis() as u64;
        }

        let guard = ClickGuard::from_settings(ctx, &settings);
        let buttons = ["Save", "Send", "Delete"]
            .into_iter()
            .map(|label| DemoButton::new(&guard, label))
            .collect();

        Self {
            guard,
            buttons,
            settings,
            settings_handler,
            settings_dirty: false,
            raw_clicks: 0,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.guard.min_interval()
    }

    fn interval_slider(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::Slider::new(&mut self.settings.min_interval_ms, 0..=MAX_INTERVAL_MS)
                .text("min interval (ms)"),
        );

        if resp.changed() {
            self.guard.set_min_interval(self.settings.min_interval());
            self.settings_dirty = true;
        }

        // don't hit the disk on every drag step
        if self.settings_dirty && !resp.dragged() {
            if let Err(e) = self.settings_handler.save(&self.settings) {
                error!("could not save click settings: {e}");
            }
            self.settings_dirty = false;
        }
    }

    fn button_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for button in &mut self.buttons {
                let resp = ui.button(button.label);
                if button.route(&resp) {
                    self.raw_clicks += 1;
                }
            }
        });
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.guard.begin_frame();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("clickgate");
            self.interval_slider(ui);
            ui.separator();
            self.button_row(ui);
            ui.separator();

            for button in &self.buttons {
                ui.label(format!(
                    "{}: {} ({} debounced)",
                    button.label,
                    button.clicks.get(),
                    button.dropped
                ));
            }
            ui.label(format!("raw clicks: {}", self.raw_clicks));
            ui.label(if self.guard.gate().is_open() {
                "gate: open"
            } else {
                "gate: closed this frame"
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_override_persisted_interval() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = DataPath::new(tmp.path());
        SettingsHandler::new(&path)
            .save(&ClickSettings {
                min_interval_ms: 900,
            })
            .expect("save");

        let ctx = egui::Context::default();
        let app = DemoApp::new(&ctx, &path, None);
        assert_eq!(app.min_interval(), Duration::from_millis(900));

        let app = DemoApp::new(&ctx, &path, Some(Duration::from_millis(50)));
        assert_eq!(app.min_interval(), Duration::from_millis(50));
    }

    #[test]
    fn buttons_share_one_gate() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let ctx = egui::Context::default();
        let app = DemoApp::new(&ctx, &DataPath::new(tmp.path()), None);

        assert_eq!(app.buttons.len(), 3);
        for button in &app.buttons {
            assert!(button.listener.gate().is_open());
            assert_eq!(button.clicks.get(), 0);
        }
        app.guard.gate().set_min_interval(Duration::ZERO);
        assert_eq!(
            app.buttons[0].listener.gate().min_interval(),
            Duration::ZERO
        );
    }

    #[test]
    fn unclicked_button_records_nothing() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let ctx = egui::Context::default();
        let mut app = DemoApp::new(&ctx, &DataPath::new(tmp.path()), None);

        let mut resp = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| resp = Some(ui.button("Save")));
        });
        let resp = resp.expect("button laid out");

        let button = &mut app.buttons[0];
        assert!(!button.route(&resp));
        assert_eq!(button.dropped, 0);
        assert_eq!(button.clicks.get(), 0);
        assert!(app.guard.gate().is_open());
    }
}
