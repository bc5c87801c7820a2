use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::gate::DEFAULT_MIN_INTERVAL;
use crate::{storage, DataPath, DataPathType, Directory, Result};

const SETTINGS_FILE: &str = "click_settings.json";

fn default_min_interval_ms() -> u64 {
    DEFAULT_MIN_INTERVAL.as_millis() as u64
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct ClickSettings {
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,
}

impl ClickSettings {
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}

impl Default for ClickSettings {
    fn default() -> Self {
        Self {
            min_interval_ms: default_min_interval_ms(),
        }
    }
}

/// Loads and saves [`ClickSettings`] in the settings data directory.
pub struct SettingsHandler {
    directory: Directory,
}

impl SettingsHandler {
    pub fn new(path: &DataPath) -> Self {
        let directory = Directory::new(path.path(DataPathType::Setting));
        Self { directory }
    }

    pub fn load(&self) -> ClickSettings {
        match self.directory.get_file(SETTINGS_FILE) {
            Ok(contents) => match serde_json::from_str::<ClickSettings>(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    error!("Invalid {} format: {e}. Using defaults", SETTINGS_FILE);
                    ClickSettings::default()
                }
            },
            Err(e) => {
                info!("Could not read {}: {e}. Using defaults", SETTINGS_FILE);
                ClickSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &ClickSettings) -> Result<()> {
        let serialized = serde_json::to_string(settings)?;
        storage::write_file(&self.directory.file_path, SETTINGS_FILE, &serialized)?;
        info!("wrote click settings {}", serialized);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let handler = SettingsHandler::new(&DataPath::new(tmp.path()));

        let settings = handler.load();
        assert_eq!(settings, ClickSettings::default());
        assert_eq!(settings.min_interval(), Duration::from_millis(200));
    }

    #[test]
    fn save_and_reload() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = DataPath::new(tmp.path());
        let handler = SettingsHandler::new(&path);

        handler
            .save(&ClickSettings {
                min_interval_ms: 350,
            })
            .expect("save");

        let reloaded = SettingsHandler::new(&path).load();
        assert_eq!(reloaded.min_interval_ms, 350);
    }

    #[test]
    fn garbage_file_gives_defaults() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = DataPath::new(tmp.path());
        storage::write_file(&path.path(DataPathType::Setting), SETTINGS_FILE, "{nope")
            .expect("write");

        assert_eq!(
            SettingsHandler::new(&path).load(),
            ClickSettings::default()
        );
    }

    #[test]
    fn missing_field_uses_default() {
        let settings: ClickSettings = serde_json::from_str("{}").expect("parse");
        assert_eq!(settings.min_interval_ms, 200);
    }
}
