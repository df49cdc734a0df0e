use serde::{Deserialize, Serialize};

/// User-tunable settings, persisted through eframe's storage.
///
/// Only these settings survive a restart; the todo list itself starts fresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct AppConfig {
    /// Random items generated at startup
    pub seed_items: usize,
    /// How long the add/remove notice stays visible, in seconds
    pub notice_secs: f32,
    pub show_debug_window: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_items: 3,
            notice_secs: 2.0,
            show_debug_window: false,
        }
    }
}

impl AppConfig {
    /// Loads the saved config, falling back to defaults
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default()
    }

    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
