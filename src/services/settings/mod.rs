//! Settings persistence backed by a TOML file.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service pointing at the platform config directory.
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "RustCalendar", "CalendarEngine") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::warn!(
                "Settings file {} not found; using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&text)
            .with_context(|| format!("Failed to parse settings file {}", self.path.display()))?;

        validate(&settings).map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        validate(settings).map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }

        let text = toml::to_string_pretty(settings).context("Failed to serialise settings")?;
        std::fs::write(&self.path, text).context("Failed to write settings file")?;
        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

fn validate(settings: &Settings) -> Result<(), String> {
    let agenda = &settings.agenda;
    if agenda.header_height < 0.0 || agenda.item_height <= 0.0 || agenda.group_spacing < 0.0 {
        return Err("Agenda sizes must be non-negative and item height positive".to_string());
    }
    if settings.default_event_minutes <= 0 {
        return Err("Default event duration must be positive".to_string());
    }
    Ok(())
}
