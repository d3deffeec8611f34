//! Persistence model and configuration IO.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{KlokError, KlokResult};

/// File name used under the per-user config directory.
const PREFS_FILE: &str = "klok.json";

/// Resolve the per-user config directory (also the root for user themes).
pub fn config_dir() -> KlokResult<PathBuf> {
    let proj_dirs = ProjectDirs::from("dev", "klok", "klok")
        .ok_or_else(|| KlokError::config("cannot determine config directory"))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

/// Default preferences file path, creating the config directory on demand.
///
/// Directory creation failure is a fatal startup error at the caller.
pub fn default_prefs_path() -> KlokResult<PathBuf> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("create config directory '{}'", dir.display()))?;
    Ok(dir.join(PREFS_FILE))
}

/// Preferences persisted between runs: window size, theme and refresh rate.
///
/// Loaded at startup (an absent file means defaults, anything else that
/// fails is an error the caller treats as fatal) and written back at
/// shutdown with the window's final dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefs {
    /// Initial window width in pixels.
    pub width: u32,
    /// Initial window height in pixels.
    pub height: u32,
    /// Theme name, resolved under the selected themes root.
    pub theme: String,
    /// Redraw rate in Hz.
    pub hz: u32,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            theme: "default".to_string(),
            hz: 10,
        }
    }
}

impl Prefs {
    /// Load preferences from the default per-user path.
    pub fn load() -> KlokResult<Self> {
        Self::load_from(&default_prefs_path()?)
    }

    /// Load preferences from `path`; an absent file yields defaults, an
    /// unreadable or malformed file is an error.
    pub fn load_from(path: &Path) -> KlokResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(KlokError::config(format!(
                    "read '{}': {err}",
                    path.display()
                )));
            }
        };
        let prefs: Self = serde_json::from_str(&contents).map_err(|err| {
            KlokError::config(format!("parse '{}': {err}", path.display()))
        })?;
        Ok(prefs.sanitized())
    }

    /// Persist preferences to the default per-user path.
    pub fn save(&self) -> KlokResult<()> {
        self.save_to(&default_prefs_path()?)
    }

    /// Persist preferences to `path` as pretty JSON.
    pub fn save_to(&self, path: &Path) -> KlokResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                KlokError::config(format!("create '{}': {err}", parent.display()))
            })?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|err| KlokError::config(format!("serialize prefs: {err}")))?;
        fs::write(path, contents)
            .map_err(|err| KlokError::config(format!("write '{}': {err}", path.display())))
    }

    /// Interval between redraw ticks (`1000 / hz` milliseconds).
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.hz.max(1)))
    }

    /// Replace zero or empty fields with their defaults, like the stored
    /// config of older versions that wrote unset keys as zero.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.width == 0 {
            self.width = defaults.width;
        }
        if self.height == 0 {
            self.height = defaults.height;
        }
        if self.hz == 0 {
            self.hz = defaults.hz;
        }
        if self.theme.is_empty() {
            self.theme = defaults.theme;
        }
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/prefs.rs"]
mod tests;
