//! UI settings that persist across sessions.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::style::widgets::palette::ThemeMode;

/// Settings stored in `settings.json` beside the client config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Light or dark palette.
    pub theme_mode: ThemeMode,
}

impl AppSettings {
    /// Default location of the settings file.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mailroom")
            .join("settings.json")
    }

    /// Reads settings from `path`; a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
        };

        serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    /// Writes settings to `path`, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub async fn save(self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("creating {}", dir.display()))?;
        }

        let contents = serde_json::to_string_pretty(&self)?;
        tokio::fs::write(path, contents)
            .await
            .with_context(|| format!("writing {}", path.display()))?;

        tracing::info!("Settings saved to {:?}", path);
        Ok(())
    }
}
