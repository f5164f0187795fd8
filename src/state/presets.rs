//! Team presets offered when creating a match, persisted to a flat JSON file.

use std::{
    fs, io,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

/// Reusable team name and logo pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamPreset {
    pub name: String,
    pub logo: String,
}

impl TeamPreset {
    /// Build a preset from its name and logo URL.
    pub fn new(name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: logo.into(),
        }
    }
}

/// Append-only preset list mirrored to disk after every change.
#[derive(Debug)]
pub struct TeamPresetStore {
    path: PathBuf,
    presets: Vec<TeamPreset>,
}

impl TeamPresetStore {
    /// Load presets from `path`.
    ///
    /// A missing file is seeded with the built-in presets. Unreadable or malformed files are
    /// logged and replaced in memory by the built-in presets, leaving the file as it is.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let presets = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Vec<TeamPreset>>(&contents) {
                Ok(presets) => {
                    info!(
                        path = %path.display(),
                        count = presets.len(),
                        "loaded team presets"
                    );
                    presets
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse team presets; falling back to defaults"
                    );
                    default_presets()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "team presets file not found; seeding built-in defaults"
                );
                let presets = default_presets();
                if let Err(err) = write_presets(&path, &presets) {
                    warn!(path = %path.display(), error = %err, "failed to write team presets");
                }
                presets
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read team presets; falling back to defaults"
                );
                default_presets()
            }
        };

        Self { path, presets }
    }

    /// Presets in the order they were added.
    pub fn list(&self) -> &[TeamPreset] {
        &self.presets
    }

    /// File backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a preset and rewrite the backing file with the whole list.
    ///
    /// Duplicate names are accepted. A failed write is logged; the in-memory append stands.
    pub async fn add(&mut self, preset: TeamPreset) -> TeamPreset {
        self.presets.push(preset.clone());
        if let Err(err) = self.save().await {
            warn!(path = %self.path.display(), error = %err, "failed to save team presets");
        }
        preset
    }

    async fn save(&self) -> io::Result<()> {
        let payload = serde_json::to_string_pretty(&self.presets)?;
        tokio::fs::write(&self.path, payload).await
    }
}

fn write_presets(path: &Path, presets: &[TeamPreset]) -> io::Result<()> {
    let payload = serde_json::to_string_pretty(presets)?;
    fs::write(path, payload)
}

/// Presets shipped with the binary.
pub fn default_presets() -> Vec<TeamPreset> {
    vec![
        TeamPreset::new(
            "Real Madrid",
            "https://upload.wikimedia.org/wikipedia/en/thumb/5/56/Real_Madrid_CF.svg/1200px-Real_Madrid_CF.svg.png",
        ),
        TeamPreset::new(
            "Barcelona",
            "https://upload.wikimedia.org/wikipedia/en/thumb/4/47/FC_Barcelona_%28crest%29.svg/1200px-FC_Barcelona_%28crest%29.svg.png",
        ),
        TeamPreset::new(
            "Man Utd",
            "https://upload.wikimedia.org/wikipedia/en/thumb/7/7a/Manchester_United_FC_crest.svg/1200px-Manchester_United_FC_crest.svg.png",
        ),
        TeamPreset::new(
            "Liverpool",
            "https://upload.wikimedia.org/wikipedia/en/thumb/0/0c/Liverpool_FC.svg/1200px-Liverpool_FC.svg.png",
        ),
        TeamPreset::new(
            "Bayern Munich",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/1/1b/FC_Bayern_M%C3%BCnchen_logo_%282017%29.svg/1200px-FC_Bayern_M%C3%BCnchen_logo_%282017%29.svg.png",
        ),
        TeamPreset::new(
            "Dortmund",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/6/67/Borussia_Dortmund_logo.svg/1200px-Borussia_Dortmund_logo.svg.png",
        ),
    ]
}
