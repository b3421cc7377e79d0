//! Seed spots a new process starts with.
//!
//! Seeds can be overridden with a YAML file of the form:
//!
//! ```yaml
//! spots:
//!   - name: Halistenkoski
//!     latitude: 60.465071
//!     longitude: 22.302923
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spot_common::Spot;
use std::path::Path;

/// Built-in demo spots in the Turku archipelago.
pub fn default_seed_spots() -> Vec<Spot> {
    vec![
        Spot::new(60.465071, 22.302923, "Halistenkoski"),
        Spot::new(60.479928, 21.328347, "Kustavi"),
        Spot::new(60.124169, 21.906335, "Kirjais"),
    ]
}

/// Seed spot list, as loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub spots: Vec<Spot>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            spots: default_seed_spots(),
        }
    }
}

impl SeedConfig {
    /// Load seeds from a YAML file.
    ///
    /// A missing file falls back to the built-in seeds. An unreadable or
    /// malformed file is an error, as is a spot with unusable coordinates.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                "Seed file {} does not exist, using built-in spots",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;

        let config: SeedConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse seed spots: {:?}", path))?;

        for (index, spot) in config.spots.iter().enumerate() {
            spot.validate().with_context(|| {
                format!("Invalid seed spot #{} '{}' in {:?}", index, spot.name, path)
            })?;
        }

        tracing::info!("Loaded {} seed spots from {:?}", config.spots.len(), path);

        Ok(config)
    }

    pub fn into_spots(self) -> Vec<Spot> {
        self.spots
    }
}
