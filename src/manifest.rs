use crate::constants::MANIFEST_FILE_NAME;
use crate::error::Result;
use crate::processing::ProcessedImage;
use crate::tiers::{tier_names, SizeTier};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub original: String,
    pub optimized: String,
    pub sizes: Vec<String>,
}

/// Index of every image written by a run, consumed by the site build to
/// emit `srcset` / `<picture>` markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// ISO-8601 UTC, millisecond precision
    pub generated: String,
    pub images: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(processed: &[ProcessedImage], tiers: &[SizeTier]) -> Self {
        Self::generated_at(Utc::now(), processed, tiers)
    }

    pub fn generated_at(
        timestamp: DateTime<Utc>,
        processed: &[ProcessedImage],
        tiers: &[SizeTier],
    ) -> Self {
        let sizes = tier_names(tiers);
        let images = processed
            .iter()
            .map(|image| ManifestEntry {
                original: image.original.clone(),
                optimized: image.sanitized.clone(),
                sizes: sizes.clone(),
            })
            .collect();

        Self {
            generated: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            images,
        }
    }

    pub fn manifest_path(output_root: &Path) -> PathBuf {
        output_root.join(MANIFEST_FILE_NAME)
    }

    /// Writes `manifest.json` into `output_root`, replacing any previous one.
    pub fn save(&self, output_root: &Path) -> Result<PathBuf> {
        let path = Self::manifest_path(output_root);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
