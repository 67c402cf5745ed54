use crate::constants::{
    BANNER_TITLE, DEFAULT_INPUT_DIR, DEFAULT_TIERS, EXCLUDED_NAME_FRAGMENT, FOLDER_PREFIX,
    INFO_PREFIX, OUTPUT_DIR_NAME, SUCCESS_PREFIX, SUPPORTED_IMAGE_EXTENSIONS,
};
use crate::error::{OptimizeError, Result};
use crate::manifest::Manifest;
use crate::processing::{process_image, ProcessedImage};
use crate::tiers::SizeTier;
use crate::utils::banner_rule;
use crate::{error, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub tiers: Vec<SizeTier>,
}

impl OptimizeOptions {
    /// Options for `input_dir`; outputs go to `<input_dir>/optimized` unless
    /// `output_dir` is given.
    pub fn new(input_dir: PathBuf, output_dir: Option<PathBuf>) -> Self {
        let output_dir = output_dir.unwrap_or_else(|| input_dir.join(OUTPUT_DIR_NAME));
        Self {
            input_dir,
            output_dir,
            tiers: DEFAULT_TIERS.to_vec(),
        }
    }

    pub fn with_tiers(mut self, tiers: Vec<SizeTier>) -> Self {
        self.tiers = tiers;
        self
    }
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_INPUT_DIR), None)
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub processed: Vec<ProcessedImage>,
    pub failed: Vec<(PathBuf, String)>,
    pub manifest_path: PathBuf,
}

/// Creates the output root and one directory per tier. Safe to call on an
/// existing layout.
pub fn ensure_output_directories(output_dir: &Path, tiers: &[SizeTier]) -> Result<()> {
    create_dir(output_dir)?;
    for tier in tiers {
        create_dir(&output_dir.join(tier.name))?;
    }

    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| OptimizeError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source,
    })
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

fn is_previous_output(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains(EXCLUDED_NAME_FRAGMENT))
        .unwrap_or(false)
}

/// Source images directly inside `input_dir`, sorted by path.
///
/// Subdirectories are not descended into and files whose name contains
/// `optimized` are skipped.
pub fn collect_image_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(OptimizeError::InputDirectoryNotFound(input_dir.to_path_buf()));
    }

    let mut image_files = Vec::new();
    for entry in WalkDir::new(input_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_image_file(path) && !is_previous_output(path) {
            image_files.push(path.to_path_buf());
        }
    }

    image_files.sort();
    Ok(image_files)
}

fn print_banner() {
    info!("{}", banner_rule());
    info!("{}", BANNER_TITLE);
    info!("{}", banner_rule());
    info!("");
}

fn print_summary(summary: &RunSummary, output_dir: &Path, elapsed: std::time::Duration) {
    info!("{}", banner_rule());
    info!("{} Optimization complete!", SUCCESS_PREFIX);
    info!("Processed: {} images", summary.processed.len());
    if !summary.failed.is_empty() {
        info!("Failed: {} images", summary.failed.len());
    }
    info!("{} Output: {}", FOLDER_PREFIX, output_dir.display());
    info!("Time: {:.2?}", elapsed);
    info!("");
    info!("{} Next steps:", INFO_PREFIX);
    info!("1. Update HTML to use srcset with optimized images");
    info!("2. Use <picture> element for WebP with JPEG fallback");
    info!("{}", banner_rule());
}

/// Runs the whole pass: directories, discovery, every image, manifest.
///
/// Setup, discovery and manifest failures abort the run. A failing image is
/// logged, left out of the manifest and the run moves on.
pub fn run(options: &OptimizeOptions) -> Result<RunSummary> {
    let start_time = Instant::now();
    print_banner();

    // Checked before setup: the default output lives inside the input and
    // create_dir_all would otherwise conjure the input directory.
    if !options.input_dir.is_dir() {
        return Err(OptimizeError::InputDirectoryNotFound(options.input_dir.clone()));
    }
    ensure_output_directories(&options.output_dir, &options.tiers)?;

    let image_files = collect_image_files(&options.input_dir)?;
    info!("Found {} images to process\n", image_files.len());

    let mut processed: Vec<ProcessedImage> = Vec::with_capacity(image_files.len());
    let mut failed = Vec::new();
    let mut claimed: HashMap<String, String> = HashMap::new();

    for input_path in &image_files {
        match process_image(input_path, &options.output_dir, &options.tiers) {
            Ok(image) => {
                if image.sanitized.is_empty() {
                    warn!(
                        "{} has no usable characters; outputs are named '.webp'/'.jpg'",
                        image.original
                    );
                }
                let previous = claimed.insert(image.sanitized.clone(), image.original.clone());
                if let Some(previous) = previous {
                    warn!(
                        "{} and {} both map to '{}'; the later one overwrote the outputs",
                        previous, image.original, image.sanitized
                    );
                }
                processed.push(image);
                info!("");
            }
            Err(e) => {
                let name = input_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| input_path.display().to_string());
                error!("Error processing {}: {}", name, e);
                failed.push((input_path.clone(), e.to_string()));
            }
        }
    }

    let manifest = Manifest::new(&processed, &options.tiers);
    let manifest_path = manifest.save(&options.output_dir)?;
    info!("\nManifest saved to: {}", manifest_path.display());

    let summary = RunSummary {
        processed,
        failed,
        manifest_path,
    };
    print_summary(&summary, &options.output_dir, start_time.elapsed());

    Ok(summary)
}
