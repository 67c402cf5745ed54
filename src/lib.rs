pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod manifest;
pub mod processing;
pub mod sanitize;
pub mod tiers;
pub mod utils;

pub use batch::{
    collect_image_files, ensure_output_directories, is_image_file, run, OptimizeOptions,
    RunSummary,
};
pub use error::{OptimizeError, Result};
pub use formats::OutputFormat;
pub use manifest::{Manifest, ManifestEntry};
pub use processing::{
    encode_jpeg, encode_webp, load_image_with_metadata, process_image, resize_to_width,
    save_variant, ProcessedImage, TierOutput,
};
pub use sanitize::sanitize_filename;
pub use tiers::SizeTier;
