use crate::tiers::SizeTier;

pub const MIN_QUALITY: u8 = 0;
pub const MAX_QUALITY: u8 = 100;

/// Responsive breakpoints produced for every source image, smallest first.
pub const DEFAULT_TIERS: [SizeTier; 4] = [
    SizeTier::fixed("thumb", 400, 80),
    SizeTier::fixed("medium", 800, 82),
    SizeTier::fixed("large", 1200, 85),
    SizeTier::fixed("full", 2000, 88),
];

pub const DEFAULT_INPUT_DIR: &str = "portfolio";
pub const OUTPUT_DIR_NAME: &str = "optimized";
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

// Files whose name contains this fragment are previous outputs, never sources.
pub const EXCLUDED_NAME_FRAGMENT: &str = "optimized";

pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
// Same ceiling libvips applies by default: 0x3FFF squared.
pub const MAX_PIXELS: u64 = 0x3FFF * 0x3FFF;

pub const BANNER_WIDTH: usize = 50;
pub const BANNER_TITLE: &str = "Image Tier Optimization";
pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const INFO_PREFIX: &str = "📋";
pub const FOLDER_PREFIX: &str = "📁";
