//! Utility functions for common operations
//!
//! Console formatting helpers shared by the run loop and per-image
//! processing.

use crate::constants::{BANNER_WIDTH, PROGRESS_SPINNER_TEMPLATE};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a progress spinner with consistent styling
///
/// Returns a hidden spinner in quiet mode so callers never have to branch.
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    if crate::logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Whole kilobytes, rounded to nearest: `1536` -> `"2KB"`.
pub fn format_kilobytes(bytes: u64) -> String {
    format!("{}KB", (bytes as f64 / 1024.0).round() as u64)
}

/// Format file size in human-readable format
///
/// # Returns
/// * Human-readable size string (e.g., "1.2 MB", "512 B")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

pub fn banner_rule() -> String {
    "=".repeat(BANNER_WIDTH)
}
