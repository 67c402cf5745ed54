//! Output format handling
//!
//! Every tier is written twice: a WebP for browsers that support it and a
//! progressive JPEG fallback.

use std::fmt;
use std::path::{Path, PathBuf};

/// Supported output image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossy WebP
    WebP,
    /// Progressive JPEG
    Jpeg,
}

impl OutputFormat {
    /// Returns the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::WebP => "webp",
            OutputFormat::Jpeg => "jpg",
        }
    }

    /// Formats in the order they are written for each tier
    pub fn all_formats() -> [OutputFormat; 2] {
        [OutputFormat::WebP, OutputFormat::Jpeg]
    }

    /// `<tier_dir>/<stem>.<ext>`
    pub fn output_path(&self, tier_dir: &Path, stem: &str) -> PathBuf {
        tier_dir.join(format!("{}.{}", stem, self.extension()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::WebP => "WebP",
            OutputFormat::Jpeg => "JPEG",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::WebP.extension(), "webp");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(format!("{}", OutputFormat::WebP), "WebP");
        assert_eq!(format!("{}", OutputFormat::Jpeg), "JPEG");
    }

    #[test]
    fn test_all_formats_webp_first() {
        assert_eq!(
            OutputFormat::all_formats(),
            [OutputFormat::WebP, OutputFormat::Jpeg]
        );
    }

    #[test]
    fn test_output_path() {
        let dir = Path::new("/tmp/optimized/thumb");
        assert_eq!(
            OutputFormat::WebP.output_path(dir, "my-photo-1"),
            PathBuf::from("/tmp/optimized/thumb/my-photo-1.webp")
        );
        assert_eq!(
            OutputFormat::Jpeg.output_path(dir, "my-photo-1"),
            PathBuf::from("/tmp/optimized/thumb/my-photo-1.jpg")
        );
    }
}
