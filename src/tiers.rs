//! Size tier definitions
//!
//! A tier is one responsive breakpoint: every source image gets a WebP and a
//! JPEG variant capped at the tier's width and encoded at the tier's quality.

use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use crate::error::{OptimizeError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeTier {
    pub name: &'static str,
    pub width: u32,
    pub quality: u8,
}

impl SizeTier {
    /// Validated constructor for tiers built at runtime.
    pub fn new(name: &'static str, width: u32, quality: u8) -> Result<Self> {
        if name.is_empty() {
            return Err(OptimizeError::InvalidTier(
                name.to_string(),
                "name must not be empty".to_string(),
            ));
        }
        if width == 0 {
            return Err(OptimizeError::InvalidTier(
                name.to_string(),
                "width must be greater than zero".to_string(),
            ));
        }
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(OptimizeError::InvalidQuality(quality));
        }

        Ok(Self::fixed(name, width, quality))
    }

    pub(crate) const fn fixed(name: &'static str, width: u32, quality: u8) -> Self {
        Self {
            name,
            width,
            quality,
        }
    }

    /// Width this tier produces for a source of `natural_width` pixels.
    /// Never larger than the source.
    pub fn target_width(&self, natural_width: u32) -> u32 {
        self.width.min(natural_width)
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}px, q{})", self.name, self.width, self.quality)
    }
}

pub fn tier_names(tiers: &[SizeTier]) -> Vec<String> {
    tiers.iter().map(|tier| tier.name.to_string()).collect()
}

/// Height that keeps the aspect ratio when `width x height` is scaled to
/// `target_width`.
pub fn proportional_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 || target_width == width {
        return height;
    }
    let scaled = (height as f64 * target_width as f64 / width as f64).round() as u32;
    scaled.max(1)
}
