use crate::constants::{MAX_FILE_SIZE, MAX_PIXELS};
use crate::error::{OptimizeError, Result};
use crate::formats::OutputFormat;
use crate::sanitize::sanitize_filename;
use crate::tiers::{proportional_height, SizeTier};
use crate::utils::{create_progress_spinner, format_file_size, format_kilobytes};
use crate::{info, verbose};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageDecoder, ImageReader, Rgb, RgbImage, Rgba};
use indicatif::ProgressBar;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Files written for one tier of one source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierOutput {
    pub tier: SizeTier,
    pub width: u32,
    pub height: u32,
    pub webp_size: u64,
    pub jpeg_size: u64,
}

/// A source image that made it through every tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedImage {
    pub original: String,
    pub sanitized: String,
    pub outputs: Vec<TierOutput>,
}

/// Rejects images whose total pixel count exceeds [`MAX_PIXELS`]. Extreme
/// aspect ratios are fine as long as the area fits.
pub fn check_pixel_limit(width: u32, height: u32) -> Result<()> {
    let pixels = width as u64 * height as u64;
    if pixels > MAX_PIXELS {
        return Err(OptimizeError::PixelLimitExceeded(width, height, MAX_PIXELS));
    }
    Ok(())
}

/// Loads an image file, upright, and returns it along with its file size.
///
/// # Arguments
/// * `input_path` - Path to the image file to load
///
/// # Returns
/// * `Ok((image, file_size))` - The decoded image with its EXIF orientation
///   applied, and the file size in bytes
/// * `Err(OptimizeError)` - If loading fails or size limits are exceeded
///
/// The file size and header pixel count are checked before any pixel data is
/// decoded.
pub fn load_image_with_metadata(input_path: &Path) -> Result<(DynamicImage, u64)> {
    let file_size = fs::metadata(input_path)?.len();
    if file_size > MAX_FILE_SIZE {
        return Err(OptimizeError::FileTooLarge(file_size, MAX_FILE_SIZE));
    }

    let mut reader = ImageReader::open(input_path)?.with_guessed_format()?;
    // The pixel limit below replaces the decoder's allocation cap.
    reader.no_limits();
    let mut decoder = reader.into_decoder()?;

    let (width, height) = decoder.dimensions();
    check_pixel_limit(width, height)?;

    let orientation = decoder.orientation()?;
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);

    Ok((img, file_size))
}

/// Scales `img` down to `target_width`, keeping the aspect ratio.
/// Images already at or below the target are borrowed untouched.
pub fn resize_to_width(img: &DynamicImage, target_width: u32) -> Cow<'_, DynamicImage> {
    let (width, height) = img.dimensions();
    if target_width == 0 || target_width >= width {
        return Cow::Borrowed(img);
    }

    let target_height = proportional_height(width, height, target_width);
    Cow::Owned(img.resize_exact(target_width, target_height, FilterType::Lanczos3))
}

/// Lossy WebP. Alpha is preserved when the source has it.
pub fn encode_webp(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();

    let has_alpha = img.color().has_alpha();

    let pixels = if has_alpha {
        img.to_rgba8().into_raw()
    } else {
        img.to_rgb8().into_raw()
    };
    let encoder = if has_alpha {
        webp::Encoder::from_rgba(&pixels, width, height)
    } else {
        webp::Encoder::from_rgb(&pixels, width, height)
    };

    let encoded = encoder
        .encode_simple(false, quality as f32)
        .map_err(|e| OptimizeError::WebPEncoding(format!("{:?}", e)))?;

    Ok(encoded.to_vec())
}

/// Composites any alpha channel onto black so colour hidden under
/// transparent pixels never shows up in the JPEG.
pub fn flatten_onto_black(img: &DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }

    let rgba = img.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        let scale = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
        Rgb([scale(r), scale(g), scale(b)])
    })
}

/// Progressive JPEG. Transparent areas are flattened onto black.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = flatten_onto_black(img);
    let (width, height) = rgb.dimensions();

    let max = u16::MAX as u32;
    let (w, h) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(OptimizeError::InvalidDimensions(width, height, max)),
    };

    let mut buffer = Vec::new();
    let mut encoder = jpeg_encoder::Encoder::new(&mut buffer, quality.max(1));
    encoder.set_progressive(true);
    encoder.encode(&rgb, w, h, jpeg_encoder::ColorType::Rgb)?;

    Ok(buffer)
}

/// Encodes `img` as `format` and writes it to `output_path`, replacing any
/// existing file. Returns the number of bytes written.
pub fn save_variant(
    img: &DynamicImage,
    output_path: &Path,
    format: OutputFormat,
    quality: u8,
) -> Result<u64> {
    let bytes = match format {
        OutputFormat::WebP => encode_webp(img, quality)?,
        OutputFormat::Jpeg => encode_jpeg(img, quality)?,
    };

    fs::write(output_path, &bytes)?;
    Ok(bytes.len() as u64)
}

fn encode_tier(
    img: &DynamicImage,
    tier: &SizeTier,
    tier_dir: &Path,
    stem: &str,
    spinner: &ProgressBar,
) -> Result<TierOutput> {
    spinner.set_message(format!("Encoding {}...", tier));

    let resized = resize_to_width(img, tier.target_width(img.width()));
    let (width, height) = resized.dimensions();

    let mut sizes = [0u64; 2];
    for (size, format) in sizes.iter_mut().zip(OutputFormat::all_formats()) {
        let output_path = format.output_path(tier_dir, stem);
        *size = save_variant(&resized, &output_path, format, tier.quality)?;
    }
    let [webp_size, jpeg_size] = sizes;

    spinner.suspend(|| {
        info!(
            "  {}: {} {}, {} {}",
            tier.name,
            OutputFormat::WebP,
            format_kilobytes(webp_size),
            OutputFormat::Jpeg,
            format_kilobytes(jpeg_size)
        );
        verbose!(
            "{}x{} -> {}.{{webp,jpg}}",
            width,
            height,
            tier_dir.join(stem).display()
        );
    });

    Ok(TierOutput {
        tier: *tier,
        width,
        height,
        webp_size,
        jpeg_size,
    })
}

/// Produces every tier of one source image under `output_root/<tier>/`.
///
/// Tier directories must already exist. The source is decoded once; each
/// tier is resized from the upright original. Any failure aborts this image
/// and leaves whatever files were already written in place.
pub fn process_image(
    input_path: &Path,
    output_root: &Path,
    tiers: &[SizeTier],
) -> Result<ProcessedImage> {
    let original = input_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let sanitized = sanitize_filename(&original);

    info!("Processing: {} -> {}", original, sanitized);

    let (img, file_size) = load_image_with_metadata(input_path)?;
    verbose!(
        "Source: {}x{} ({})",
        img.width(),
        img.height(),
        format_file_size(file_size)
    );

    let spinner = create_progress_spinner("Encoding...");
    let outputs = tiers
        .iter()
        .map(|tier| encode_tier(&img, tier, &output_root.join(tier.name), &sanitized, &spinner))
        .collect::<Result<Vec<_>>>();
    spinner.finish_and_clear();

    Ok(ProcessedImage {
        original,
        sanitized,
        outputs: outputs?,
    })
}
