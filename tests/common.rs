#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn gradient(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient(width, height)
        .write_to(&mut fs::File::create(&path).unwrap(), ImageFormat::Png)
        .unwrap();
    path
}

pub fn write_transparent_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = RgbaImage::from_fn(width, height, |x, _| Rgba([200, 10, 10, (x % 256) as u8]));
    DynamicImage::ImageRgba8(img)
        .write_to(&mut fs::File::create(&path).unwrap(), ImageFormat::Png)
        .unwrap();
    path
}

pub fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, jpeg_bytes(width, height)).unwrap();
    path
}

/// A JPEG carrying an APP1 EXIF segment with only an orientation tag.
pub fn write_jpeg_with_orientation(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    orientation: u16,
) -> PathBuf {
    let jpeg = jpeg_bytes(width, height);

    let mut payload = Vec::new();
    payload.extend_from_slice(b"Exif\0\0");
    payload.extend_from_slice(b"MM\0\x2a"); // big-endian TIFF header
    payload.extend_from_slice(&8u32.to_be_bytes()); // first IFD offset
    payload.extend_from_slice(&1u16.to_be_bytes()); // one entry
    payload.extend_from_slice(&0x0112u16.to_be_bytes()); // Orientation
    payload.extend_from_slice(&3u16.to_be_bytes()); // SHORT
    payload.extend_from_slice(&1u32.to_be_bytes()); // count
    payload.extend_from_slice(&orientation.to_be_bytes());
    payload.extend_from_slice(&[0, 0]);
    payload.extend_from_slice(&0u32.to_be_bytes()); // no next IFD

    let mut bytes = Vec::with_capacity(jpeg.len() + payload.len() + 4);
    bytes.extend_from_slice(&jpeg[..2]); // SOI
    bytes.extend_from_slice(&[0xFF, 0xE1]);
    bytes.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    bytes.extend_from_slice(&payload);
    bytes.extend_from_slice(&jpeg[2..]);

    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    gradient(width, height)
        .write_to(&mut cursor, ImageFormat::Jpeg)
        .unwrap();
    cursor.into_inner()
}

pub fn write_fake_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"fake image data").unwrap();
    path
}

/// Every file name (not directory) under `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
