//! I/O helpers for the demo binary.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an interleaved float image.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! The loader keeps raw 8-bit RGB values as floats in [0, 255]; color-space
//! conversion is left to the caller.
use super::MultiChannelImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as interleaved RGB floats.
pub fn load_rgb_image(path: &Path) -> Result<MultiChannelImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data: Vec<f32> = img.into_raw().into_iter().map(f32::from).collect();
    MultiChannelImage::from_vec(width, height, 3, data)
        .ok_or_else(|| format!("Decoded buffer size mismatch for {}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
