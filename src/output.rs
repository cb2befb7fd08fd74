//! Saving rendered frames to disk

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;

fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}

/// Encode `img` as PNG at `path`, creating the parent directory if needed
pub fn save_rgba(img: &RgbaImage, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        log::warn!("Output directory {} does not exist, creating it", parent.display());
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_png(io::BufWriter::new(file), img)
        .with_context(|| format!("Failed to encode PNG: {}", path.display()))?;
    Ok(())
}

/// Timestamped file in the user's Pictures folder (or the working directory)
pub fn default_output_path() -> PathBuf {
    let mut path = dirs::picture_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join("Pictures")))
        .unwrap_or_else(|| PathBuf::from("."));
    let name = chrono::Local::now()
        .format("HollowCube_%Y-%m-%d_%H-%M-%S.png")
        .to_string();
    path.push(name);
    path
}
