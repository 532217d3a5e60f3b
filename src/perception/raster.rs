use std::path::Path;

use image::GrayImage;

use crate::core::{Cell, Grid, GlyphError, Result, BACKGROUND, FOREGROUND};

pub const DEFAULT_THRESHOLD: u8 = 127;

/// Inverted fixed threshold: dark pixels (luma <= `threshold`) are ink.
pub fn binarize(img: &GrayImage, threshold: u8) -> Result<Grid> {
    let (width, height) = img.dimensions();
    let cells: Vec<Cell> = img.pixels()
        .map(|p| if p.0[0] <= threshold { FOREGROUND } else { BACKGROUND })
        .collect();
    Grid::from_flat(width as usize, height as usize, &cells)
}

/// Decodes an image file to 8-bit luma and binarizes it.
pub fn load_binary_image(path: &Path, threshold: u8) -> Result<Grid> {
    let img = image::open(path)
        .map_err(|e| GlyphError::Image(format!("{}: {}", path.display(), e)))?;
    let gray = img.to_luma8();
    log::debug!("decoded {} ({}x{})", path.display(), gray.width(), gray.height());
    binarize(&gray, threshold)
}

pub fn is_image_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    matches!(
        ext.to_ascii_lowercase().as_str(),
        "png" | "jpg" | "jpeg" | "bmp" | "gif" | "tif" | "tiff" | "webp"
    )
}
