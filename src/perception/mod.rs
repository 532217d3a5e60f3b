pub mod grid;
pub mod raster;

use std::path::Path;

use crate::core::{Grid, Result};

/// Loads any supported input: image files are decoded and thresholded,
/// everything else is read as a grid file.
pub fn load_input(path: &Path, threshold: u8) -> Result<Grid> {
    if raster::is_image_file(path) {
        raster::load_binary_image(path, threshold)
    } else {
        grid::load_grid(path)
    }
}
