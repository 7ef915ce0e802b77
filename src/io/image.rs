//! PNG export of grids and decompositions using the puzzle palette

use image::{Rgb, RgbImage};
use std::path::Path;

use crate::io::configuration::{PALETTE, PNG_CELL_SCALE, UNCLAIMED_RGB, UNKNOWN_COLOR_RGB};
use crate::io::error::{GridsplitError, Result, file_system};
use crate::spatial::{Color, Coord, Grid, Pattern, Shape};

/// RGB value for a palette color
pub fn color_rgb(color: Color) -> [u8; 3] {
    PALETTE
        .get(usize::from(color))
        .copied()
        .unwrap_or(UNKNOWN_COLOR_RGB)
}

// Paint one scaled panel whose top-left pixel column is `x_offset`
fn paint_panel(
    image: &mut RgbImage,
    x_offset: u32,
    shape: Shape,
    color_at: impl Fn(Coord) -> Option<Color>,
) {
    for coord in shape.coords() {
        let rgb = color_at(coord).map_or(UNCLAIMED_RGB, color_rgb);
        let left = x_offset + coord.col as u32 * PNG_CELL_SCALE;
        let top = coord.row as u32 * PNG_CELL_SCALE;
        for dy in 0..PNG_CELL_SCALE {
            for dx in 0..PNG_CELL_SCALE {
                image.put_pixel(left + dx, top + dy, Rgb(rgb));
            }
        }
    }
}

/// Render a grid, one square per cell
pub fn render_grid(grid: &Grid) -> RgbImage {
    let shape = grid.shape();
    let mut image = RgbImage::from_pixel(
        shape.cols as u32 * PNG_CELL_SCALE,
        shape.rows as u32 * PNG_CELL_SCALE,
        Rgb(UNCLAIMED_RGB),
    );
    paint_panel(&mut image, 0, shape, |coord| grid.color_at(coord));
    image
}

/// Render a grid followed by each of its patterns, left to right
///
/// Panels are separated by one blank cell. Unclaimed pattern cells are blank.
pub fn render_decomposition(grid: &Grid, patterns: &[Pattern]) -> RgbImage {
    let shape = grid.shape();
    let panel_width = shape.cols as u32 * PNG_CELL_SCALE;
    let stride = panel_width + PNG_CELL_SCALE;
    let panels = 1 + patterns.len() as u32;

    let mut image = RgbImage::from_pixel(
        stride * panels - PNG_CELL_SCALE,
        shape.rows as u32 * PNG_CELL_SCALE,
        Rgb(UNCLAIMED_RGB),
    );
    paint_panel(&mut image, 0, shape, |coord| grid.color_at(coord));
    for (index, pattern) in patterns.iter().enumerate() {
        let x_offset = stride * (index as u32 + 1);
        paint_panel(&mut image, x_offset, shape, |coord| pattern.get(coord));
    }
    image
}

/// Save a rendered image as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot be
/// written
pub fn save_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system(parent, "create directory", e))?;
    }

    image
        .save(output_path)
        .map_err(|e| GridsplitError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
