//! PNG preview of a layout's tile outlines

use std::path::Path;

use image::{ImageBuffer, Rgba};
use ndarray::Array2;

use crate::io::configuration::{MAX_PREVIEW_HEIGHT, MAX_PREVIEW_WIDTH};
use crate::io::error::{AlgorithmError, Result, ensure_directory, invalid_parameter};
use crate::spatial::{Canvas, GradientDirection, Tile};

/// Background color of the preview
const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// Outline color per direction, indexed by [`GradientDirection::index`]
pub const DIRECTION_COLORS: [[u8; 4]; 4] = [
    [214, 39, 40, 255],
    [44, 160, 44, 255],
    [255, 127, 14, 255],
    [31, 119, 180, 255],
];

/// Label grid value marking an outline of the given direction
const fn outline_label(direction: GradientDirection) -> u8 {
    direction.index() as u8 + 1
}

/// Preview size in pixels for a canvas drawn `width_px` wide
///
/// # Errors
///
/// Returns an error if the width is zero or above the preview limit, or if
/// the canvas aspect ratio scales the height past its limit
pub fn preview_size(canvas: &Canvas, width_px: u32) -> Result<(u32, u32)> {
    if width_px == 0 || width_px > MAX_PREVIEW_WIDTH {
        return Err(invalid_parameter(
            "preview_width",
            &width_px,
            &format!("must lie in 1..={MAX_PREVIEW_WIDTH}"),
        ));
    }

    let height = (canvas.height * f64::from(width_px) / canvas.width).round();
    if !height.is_finite() || height > f64::from(MAX_PREVIEW_HEIGHT) {
        return Err(invalid_parameter(
            "preview_width",
            &width_px,
            &format!("canvas would be {height} px tall, limit {MAX_PREVIEW_HEIGHT}"),
        ));
    }

    Ok((width_px, height.max(1.0) as u32))
}

/// Rasterize tile outlines into a label grid
///
/// Label 0 is background; label `k + 1` is an outline of the direction with
/// index `k`. Later tiles draw over earlier ones so nested rings stay
/// visible. Rows grow downward from the canvas origin.
///
/// # Errors
///
/// Returns an error if the preview size is out of range, see [`preview_size`]
pub fn rasterize_outlines(
    tiles: &[Tile],
    canvas: &Canvas,
    width_px: u32,
) -> Result<Array2<u8>> {
    let (width_px, height_px) = preview_size(canvas, width_px)?;
    let scale = f64::from(width_px) / canvas.width;
    let width_px = width_px as usize;
    let height_px = height_px as usize;
    let mut labels = Array2::zeros((height_px, width_px));

    let to_px = |value: f64, limit: usize| -> usize {
        let px = (value * scale).floor().max(0.0) as usize;
        px.min(limit.saturating_sub(1))
    };

    for tile in tiles {
        let label = outline_label(tile.direction);
        let left = to_px(tile.x, width_px);
        let right = to_px(tile.x + tile.width, width_px);
        let top = to_px(tile.y, height_px);
        let bottom = to_px(tile.y + tile.height, height_px);

        for col in left..=right {
            for row in [top, bottom] {
                if let Some(cell) = labels.get_mut([row, col]) {
                    *cell = label;
                }
            }
        }
        for row in top..=bottom {
            for col in [left, right] {
                if let Some(cell) = labels.get_mut([row, col]) {
                    *cell = label;
                }
            }
        }
    }

    Ok(labels)
}

/// Export a layout preview as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The layout holds no tiles
/// - The requested width or the resulting height is out of range
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_as_png(
    tiles: &[Tile],
    canvas: &Canvas,
    width_px: u32,
    output_path: &Path,
) -> Result<()> {
    if tiles.is_empty() {
        return Err(AlgorithmError::EmptyLayout);
    }
    let (width, height) = preview_size(canvas, width_px)?;
    let labels = rasterize_outlines(tiles, canvas, width_px)?;
    let mut img = ImageBuffer::new(width, height);

    for ((row, col), &label) in labels.indexed_iter() {
        let rgba = match label {
            0 => BACKGROUND,
            l => DIRECTION_COLORS
                .get(usize::from(l) - 1)
                .copied()
                .unwrap_or(BACKGROUND),
        };
        img.put_pixel(col as u32, row as u32, Rgba(rgba));
    }

    if let Some(parent) = output_path.parent() {
        ensure_directory(parent)?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
