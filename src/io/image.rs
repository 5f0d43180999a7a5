//! Pixel sampling from source photographs and PNG export of generated rasters

use crate::io::error::{CamoError, Result, invalid_parameter, invalid_source_data};
use crate::spatial::canvas::Canvas;
use image::imageops::FilterType;
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Fractional crop window applied before downscaling
///
/// All four edges are fractions of the source dimensions. Cropping focuses
/// sampling on the subject and keeps backdrop colors out of the palette.
#[derive(Debug, Clone, Copy)]
pub struct CropWindow {
    /// Left edge fraction
    pub left: f64,
    /// Top edge fraction
    pub top: f64,
    /// Right edge fraction
    pub right: f64,
    /// Bottom edge fraction
    pub bottom: f64,
}

impl CropWindow {
    /// Validate and build a crop window
    ///
    /// # Errors
    ///
    /// Returns an error unless 0 ≤ left < right ≤ 1 and 0 ≤ top < bottom ≤ 1.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Result<Self> {
        let horizontal_valid = (0.0..1.0).contains(&left) && left < right && right <= 1.0;
        let vertical_valid = (0.0..1.0).contains(&top) && top < bottom && bottom <= 1.0;
        if !horizontal_valid || !vertical_valid {
            return Err(invalid_parameter(
                "crop",
                &format!("{left} {top} {right} {bottom}"),
                &"crop edges must satisfy 0 <= left < right <= 1 and 0 <= top < bottom <= 1",
            ));
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }
}

/// Load an image and reduce it to a flat list of normalized RGB samples
///
/// The source is optionally cropped, then downscaled to a square
/// `sample_size` raster so clustering cost stays independent of the source
/// resolution.
///
/// # Errors
///
/// Returns an error if `sample_size` is zero or the file cannot be opened
/// and decoded.
pub fn sample_pixels<P: AsRef<Path>>(
    path: P,
    crop: Option<CropWindow>,
    sample_size: u32,
) -> Result<Vec<[f64; 3]>> {
    if sample_size == 0 {
        return Err(invalid_parameter(
            "sample_size",
            &sample_size,
            &"sample raster must be at least 1x1",
        ));
    }

    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| CamoError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let mut rgb = img.to_rgb8();

    if let Some(window) = crop {
        let (width, height) = rgb.dimensions();
        let left = (f64::from(width) * window.left) as u32;
        let top = (f64::from(height) * window.top) as u32;
        let right = ((f64::from(width) * window.right) as u32).min(width);
        let bottom = ((f64::from(height) * window.bottom) as u32).min(height);
        if right > left && bottom > top {
            rgb = image::imageops::crop_imm(&rgb, left, top, right - left, bottom - top).to_image();
        }
    }

    let small = image::imageops::resize(&rgb, sample_size, sample_size, FilterType::Triangle);
    Ok(small
        .pixels()
        .map(|pixel| {
            [
                f64::from(pixel.0[0]) / 255.0,
                f64::from(pixel.0[1]) / 255.0,
                f64::from(pixel.0[2]) / 255.0,
            ]
        })
        .collect())
}

/// Export a canvas as a PNG by resolving indices through the palette mapping
///
/// # Errors
///
/// Returns an error if:
/// - A cell references a palette entry outside the mapping
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png(
    canvas: &Canvas,
    color_mapping: &[[u8; 4]],
    output_path: &str,
) -> Result<()> {
    let width = canvas.cols() as u32;
    let height = canvas.rows() as u32;
    let mut img = ImageBuffer::new(width, height);

    for row in 0..canvas.rows() {
        for col in 0..canvas.cols() {
            let index = canvas.get(row, col).unwrap_or(0);
            let rgba = color_mapping.get(index).copied().ok_or(
                CamoError::PaletteIndexOutOfRange {
                    index,
                    palette_len: color_mapping.len(),
                },
            )?;
            img.put_pixel(col as u32, row as u32, Rgba(rgba));
        }
    }

    save_image(&img, output_path)
}

/// Export the palette as a vertical swatch strip, one band per color
///
/// Bands run darkest to lightest from the top, matching palette order.
///
/// # Errors
///
/// Returns an error if the mapping is empty, a dimension is zero, or the
/// image cannot be saved.
pub fn export_palette_swatch(
    color_mapping: &[[u8; 4]],
    output_path: &str,
    swatch_width: u32,
    band_height: u32,
) -> Result<()> {
    if color_mapping.is_empty() {
        return Err(invalid_source_data(&"palette has no colors"));
    }
    if swatch_width == 0 || band_height == 0 {
        return Err(invalid_parameter(
            "swatch dimensions",
            &format!("{swatch_width}x{band_height}"),
            &"swatch width and band height must be positive",
        ));
    }

    let height = band_height * color_mapping.len() as u32;
    let mut img = ImageBuffer::new(swatch_width, height);
    for (band, rgba) in color_mapping.iter().enumerate() {
        for y in 0..band_height {
            for x in 0..swatch_width {
                img.put_pixel(x, band as u32 * band_height + y, Rgba(*rgba));
            }
        }
    }

    save_image(&img, output_path)
}

fn save_image(img: &ImageBuffer<Rgba<u8>, Vec<u8>>, output_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| CamoError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| CamoError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
