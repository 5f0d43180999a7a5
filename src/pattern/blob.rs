//! Organic blob construction and the woodland style
//!
//! Blobs are irregular star polygons: evenly spaced angles around a random
//! center, each vertex pushed in or out by a multiplicative radius factor.
//! Compositing is opaque in generation order, so later blobs overwrite
//! earlier ones wherever they overlap.

use crate::geometry::polygon::fill_polygon;
use crate::io::configuration::{
    UNDERLAYER_BLOB_SIZE, UNDERLAYER_BLOB_VERTICES, UNDERLAYER_MARGIN_FRACTION,
    UNDERLAYER_RADIUS_FACTOR, WOODLAND_BACKGROUND_INDEX, WOODLAND_BLOB_SIZE,
    WOODLAND_BLOB_VERTICES, WOODLAND_RADIUS_FACTOR,
};
use crate::io::error::Result;
use crate::palette::Palette;
use crate::pattern::{PatternConfig, uniform};
use crate::spatial::canvas::Canvas;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Tuning for one family of random blobs
#[derive(Debug, Clone)]
pub struct BlobConfig {
    /// Base size range in pixels
    pub size_range: [f64; 2],
    /// Inclusive vertex count range
    pub vertex_range: [usize; 2],
    /// Multiplicative radius variation applied per vertex
    pub radius_factor_range: [f64; 2],
    /// Fraction of each canvas dimension centers may spawn outside bounds
    pub margin_fraction: f64,
}

impl BlobConfig {
    /// Woodland patches: mid-sized, moderately irregular, centers on canvas
    pub const fn woodland() -> Self {
        Self {
            size_range: WOODLAND_BLOB_SIZE,
            vertex_range: WOODLAND_BLOB_VERTICES,
            radius_factor_range: WOODLAND_RADIUS_FACTOR,
            margin_fraction: 0.0,
        }
    }

    /// Tiger underlayer: larger, heavily irregular, centers allowed outside
    /// bounds so blob edges never align with the canvas border
    pub const fn underlayer() -> Self {
        Self {
            size_range: UNDERLAYER_BLOB_SIZE,
            vertex_range: UNDERLAYER_BLOB_VERTICES,
            radius_factor_range: UNDERLAYER_RADIUS_FACTOR,
            margin_fraction: UNDERLAYER_MARGIN_FRACTION,
        }
    }
}

/// Build one irregular star polygon around a center point
///
/// Vertices sit at evenly spaced angles; each radius is the base size scaled
/// by an independent factor from the configured range, which keeps the
/// outline star-convex but visibly lumpy.
pub fn blob_outline(rng: &mut StdRng, center: [f64; 2], config: &BlobConfig) -> Vec<[f64; 2]> {
    let base_size = uniform(rng, config.size_range[0], config.size_range[1]);
    let vertex_count = rng.random_range(config.vertex_range[0]..=config.vertex_range[1]);

    (0..vertex_count)
        .map(|vertex| {
            let angle = TAU * vertex as f64 / vertex_count as f64;
            let radius = base_size
                * uniform(
                    rng,
                    config.radius_factor_range[0],
                    config.radius_factor_range[1],
                );
            [
                radius.mul_add(angle.cos(), center[0]),
                radius.mul_add(angle.sin(), center[1]),
            ]
        })
        .collect()
}

/// Composite `count` random blobs onto the canvas
///
/// Each blob picks its fill uniformly from `fill_indices`. Nothing is drawn
/// when the index list is empty.
pub fn scatter_blobs(
    canvas: &mut Canvas,
    rng: &mut StdRng,
    config: &BlobConfig,
    fill_indices: &[usize],
    count: usize,
) {
    if fill_indices.is_empty() {
        return;
    }
    let width = canvas.cols() as f64;
    let height = canvas.rows() as f64;
    let margin_x = width * config.margin_fraction;
    let margin_y = height * config.margin_fraction;

    for _ in 0..count {
        let center = [
            uniform(rng, -margin_x, width + margin_x),
            uniform(rng, -margin_y, height + margin_y),
        ];
        let outline = blob_outline(rng, center, config);
        let choice = rng.random_range(0..fill_indices.len());
        let fill = fill_indices.get(choice).copied().unwrap_or(0);
        fill_polygon(canvas, &outline, fill);
    }
}

/// Render the woodland style: organic patches over a tonal background
///
/// The background pre-fills with a mid palette entry, then every blob draws
/// with a color chosen uniformly from the whole palette.
///
/// # Errors
///
/// Returns an error if the canvas dimensions are zero or the palette holds
/// no colors.
pub fn generate_woodland(palette: &Palette, config: &PatternConfig) -> Result<Canvas> {
    crate::pattern::validate_canvas(palette, config)?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let background = WOODLAND_BACKGROUND_INDEX.min(palette.background());
    let mut canvas = Canvas::filled(config.width, config.height, background);

    let fill_indices: Vec<usize> = (0..palette.len()).collect();
    scatter_blobs(
        &mut canvas,
        &mut rng,
        &BlobConfig::woodland(),
        &fill_indices,
        config.blob_count,
    );

    Ok(canvas)
}
