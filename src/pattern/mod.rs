//! Camouflage pattern generators
//!
//! Two modelling families share the [`Canvas`] target: vector generators
//! composite filled polygons in draw order (woodland blobs, tiger stripes),
//! while field generators evaluate a value per cell or pixel (digital grid,
//! shadow stripes).

/// Organic blob construction and the woodland style
pub mod blob;
/// Scalar-field shadow stripe style
pub mod field;
/// Cellular-smoothed digital style
pub mod grid;
/// Stroked curved stripes over a blob underlayer
pub mod stripe;

use crate::io::configuration::{
    DEFAULT_BLOB_COUNT, DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_STRIPE_COUNT,
    DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::palette::Palette;
use crate::spatial::canvas::Canvas;
use rand::Rng;
use rand::rngs::StdRng;

/// The four supported camouflage styles
///
/// Woodland and tiger stripe build rasters from random vector geometry;
/// digital and shadow stripe evaluate a field per cell or pixel. The two
/// tiger-inspired styles stay separate variants rather than one algorithm:
/// stroked polygons and thresholded scalar fields rest on genuinely
/// different mathematical bases even when chasing the same reference
/// pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternStyle {
    /// Organic patches over a tonal background
    Woodland,
    /// Blocky clustered cells
    Digital,
    /// Stroked ink stripes over a blob underlayer
    TigerStripe,
    /// Sinusoidal banding with roughened edges
    ShadowStripe,
}

impl PatternStyle {
    /// Every style, in generation order
    pub const ALL: [Self; 4] = [
        Self::Woodland,
        Self::Digital,
        Self::TigerStripe,
        Self::ShadowStripe,
    ];

    /// Suffix used when naming output files
    pub const fn file_label(self) -> &'static str {
        match self {
            Self::Woodland => "woodland",
            Self::Digital => "digital",
            Self::TigerStripe => "tiger",
            Self::ShadowStripe => "shadow",
        }
    }
}

/// Canvas dimensions and element counts for one generation run
#[derive(Debug, Clone)]
pub struct PatternConfig {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
    /// Number of woodland blobs
    pub blob_count: usize,
    /// Number of tiger stripes
    pub stripe_count: usize,
    /// Digital cell edge length in pixels
    pub cell_size: usize,
    /// Seed for the per-style random stream
    pub seed: u64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            blob_count: DEFAULT_BLOB_COUNT,
            stripe_count: DEFAULT_STRIPE_COUNT,
            cell_size: DEFAULT_CELL_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Generate a canvas in the given style
///
/// # Errors
///
/// Returns an error if the canvas dimensions are zero or the palette holds
/// no colors.
pub fn generate(style: PatternStyle, palette: &Palette, config: &PatternConfig) -> Result<Canvas> {
    match style {
        PatternStyle::Woodland => blob::generate_woodland(palette, config),
        PatternStyle::Digital => grid::generate_digital(palette, config),
        PatternStyle::TigerStripe => stripe::generate_tiger_stripe(palette, config),
        PatternStyle::ShadowStripe => field::generate_shadow_stripe(palette, config),
    }
}

pub(crate) fn validate_canvas(palette: &Palette, config: &PatternConfig) -> Result<()> {
    if config.width == 0 {
        return Err(invalid_parameter(
            "width",
            &config.width,
            &"canvas dimensions must be positive",
        ));
    }
    if config.height == 0 {
        return Err(invalid_parameter(
            "height",
            &config.height,
            &"canvas dimensions must be positive",
        ));
    }
    if palette.is_empty() {
        return Err(invalid_parameter(
            "palette",
            &palette.len(),
            &"at least one color is required",
        ));
    }
    Ok(())
}

/// Uniform sample tolerating a zero-width range
pub(crate) fn uniform(rng: &mut StdRng, low: f64, high: f64) -> f64 {
    if low < high { rng.random_range(low..high) } else { low }
}
