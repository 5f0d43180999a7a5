//! Generator constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: usize = 800;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: usize = 600;

/// Default number of dominant colors extracted from a source image
pub const DEFAULT_PALETTE_SIZE: usize = 4;

/// Fixed Lloyd iteration count for k-means clustering
pub const DEFAULT_KMEANS_ITERATIONS: usize = 20;

/// Side length of the downscaled sampling raster fed to clustering
pub const DEFAULT_SAMPLE_SIZE: u32 = 50;

/// Default number of woodland blobs
pub const DEFAULT_BLOB_COUNT: usize = 150;

/// Default number of tiger stripes
pub const DEFAULT_STRIPE_COUNT: usize = 35;

/// Default digital camouflage cell size in pixels
pub const DEFAULT_CELL_SIZE: usize = 15;

// Woodland blob tuning
/// Base size range of woodland blobs in pixels
pub const WOODLAND_BLOB_SIZE: [f64; 2] = [20.0, 80.0];
/// Inclusive vertex count range of woodland blobs
pub const WOODLAND_BLOB_VERTICES: [usize; 2] = [6, 12];
/// Per-vertex multiplicative radius variation of woodland blobs
pub const WOODLAND_RADIUS_FACTOR: [f64; 2] = [0.5, 1.5];
/// Palette entry pre-filling the woodland background (clamped to palette length)
pub const WOODLAND_BACKGROUND_INDEX: usize = 2;

// Tiger underlayer blob tuning
/// Base size range of underlayer blobs in pixels
pub const UNDERLAYER_BLOB_SIZE: [f64; 2] = [40.0, 120.0];
/// Inclusive vertex count range of underlayer blobs
pub const UNDERLAYER_BLOB_VERTICES: [usize; 2] = [8, 15];
/// Per-vertex multiplicative radius variation of underlayer blobs
pub const UNDERLAYER_RADIUS_FACTOR: [f64; 2] = [0.4, 1.6];
/// Fraction of each canvas dimension underlayer centers may spawn outside bounds
pub const UNDERLAYER_MARGIN_FRACTION: f64 = 0.1;
/// Inclusive underlayer blob count range
pub const UNDERLAYER_COUNT: [usize; 2] = [40, 60];

// Stripe layer tuning
/// Maximum stripe deviation from vertical in degrees
pub const STRIPE_ANGLE_SPREAD_DEGREES: f64 = 30.0;
/// Inclusive segment count range per stripe
pub const STRIPE_SEGMENTS: [usize; 2] = [15, 30];
/// Stripe path length range as a multiple of canvas height
pub const STRIPE_LENGTH_FACTOR: [f64; 2] = [1.2, 1.8];
/// Lateral wobble amplitude range in pixels
pub const STRIPE_WOBBLE_AMPLITUDE: [f64; 2] = [20.0, 60.0];
/// Wobble phase advance in radians over one full stripe path
pub const STRIPE_WOBBLE_FREQUENCY: [f64; 2] = [3.0, 8.0];
/// Half-range of per-point jitter on each axis in pixels
pub const STRIPE_POINT_JITTER: [f64; 2] = [15.0, 10.0];
/// Stripe width range in pixels
pub const STRIPE_WIDTH: [f64; 2] = [20.0, 50.0];
/// Fractional width swing along a stripe
pub const STRIPE_WIDTH_MODULATION: f64 = 0.4;
/// Phase advance of the width swing per segment
pub const STRIPE_WIDTH_MODULATION_RATE: f64 = 0.5;

// Digital style smoothing
/// Number of majority-filter passes over the cell grid
pub const SMOOTHING_PASSES: usize = 3;
/// Probability that an interior cell adopts its neighborhood majority
pub const SMOOTHING_PROBABILITY: f64 = 0.3;

// Scalar-field stripe tuning (hand-tuned, aesthetic rather than derived)
/// Stripe orientation in degrees (negative = clockwise from vertical bands)
pub const FIELD_STRIPE_ANGLE_DEGREES: f64 = -20.0;
/// Controls stripe thickness (bigger = thicker stripes)
pub const FIELD_STRIPE_SCALE: f64 = 45.0;
/// Wavelength of the cross-direction wobble
pub const FIELD_CROSS_SCALE: f64 = 80.0;
/// Amplitude of the cross-direction wobble
pub const FIELD_CROSS_AMOUNT: f64 = 0.4;
/// Half-range of per-pixel edge jitter
pub const FIELD_JITTER: f64 = 0.15;
/// Band thresholds selecting dark, mid, and light colors in that order
pub const FIELD_BAND_THRESHOLDS: [f64; 3] = [0.6, 0.2, -0.1];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Swatch width of the exported palette preview
pub const PALETTE_SWATCH_WIDTH: u32 = 80;
/// Band height of the exported palette preview
pub const PALETTE_BAND_HEIGHT: u32 = 200;
