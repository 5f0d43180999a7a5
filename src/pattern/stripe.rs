//! Stroked curved stripes over a blob underlayer
//!
//! The vector tiger-stripe style is a two-layer composite. The underlayer
//! scatters large tonal blobs for texture; the marking layer walks wobbling
//! near-vertical centerlines and strokes them into opaque ink ribbons.
//! Separating the layers lets each use its own random process and color
//! subset, the way disruptive camouflage separates base coloring from bold
//! markings.

use crate::geometry::path::stroke_centerline;
use crate::geometry::polygon::fill_polygon;
use crate::io::configuration::{
    STRIPE_ANGLE_SPREAD_DEGREES, STRIPE_LENGTH_FACTOR, STRIPE_POINT_JITTER, STRIPE_SEGMENTS,
    STRIPE_WIDTH, STRIPE_WIDTH_MODULATION, STRIPE_WIDTH_MODULATION_RATE,
    STRIPE_WOBBLE_AMPLITUDE, STRIPE_WOBBLE_FREQUENCY, UNDERLAYER_COUNT,
};
use crate::io::error::Result;
use crate::palette::Palette;
use crate::pattern::blob::{BlobConfig, scatter_blobs};
use crate::pattern::{PatternConfig, uniform};
use crate::spatial::canvas::Canvas;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Tuning for the stroked stripe layer
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Inclusive underlayer blob count range
    pub underlayer_count_range: [usize; 2],
    /// Maximum deviation from vertical, in degrees
    pub angle_spread_degrees: f64,
    /// Inclusive segment count range per stripe
    pub segment_range: [usize; 2],
    /// Path length range as a multiple of canvas height
    pub length_factor_range: [f64; 2],
    /// Lateral wobble amplitude range in pixels
    pub wobble_amplitude_range: [f64; 2],
    /// Wobble phase advance in radians over one full path
    pub wobble_frequency_range: [f64; 2],
    /// Half-range of per-point jitter on each axis
    pub point_jitter: [f64; 2],
    /// Stripe width range in pixels
    pub width_range: [f64; 2],
    /// Fractional width swing along the path
    pub width_modulation: f64,
    /// Phase advance of the width swing per segment
    pub width_modulation_rate: f64,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            underlayer_count_range: UNDERLAYER_COUNT,
            angle_spread_degrees: STRIPE_ANGLE_SPREAD_DEGREES,
            segment_range: STRIPE_SEGMENTS,
            length_factor_range: STRIPE_LENGTH_FACTOR,
            wobble_amplitude_range: STRIPE_WOBBLE_AMPLITUDE,
            wobble_frequency_range: STRIPE_WOBBLE_FREQUENCY,
            point_jitter: STRIPE_POINT_JITTER,
            width_range: STRIPE_WIDTH,
            width_modulation: STRIPE_WIDTH_MODULATION,
            width_modulation_rate: STRIPE_WIDTH_MODULATION_RATE,
        }
    }
}

/// Render the tiger-stripe style with default stripe tuning
///
/// # Errors
///
/// Returns an error if the canvas dimensions are zero or the palette holds
/// no colors.
pub fn generate_tiger_stripe(palette: &Palette, config: &PatternConfig) -> Result<Canvas> {
    generate_with_stripes(palette, config, &StripeConfig::default())
}

/// Render the tiger-stripe style with explicit stripe tuning
///
/// # Errors
///
/// Returns an error if the canvas dimensions are zero or the palette holds
/// no colors.
pub fn generate_with_stripes(
    palette: &Palette,
    config: &PatternConfig,
    stripes: &StripeConfig,
) -> Result<Canvas> {
    crate::pattern::validate_canvas(palette, config)?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut canvas = Canvas::filled(config.width, config.height, palette.background());

    // Texture layer: tonal blobs in every color except the stripe ink
    let underlayer_fills = palette.indices_excluding(palette.dark());
    let underlayer_count =
        rng.random_range(stripes.underlayer_count_range[0]..=stripes.underlayer_count_range[1]);
    scatter_blobs(
        &mut canvas,
        &mut rng,
        &BlobConfig::underlayer(),
        &underlayer_fills,
        underlayer_count,
    );

    // Marking layer: ink stripes drawn after every blob, so they sit on top
    let ink = palette.dark();
    for _ in 0..config.stripe_count {
        let (centerline, half_widths) =
            stripe_path(&mut rng, stripes, config.width as f64, config.height as f64);
        for quad in stroke_centerline(&centerline, &half_widths) {
            fill_polygon(&mut canvas, &quad, ink);
        }
    }

    Ok(canvas)
}

/// Walk one wobbling centerline and derive its per-segment half-widths
///
/// The path advances along a near-vertical base angle for a length
/// proportional to canvas height. Wobble amplitude, frequency, and phase are
/// drawn once per stripe so the curve stays coherent; per-point jitter then
/// roughens it. Width swings slowly along the path via a sinusoid on the
/// segment index.
fn stripe_path(
    rng: &mut StdRng,
    config: &StripeConfig,
    width: f64,
    height: f64,
) -> (Vec<[f64; 2]>, Vec<f64>) {
    let angle = uniform(
        rng,
        -config.angle_spread_degrees,
        config.angle_spread_degrees,
    )
    .to_radians();

    // Two spawn bands: one feeds stripes in from the top-left diagonal,
    // the other spreads starts across the full width
    let (start_x, start_y) = if rng.random::<f64>() < 0.5 {
        (
            uniform(rng, -width * 0.3, width * 0.7),
            uniform(rng, -height * 0.2, height * 0.3),
        )
    } else {
        (
            uniform(rng, -width * 0.2, width * 1.2),
            uniform(rng, -height * 0.3, height * 0.5),
        )
    };

    let segments = rng.random_range(config.segment_range[0]..=config.segment_range[1]);
    let length = uniform(
        rng,
        config.length_factor_range[0],
        config.length_factor_range[1],
    ) * height;

    let amplitude = uniform(
        rng,
        config.wobble_amplitude_range[0],
        config.wobble_amplitude_range[1],
    );
    let frequency = uniform(
        rng,
        config.wobble_frequency_range[0],
        config.wobble_frequency_range[1],
    );
    let phase = uniform(rng, 0.0, TAU);

    let mut points = Vec::with_capacity(segments + 1);
    points.push([start_x, start_y]);
    for segment in 1..=segments {
        let t = segment as f64 / segments as f64;
        let advance = length * t;
        let wobble = amplitude * t.mul_add(frequency, phase).sin();
        let jitter_x = uniform(rng, -config.point_jitter[0], config.point_jitter[0]);
        let jitter_y = uniform(rng, -config.point_jitter[1], config.point_jitter[1]);
        points.push([
            advance.mul_add(angle.tan(), start_x) + wobble + jitter_x,
            start_y + advance + jitter_y,
        ]);
    }

    let base_width = uniform(rng, config.width_range[0], config.width_range[1]);
    let half_widths = (0..segments)
        .map(|segment| {
            let swing = config.width_modulation
                * (segment as f64 * config.width_modulation_rate).sin();
            base_width * (1.0 + swing) / 2.0
        })
        .collect();

    (points, half_widths)
}
