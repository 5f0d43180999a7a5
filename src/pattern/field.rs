//! Scalar-field shadow stripe style
//!
//! Pixels are colored by thresholding a rotated sinusoidal field, so the
//! stripes are a property of the whole image rather than of any drawn
//! shape. One phase draw per image keeps the pattern coherent; a small
//! per-pixel jitter roughens band edges without breaking the banding.

use crate::io::configuration::{
    FIELD_BAND_THRESHOLDS, FIELD_CROSS_AMOUNT, FIELD_CROSS_SCALE, FIELD_JITTER,
    FIELD_STRIPE_ANGLE_DEGREES, FIELD_STRIPE_SCALE,
};
use crate::io::error::Result;
use crate::palette::Palette;
use crate::pattern::{PatternConfig, uniform};
use crate::spatial::canvas::Canvas;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::TAU;

/// Tuning for the scalar stripe field
///
/// These are hand-tuned aesthetics, not derived quantities; they are
/// exposed so a different palette size or target look can retune them.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Stripe orientation in degrees from vertical banding
    pub angle_degrees: f64,
    /// Stripe thickness control (bigger means thicker stripes)
    pub stripe_scale: f64,
    /// Wavelength of the cross-direction wobble
    pub cross_scale: f64,
    /// Amplitude of the cross-direction wobble
    pub cross_amount: f64,
    /// Half-range of per-pixel edge jitter
    pub jitter: f64,
    /// Thresholds selecting the dark, mid, and light bands in that order
    ///
    /// Fixed relative to the field value, never to the palette size; short
    /// palettes fill the band roles by reuse instead.
    pub band_thresholds: [f64; 3],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            angle_degrees: FIELD_STRIPE_ANGLE_DEGREES,
            stripe_scale: FIELD_STRIPE_SCALE,
            cross_scale: FIELD_CROSS_SCALE,
            cross_amount: FIELD_CROSS_AMOUNT,
            jitter: FIELD_JITTER,
            band_thresholds: FIELD_BAND_THRESHOLDS,
        }
    }
}

/// Render the shadow-stripe style with default field tuning
///
/// # Errors
///
/// Returns an error if the canvas dimensions are zero or the palette holds
/// no colors.
pub fn generate_shadow_stripe(palette: &Palette, config: &PatternConfig) -> Result<Canvas> {
    generate_with_field(palette, config, &FieldConfig::default())
}

/// Render the shadow-stripe style with explicit field tuning
///
/// # Errors
///
/// Returns an error if the canvas dimensions are zero or the palette holds
/// no colors.
pub fn generate_with_field(
    palette: &Palette,
    config: &PatternConfig,
    field: &FieldConfig,
) -> Result<Canvas> {
    crate::pattern::validate_canvas(palette, config)?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let (sin_a, cos_a) = field.angle_degrees.to_radians().sin_cos();
    let phase = uniform(&mut rng, 0.0, TAU);

    let bands = [palette.dark(), palette.mid(), palette.light()];
    let background = palette.background();

    let mut canvas = Canvas::filled(config.width, config.height, background);
    for row in 0..config.height {
        let y = row as f64;
        for col in 0..config.width {
            let x = col as f64;
            // Rotate into stripe-aligned coordinates
            let u = x.mul_add(cos_a, y * sin_a);
            let v = x.mul_add(-sin_a, y * cos_a);

            let wobble = field.cross_amount * (v / field.cross_scale).sin();
            let s = (u / field.stripe_scale + phase + wobble).sin()
                + uniform(&mut rng, -field.jitter, field.jitter);

            let value = if s > field.band_thresholds[0] {
                bands[0]
            } else if s > field.band_thresholds[1] {
                bands[1]
            } else if s > field.band_thresholds[2] {
                bands[2]
            } else {
                background
            };
            canvas.set(row, col, value);
        }
    }

    Ok(canvas)
}
