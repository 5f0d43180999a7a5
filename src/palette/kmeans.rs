//! Lloyd's k-means clustering over sampled pixel colors
//!
//! Runs a fixed number of iterations rather than stopping on a convergence
//! tolerance; with the small sample rasters fed in by the CLI the cost is
//! negligible and the fixed count keeps runs bit-reproducible.

use crate::io::error::{Result, invalid_parameter, invalid_source_data};
use crate::palette::swatch::Palette;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Reduce a pixel sample to its `k` dominant colors
///
/// Centers initialize to `k` distinct sample points chosen without
/// replacement from a seeded stream, then iterate nearest-center assignment
/// and mean updates. A cluster that loses every sample keeps its previous
/// center, so intermediate emptiness never poisons a center with NaN. The
/// final centers come back as a [`Palette`], ordered darkest to lightest.
///
/// # Errors
///
/// Returns an error if:
/// - The sample set is empty
/// - `k` is zero
/// - `k` exceeds the number of distinct sample colors
pub fn extract_palette(
    samples: &[[f64; 3]],
    k: usize,
    iterations: usize,
    seed: u64,
) -> Result<Palette> {
    if samples.is_empty() {
        return Err(invalid_source_data(&"sample set is empty"));
    }
    if k < 1 {
        return Err(invalid_parameter(
            "k",
            &k,
            &"at least one cluster is required",
        ));
    }
    let distinct = distinct_color_count(samples);
    if k > distinct {
        return Err(invalid_parameter(
            "k",
            &k,
            &format!("sample set has only {distinct} distinct colors"),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut centers: Vec<[f64; 3]> = rand::seq::index::sample(&mut rng, samples.len(), k)
        .iter()
        .filter_map(|index| samples.get(index).copied())
        .collect();

    for _ in 0..iterations {
        let assignments: Vec<usize> = samples
            .iter()
            .map(|sample| nearest_center(sample, &centers))
            .collect();

        let mut sums = vec![[0.0f64; 3]; centers.len()];
        let mut counts = vec![0usize; centers.len()];
        for (sample, &cluster) in samples.iter().zip(&assignments) {
            if let Some(sum) = sums.get_mut(cluster) {
                for (total, channel) in sum.iter_mut().zip(sample) {
                    *total += channel;
                }
            }
            if let Some(count) = counts.get_mut(cluster) {
                *count += 1;
            }
        }

        for (center, (sum, &count)) in centers.iter_mut().zip(sums.iter().zip(&counts)) {
            if count > 0 {
                let scale = 1.0 / count as f64;
                *center = [sum[0] * scale, sum[1] * scale, sum[2] * scale];
            }
        }
    }

    Ok(Palette::from_colors(centers))
}

/// Index of the center nearest to `sample` under squared Euclidean distance
///
/// Strict comparison keeps the lowest index on ties.
fn nearest_center(sample: &[f64; 3], centers: &[[f64; 3]]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, center) in centers.iter().enumerate() {
        let distance = squared_distance(sample, center);
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}

fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

/// Count distinct colors after 8-bit quantization per channel
///
/// Quantizing keeps the count stable against float noise from upstream
/// resampling while still distinguishing every displayable color.
fn distinct_color_count(samples: &[[f64; 3]]) -> usize {
    let quantized: HashSet<[u8; 3]> = samples
        .iter()
        .map(|sample| sample.map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8))
        .collect();
    quantized.len()
}
