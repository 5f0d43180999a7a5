//! Cellular-smoothed digital style
//!
//! A coarse cell grid takes a uniformly random palette index per cell, then
//! a stochastic majority filter pulls neighboring cells toward agreement.
//! Three passes turn salt-and-pepper noise into the blocky clustered
//! regions the style needs.

use crate::io::configuration::{SMOOTHING_PASSES, SMOOTHING_PROBABILITY};
use crate::io::error::{Result, invalid_parameter};
use crate::palette::Palette;
use crate::pattern::PatternConfig;
use crate::spatial::canvas::Canvas;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Render the digital style
///
/// Cells expand to pixel blocks of `cell_size`; remainder pixels past the
/// last full cell clamp to it, so the canvas is always exactly
/// width×height.
///
/// # Errors
///
/// Returns an error if the canvas dimensions or cell size are zero, or the
/// palette holds no colors.
pub fn generate_digital(palette: &Palette, config: &PatternConfig) -> Result<Canvas> {
    crate::pattern::validate_canvas(palette, config)?;
    if config.cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &config.cell_size,
            &"cell size must be positive",
        ));
    }
    let mut rng = StdRng::seed_from_u64(config.seed);

    let rows = (config.height / config.cell_size).max(1);
    let cols = (config.width / config.cell_size).max(1);

    let mut cells = Array2::from_shape_fn((rows, cols), |_| rng.random_range(0..palette.len()));
    smooth_cells(&mut cells, &mut rng, SMOOTHING_PASSES, SMOOTHING_PROBABILITY);

    let mut canvas = Canvas::filled(config.width, config.height, 0);
    for row in 0..config.height {
        let cell_row = (row / config.cell_size).min(rows - 1);
        for col in 0..config.width {
            let cell_col = (col / config.cell_size).min(cols - 1);
            let value = cells.get((cell_row, cell_col)).copied().unwrap_or(0);
            canvas.set(row, col, value);
        }
    }

    Ok(canvas)
}

/// Stochastic majority filter over interior cells
///
/// Each pass visits interior cells in scan order; with the given
/// probability a cell adopts the majority value among its four orthogonal
/// neighbors. Replacements land immediately, so later cells in the same
/// pass see earlier updates. Grids too small to have interior cells pass
/// through unchanged.
pub fn smooth_cells(cells: &mut Array2<usize>, rng: &mut StdRng, passes: usize, probability: f64) {
    let (rows, cols) = cells.dim();
    if rows < 3 || cols < 3 {
        return;
    }

    for _ in 0..passes {
        for row in 1..rows - 1 {
            for col in 1..cols - 1 {
                if rng.random::<f64>() >= probability {
                    continue;
                }
                let neighbors = [
                    cells.get((row - 1, col)).copied(),
                    cells.get((row + 1, col)).copied(),
                    cells.get((row, col - 1)).copied(),
                    cells.get((row, col + 1)).copied(),
                ];
                if let Some(majority) = majority_value(&neighbors) {
                    if let Some(cell) = cells.get_mut((row, col)) {
                        *cell = majority;
                    }
                }
            }
        }
    }
}

/// Most frequent neighbor value, ties broken by the lowest value
fn majority_value(neighbors: &[Option<usize>; 4]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for &value in neighbors.iter().flatten() {
        let count = neighbors
            .iter()
            .flatten()
            .filter(|&&candidate| candidate == value)
            .count();
        let replaces = match best {
            None => true,
            Some((best_value, best_count)) => {
                count > best_count || (count == best_count && value < best_value)
            }
        };
        if replaces {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}
