//! Scanline polygon rasterization
//!
//! Fills arbitrary closed polygons into an index canvas using the even-odd
//! rule. Coverage is decided at pixel centers, so adjacent polygons sharing
//! an edge never double-fill or leave gaps.

use crate::spatial::canvas::Canvas;
use std::cmp::Ordering;

/// Opaquely fill a closed polygon into the canvas with the given palette index
///
/// Vertices are in pixel coordinates and may lie outside the canvas; the
/// filled region is clipped to canvas bounds. Polygons with fewer than three
/// vertices fill nothing.
pub fn fill_polygon(canvas: &mut Canvas, points: &[[f64; 2]], value: usize) {
    if points.len() < 3 {
        return;
    }

    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for point in points {
        min_y = min_y.min(point[1]);
        max_y = max_y.max(point[1]);
    }
    if !min_y.is_finite() || !max_y.is_finite() {
        return;
    }

    let row_start = min_y.floor().max(0.0) as usize;
    let row_end = max_y.ceil().min(canvas.rows() as f64) as usize;

    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());

    for row in row_start..row_end {
        let center_y = row as f64 + 0.5;
        crossings.clear();

        for i in 0..points.len() {
            let Some(p) = points.get(i) else { continue };
            let Some(q) = points.get((i + 1) % points.len()) else {
                continue;
            };

            // Half-open span test keeps vertex crossings counted exactly once
            let crosses = (p[1] <= center_y && q[1] > center_y)
                || (q[1] <= center_y && p[1] > center_y);
            if crosses {
                let t = (center_y - p[1]) / (q[1] - p[1]);
                crossings.push(t.mul_add(q[0] - p[0], p[0]));
            }
        }

        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        for pair in crossings.chunks_exact(2) {
            if let [x_enter, x_exit] = pair {
                let col_start = (x_enter - 0.5).ceil().max(0.0) as usize;
                let col_end = (x_exit + 0.5).floor().max(0.0) as usize;
                canvas.fill_span(row, col_start, col_end, value);
            }
        }
    }
}

/// Signed area of a closed polygon via the shoelace formula
///
/// The sign follows winding direction; callers interested in degeneracy
/// compare the absolute value against zero.
pub fn polygon_area(points: &[[f64; 2]]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut doubled = 0.0;
    for i in 0..points.len() {
        let Some(p) = points.get(i) else { continue };
        let Some(q) = points.get((i + 1) % points.len()) else {
            continue;
        };
        doubled += p[0].mul_add(q[1], -(q[0] * p[1]));
    }
    doubled / 2.0
}
