//! Centerline stroking for curved stripe paths
//!
//! Converts an ordered point sequence plus per-segment half-widths into a
//! list of filled quadrilaterals, one per segment. Offsetting both segment
//! endpoints along the unit perpendicular keeps consecutive quads overlapping
//! enough that a stroked path reads as one continuous ribbon.

/// One stroked segment: four corners in fill order
pub type StrokeQuad = [[f64; 2]; 4];

/// Stroke a centerline into per-segment quadrilaterals
///
/// `half_widths` supplies the stroke half-width for each segment (one fewer
/// entry than `path` points; extra entries are ignored, missing entries fall
/// back to the last available value). Zero-length segments produce no quad.
pub fn stroke_centerline(path: &[[f64; 2]], half_widths: &[f64]) -> Vec<StrokeQuad> {
    if path.len() < 2 {
        return Vec::new();
    }

    let mut quads = Vec::with_capacity(path.len() - 1);
    let mut last_width = 0.0;

    for i in 0..path.len() - 1 {
        let Some(p) = path.get(i) else { continue };
        let Some(q) = path.get(i + 1) else { continue };

        let half_width = half_widths.get(i).copied().unwrap_or(last_width);
        last_width = half_width;

        let dx = q[0] - p[0];
        let dy = q[1] - p[1];
        let length = dx.hypot(dy);
        if length <= 0.0 || half_width <= 0.0 {
            continue;
        }

        let perp_x = -dy / length * half_width;
        let perp_y = dx / length * half_width;

        quads.push([
            [p[0] + perp_x, p[1] + perp_y],
            [p[0] - perp_x, p[1] - perp_y],
            [q[0] - perp_x, q[1] - perp_y],
            [q[0] + perp_x, q[1] + perp_y],
        ]);
    }

    quads
}
