//! Tests for centerline stroking into per-segment quadrilaterals

#[cfg(test)]
mod tests {
    use camoforge::geometry::path::stroke_centerline;

    // Tests a horizontal segment strokes into a rectangle offset by the half width
    // Verified by dropping the perpendicular normalization
    #[test]
    fn test_horizontal_segment_strokes_to_rectangle() {
        let path = [[0.0, 0.0], [10.0, 0.0]];
        let quads = stroke_centerline(&path, &[2.0]);

        assert_eq!(quads.len(), 1);
        let quad = quads.first().copied().unwrap();
        assert_eq!(quad, [[0.0, 2.0], [0.0, -2.0], [10.0, -2.0], [10.0, 2.0]]);
    }

    // Tests each segment of a longer path produces one quad
    // Verified by collapsing the per-segment loop
    #[test]
    fn test_one_quad_per_segment() {
        let path = [[0.0, 0.0], [5.0, 0.0], [5.0, 5.0], [0.0, 5.0]];
        let quads = stroke_centerline(&path, &[1.0, 1.0, 1.0]);
        assert_eq!(quads.len(), 3);
    }

    // Tests paths with fewer than two points stroke to nothing
    // Verified by removing the short-path early return
    #[test]
    fn test_short_paths_produce_no_quads() {
        assert!(stroke_centerline(&[], &[1.0]).is_empty());
        assert!(stroke_centerline(&[[3.0, 3.0]], &[1.0]).is_empty());
    }

    // Tests zero-length segments are skipped rather than producing degenerate quads
    // Verified by removing the length guard
    #[test]
    fn test_zero_length_segments_are_skipped() {
        let path = [[2.0, 2.0], [2.0, 2.0], [6.0, 2.0]];
        let quads = stroke_centerline(&path, &[1.0, 1.0]);
        assert_eq!(quads.len(), 1);
    }

    // Tests missing width entries fall back to the last provided value
    // Verified by substituting zero for missing widths
    #[test]
    fn test_missing_widths_reuse_the_last_value() {
        let path = [[0.0, 0.0], [4.0, 0.0], [8.0, 0.0]];
        let quads = stroke_centerline(&path, &[3.0]);

        assert_eq!(quads.len(), 2);
        let second = quads.get(1).copied().unwrap();
        assert_eq!(second, [[4.0, 3.0], [4.0, -3.0], [8.0, -3.0], [8.0, 3.0]]);
    }

    // Tests non-positive widths produce no quad for that segment
    // Verified by inverting the width guard
    #[test]
    fn test_zero_width_segments_are_dropped() {
        let path = [[0.0, 0.0], [4.0, 0.0], [8.0, 0.0]];
        let quads = stroke_centerline(&path, &[0.0, 2.0]);
        assert_eq!(quads.len(), 1);
    }
}
