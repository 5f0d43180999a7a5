//! Geometric utilities shared by the vector pattern generators

/// Centerline stroking into quadrilateral strips
pub mod path;
/// Scanline polygon fill and area computation
pub mod polygon;
