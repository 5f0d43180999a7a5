//! Dominant-color extraction and palette handling

/// Lloyd's k-means clustering over sampled pixel colors
pub mod kmeans;
/// Ordered palette type with luminance-based role lookup
pub mod swatch;

pub use swatch::Palette;
