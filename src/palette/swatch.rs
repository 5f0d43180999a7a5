//! Ordered color palette with luminance-based role lookup
//!
//! Every generator consumes colors through this type: entries are sorted
//! darkest to lightest once at construction, and the band roles (ink, mid,
//! light, background) resolve to valid indices for any palette length.

use std::cmp::Ordering;

/// Relative luminance of a normalized RGB color
///
/// Rec. 709 coefficients over linear channel values in [0, 1].
pub fn luminance(color: [f64; 3]) -> f64 {
    0.0722f64.mul_add(color[2], 0.2126f64.mul_add(color[0], 0.7152 * color[1]))
}

/// An ordered sequence of representative colors, darkest to lightest
///
/// Colors are normalized RGB triples. Ordering is fixed at construction so
/// index 0 is always the darkest entry and the last index the lightest.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<[f64; 3]>,
}

impl Palette {
    /// Build a palette from cluster centers
    ///
    /// Channels are clamped to [0, 1] before ordering, so arithmetic drift
    /// from upstream averaging can never produce an out-of-range display
    /// value.
    pub fn from_colors(colors: Vec<[f64; 3]>) -> Self {
        let mut colors: Vec<[f64; 3]> = colors
            .into_iter()
            .map(|color| color.map(|channel| channel.clamp(0.0, 1.0)))
            .collect();
        colors.sort_by(|a, b| {
            luminance(*a)
                .partial_cmp(&luminance(*b))
                .unwrap_or(Ordering::Equal)
        });
        Self { colors }
    }

    /// Number of palette entries
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, if present
    pub fn color(&self, index: usize) -> Option<[f64; 3]> {
        self.colors.get(index).copied()
    }

    /// 8-bit RGBA value for each entry, in palette order
    ///
    /// All entries are fully opaque; this is the mapping the PNG export path
    /// resolves canvas indices through.
    pub fn rgba_mapping(&self) -> Vec<[u8; 4]> {
        self.colors
            .iter()
            .map(|color| {
                [
                    channel_to_byte(color[0]),
                    channel_to_byte(color[1]),
                    channel_to_byte(color[2]),
                    255,
                ]
            })
            .collect()
    }

    /// Index of the darkest entry, used as stripe ink
    pub const fn dark(&self) -> usize {
        0
    }

    /// Index of the mid-tone band entry
    pub fn mid(&self) -> usize {
        usize::from(self.colors.len() > 1)
    }

    /// Index of the secondary lighter band entry
    ///
    /// Palettes with fewer than three colors fall back to the lightest
    /// entry, matching the background.
    pub fn light(&self) -> usize {
        if self.colors.len() > 2 {
            2
        } else {
            self.background()
        }
    }

    /// Index of the lightest entry, used as background
    pub fn background(&self) -> usize {
        self.colors.len().saturating_sub(1)
    }

    /// All indices except `excluded`
    ///
    /// Falls back to every index when the exclusion would leave nothing to
    /// draw with (single-color palettes).
    pub fn indices_excluding(&self, excluded: usize) -> Vec<usize> {
        let kept: Vec<usize> = (0..self.colors.len())
            .filter(|&index| index != excluded)
            .collect();
        if kept.is_empty() {
            (0..self.colors.len()).collect()
        } else {
            kept
        }
    }

    /// Hex representation like `#3D4A2C` of the entry at `index`
    pub fn hex(&self, index: usize) -> Option<String> {
        self.colors.get(index).map(|color| {
            format!(
                "#{:02X}{:02X}{:02X}",
                channel_to_byte(color[0]),
                channel_to_byte(color[1]),
                channel_to_byte(color[2])
            )
        })
    }
}

fn channel_to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}
