// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, resolution, paddings).

/// Default figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 8.0;
/// Default figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 5.0;
/// Default output resolution in dots per inch.
pub const DPI: f32 = 200.0;
/// Typographic points per inch; line widths and font sizes are given in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Screen margins around the plot rectangle, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

/// Convert a length in points to pixels at `dpi`.
#[inline]
pub fn pt_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / POINTS_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_scale_with_dpi() {
        assert_eq!(pt_to_px(72.0, 200.0), 200.0);
        assert_eq!(pt_to_px(36.0, 100.0), 50.0);
    }

    #[test]
    fn inset_sums() {
        let i = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(i.hsum(), 3.0);
        assert_eq!(i.vsum(), 7.0);
    }
}
