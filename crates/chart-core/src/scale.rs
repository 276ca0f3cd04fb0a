// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

/// Linear mapping from a data interval onto a pixel interval.
/// `px0` corresponds to `v0`; a Y scale passes the bottom pixel as `px0` so values grow upward.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px0: f32,
    pub px1: f32,
    pub v0: f64,
    pub v1: f64,
}

impl LinearScale {
    pub fn new(px0: f32, px1: f32, v0: f64, v1: f64) -> Self {
        let mut s = Self { px0, px1, v0, v1 };
        // only a truly empty interval is widened; tiny spans keep their resolution
        if !(s.v1 - s.v0).is_normal() {
            s.v1 = s.v0 + 1.0;
        }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.v0) / (self.v1 - self.v0);
        self.px0 + (t as f32) * (self.px1 - self.px0)
    }
}
