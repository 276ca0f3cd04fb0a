// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Inclusive point containment.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Whether the segment `a`-`b` touches the rectangle (Liang-Barsky clip).
    pub fn intersects_segment(&self, a: (f32, f32), b: (f32, f32)) -> bool {
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let mut t0 = 0.0f32;
        let mut t1 = 1.0f32;
        for (p, q) in [
            (-dx, a.0 - self.left),
            (dx, self.right - a.0),
            (-dy, a.1 - self.top),
            (dy, self.bottom - a.1),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return false;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    t0 = t0.max(r);
                } else {
                    t1 = t1.min(r);
                }
                if t0 > t1 {
                    return false;
                }
            }
        }
        true
    }

    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ltwh_and_containment() {
        let r = RectF::from_ltwh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right, 40.0);
        assert_eq!(r.bottom, 60.0);
        assert!(r.contains(10.0, 60.0));
        assert!(!r.contains(9.9, 30.0));
    }

    #[test]
    fn segment_crossing_without_endpoints_inside() {
        let r = RectF::from_ltrb(10.0, 10.0, 20.0, 20.0);
        assert!(r.intersects_segment((0.0, 15.0), (30.0, 15.0)));
        assert!(r.intersects_segment((0.0, 0.0), (30.0, 30.0)));
        assert!(r.intersects_segment((12.0, 12.0), (12.0, 12.0)));
        assert!(!r.intersects_segment((0.0, 25.0), (30.0, 25.0)));
        assert!(!r.intersects_segment((0.0, 0.0), (5.0, 30.0)));
    }
}
