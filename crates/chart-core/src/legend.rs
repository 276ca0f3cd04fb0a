// File: crates/chart-core/src/legend.rs
// Summary: Legend model, box sizing and corner placement inside the plot rectangle.

use log::debug;
use skia_safe as skia;

use crate::geometry::RectF;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLocation {
    /// Corner overlapping the fewest data points; upper right wins ties.
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendLocation {
    /// Corners tried by `Best`, in tie-break order.
    const CORNERS: [LegendLocation; 4] = [
        LegendLocation::UpperRight,
        LegendLocation::UpperLeft,
        LegendLocation::LowerLeft,
        LegendLocation::LowerRight,
    ];
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
}

/// Pixel metrics for one legend, already scaled to the output resolution.
#[derive(Clone, Copy, Debug)]
pub struct LegendMetrics {
    pub font_size: f32,
    pub row_height: f32,
    pub row_spacing: f32,
    pub handle_length: f32,
    pub handle_gap: f32,
    pub pad: f32,
    /// Distance between the frame and the plot border.
    pub border_pad: f32,
}

impl LegendMetrics {
    /// Metrics for a legend font of `font_size` px.
    pub fn for_font(font_size: f32) -> Self {
        Self {
            font_size,
            row_height: font_size * 1.2,
            row_spacing: font_size * 0.5,
            handle_length: font_size * 2.0,
            handle_gap: font_size * 0.8,
            pad: font_size * 0.4,
            border_pad: font_size * 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    /// Resolved corner (never `Best`).
    pub location: LegendLocation,
    pub frame: RectF,
}

impl Legend {
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Vertical center of the `i`-th row.
    pub fn row_center_y(&self, i: usize, m: &LegendMetrics) -> f32 {
        self.frame.top + m.pad + i as f32 * (m.row_height + m.row_spacing) + m.row_height * 0.5
    }
}

/// Frame size for entries whose labels measure `label_widths` px.
pub fn frame_size(label_widths: &[f32], m: &LegendMetrics) -> (f32, f32) {
    let n = label_widths.len();
    let text_w = label_widths.iter().copied().fold(0.0f32, f32::max);
    let w = 2.0 * m.pad + m.handle_length + m.handle_gap + text_w;
    let rows_h = if n == 0 {
        m.row_height
    } else {
        n as f32 * m.row_height + (n - 1) as f32 * m.row_spacing
    };
    (w, 2.0 * m.pad + rows_h)
}

fn frame_at(loc: LegendLocation, (w, h): (f32, f32), plot: RectF, border_pad: f32) -> RectF {
    let (left, top) = match loc {
        LegendLocation::UpperRight | LegendLocation::Best => (plot.right - border_pad - w, plot.top + border_pad),
        LegendLocation::UpperLeft => (plot.left + border_pad, plot.top + border_pad),
        LegendLocation::LowerLeft => (plot.left + border_pad, plot.bottom - border_pad - h),
        LegendLocation::LowerRight => (plot.right - border_pad - w, plot.bottom - border_pad - h),
    };
    RectF::from_ltwh(left, top, w, h)
}

/// Size and place the legend. `polylines` are the drawn data runs in pixel space, used by `Best`.
pub fn layout(
    entries: Vec<LegendEntry>,
    label_widths: &[f32],
    plot: RectF,
    location: LegendLocation,
    polylines: &[Vec<(f32, f32)>],
    m: &LegendMetrics,
) -> Legend {
    let size = frame_size(label_widths, m);
    let resolved = match location {
        LegendLocation::Best => best_corner(size, plot, polylines, m.border_pad),
        other => other,
    };
    let frame = frame_at(resolved, size, plot, m.border_pad);
    Legend { entries, location: resolved, frame }
}

/// Markers under `frame` plus line segments crossing it.
fn coverage(frame: RectF, polylines: &[Vec<(f32, f32)>]) -> usize {
    polylines
        .iter()
        .map(|run| {
            let markers = run.iter().filter(|&&(x, y)| frame.contains(x, y)).count();
            let segments = run.windows(2).filter(|w| frame.intersects_segment(w[0], w[1])).count();
            markers + segments
        })
        .sum()
}

fn best_corner(size: (f32, f32), plot: RectF, polylines: &[Vec<(f32, f32)>], border_pad: f32) -> LegendLocation {
    let mut best = LegendLocation::UpperRight;
    let mut best_hits = usize::MAX;
    for loc in LegendLocation::CORNERS {
        let frame = frame_at(loc, size, plot, border_pad);
        let hits = coverage(frame, polylines);
        debug!("legend candidate {:?}: covers {} markers/segments", loc, hits);
        if hits < best_hits {
            best = loc;
            best_hits = hits;
        }
    }
    best
}
