// File: crates/chart-core/src/scene.rs
// Summary: Pre-rasterization chart model: tight layout, ticks, per-series polylines and legend.

use log::debug;
use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::grid::Ticks;
use crate::legend::{self, Legend, LegendEntry, LegendMetrics};
use crate::scale::LinearScale;
use crate::series::Point;
use crate::text::TextShaper;
use crate::types::{pt_to_px, Insets};
use crate::view::ViewState;
use crate::{Chart, RenderOptions};

/// Upper bound on major tick intervals per axis.
const MAX_BINS: usize = 9;

/// Stroke, marker and font sizes in pixels for one output resolution.
#[derive(Clone, Copy, Debug)]
pub struct StyleMetrics {
    pub font_size: f32,
    pub line_width: f32,
    pub marker_radius: f32,
    pub grid_width: f32,
    pub grid_dash: [f32; 2],
    pub spine_width: f32,
    pub tick_length: f32,
    pub tick_pad: f32,
    pub label_pad: f32,
    pub layout_pad: f32,
}

impl StyleMetrics {
    pub fn for_dpi(dpi: f32) -> Self {
        let px = |pt: f32| pt_to_px(pt, dpi);
        let font_size = px(10.0);
        let grid_width = px(0.5);
        Self {
            font_size,
            line_width: px(1.5),
            marker_radius: px(3.0),
            grid_width,
            grid_dash: [grid_width * 3.7, grid_width * 1.6],
            spine_width: px(0.8),
            tick_length: px(3.5),
            tick_pad: px(3.5),
            label_pad: px(4.0),
            layout_pad: font_size * 1.08,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisScene {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Ticks,
    pub tick_labels: Vec<String>,
}

impl AxisScene {
    fn new(label: &str, min: f64, max: f64, bins: usize) -> Self {
        let ticks = Ticks::for_range(min, max, bins);
        let tick_labels = ticks.labels();
        Self { label: label.to_string(), min, max, ticks, tick_labels }
    }
}

/// One series as it will be drawn: its data in caller order and its assigned color.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotLine {
    pub label: String,
    pub color: skia::Color,
    pub points: Vec<Point>,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub plot: RectF,
    pub x: AxisScene,
    pub y: AxisScene,
    pub lines: Vec<PlotLine>,
    pub legend: Option<Legend>,
    pub legend_metrics: LegendMetrics,
    pub style: StyleMetrics,
}

impl Scene {
    pub fn x_scale(&self) -> LinearScale {
        LinearScale::new(self.plot.left, self.plot.right, self.x.min, self.x.max)
    }

    pub fn y_scale(&self) -> LinearScale {
        LinearScale::new(self.plot.bottom, self.plot.top, self.y.min, self.y.max)
    }

    /// Pixel polylines for `line`, split wherever a coordinate is not finite.
    pub fn segments(&self, line: &PlotLine) -> Vec<Vec<(f32, f32)>> {
        let (sx, sy) = (self.x_scale(), self.y_scale());
        let mut out = Vec::new();
        let mut run: Vec<(f32, f32)> = Vec::new();
        for &(x, y) in &line.points {
            if x.is_finite() && y.is_finite() {
                run.push((sx.to_px(x), sy.to_px(y)));
            } else if !run.is_empty() {
                out.push(std::mem::take(&mut run));
            }
        }
        if !run.is_empty() {
            out.push(run);
        }
        out
    }

    /// Pixel positions of every finite point of `line`, one marker each.
    pub fn markers(&self, line: &PlotLine) -> Vec<(f32, f32)> {
        let (sx, sy) = (self.x_scale(), self.y_scale());
        line.points
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|&(x, y)| (sx.to_px(x), sy.to_px(y)))
            .collect()
    }

    /// Labels of every drawn line, in draw order.
    pub fn line_labels(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.label.as_str()).collect()
    }

    /// Build the scene for `chart` on a `width` x `height` px canvas.
    pub fn build(chart: &Chart, opts: &RenderOptions, (width, height): (i32, i32), shaper: &TextShaper) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::render(format!("invalid canvas size {}x{}", width, height)));
        }
        let style = StyleMetrics::for_dpi(opts.dpi);

        let view = if chart.autoscale {
            ViewState::from_chart(chart)?
        } else {
            ViewState { x_min: chart.x_axis.min, x_max: chart.x_axis.max, y_min: chart.y_axis.min, y_max: chart.y_axis.max }
        };
        if !(view.x_min.is_finite() && view.x_max.is_finite() && view.y_min.is_finite() && view.y_max.is_finite()) {
            return Err(ChartError::render("axis range is not finite"));
        }

        let bins = |len_px: i32| ((len_px as f32 / (style.font_size * 3.5)) as usize).clamp(3, MAX_BINS);
        let x = AxisScene::new(&chart.x_axis.label, view.x_min, view.x_max, bins(width));
        let y = AxisScene::new(&chart.y_axis.label, view.y_min, view.y_max, bins(height));

        let measure = |s: &str| -> (f32, f32) {
            if opts.draw_labels {
                shaper.measure(s, style.font_size)
            } else {
                // fixed estimate so layout stays deterministic without fonts
                (s.chars().count() as f32 * style.font_size * 0.6, style.font_size * 1.2)
            }
        };

        let insets = tight_insets(&x, &y, &style, &measure);
        let plot = RectF::from_ltwh(
            insets.left,
            insets.top,
            width as f32 - insets.hsum(),
            height as f32 - insets.vsum(),
        );
        if plot.width() <= 1.0 || plot.height() <= 1.0 {
            return Err(ChartError::render(format!(
                "canvas {}x{} too small for axis labels",
                width, height
            )));
        }
        debug!("plot rect {:?}, x [{}, {}], y [{}, {}]", plot, x.min, x.max, y.min, y.max);

        let lines: Vec<PlotLine> = chart
            .series
            .iter()
            .enumerate()
            .map(|(i, (name, data))| PlotLine {
                label: name.to_string(),
                color: opts.theme.series_color(i),
                points: data.to_vec(),
            })
            .collect();

        let mut scene = Scene {
            width,
            height,
            insets,
            plot,
            x,
            y,
            lines,
            legend: None,
            legend_metrics: LegendMetrics::for_font(style.font_size),
            style,
        };

        if let Some(location) = opts.legend {
            let entries: Vec<LegendEntry> = scene
                .lines
                .iter()
                .map(|l| LegendEntry { label: l.label.clone(), color: l.color })
                .collect();
            let widths: Vec<f32> = entries.iter().map(|e| measure(&e.label).0).collect();
            let runs: Vec<Vec<(f32, f32)>> = scene.lines.iter().flat_map(|l| scene.segments(l)).collect();
            let metrics = scene.legend_metrics;
            scene.legend = Some(legend::layout(entries, &widths, plot, location, &runs, &metrics));
        }
        Ok(scene)
    }
}

/// Insets that fit tick labels, tick marks and axis labels inside the canvas.
fn tight_insets(x: &AxisScene, y: &AxisScene, style: &StyleMetrics, measure: &dyn Fn(&str) -> (f32, f32)) -> Insets {
    let tick_out = style.tick_length + style.tick_pad;
    let ytick_w = y.tick_labels.iter().map(|s| measure(s).0).fold(0.0f32, f32::max);
    let ytick_h = y.tick_labels.iter().map(|s| measure(s).1).fold(0.0f32, f32::max);
    let xtick_h = x.tick_labels.iter().map(|s| measure(s).1).fold(0.0f32, f32::max);
    let last_xtick_w = x.tick_labels.last().map(|s| measure(s).0).unwrap_or(0.0);
    let (_, ylabel_h) = measure(&y.label);
    let (_, xlabel_h) = measure(&x.label);

    let left = style.layout_pad
        + ylabel_h
        + if ylabel_h > 0.0 { style.label_pad } else { 0.0 }
        + ytick_w
        + tick_out;
    let bottom = style.layout_pad
        + xlabel_h
        + if xlabel_h > 0.0 { style.label_pad } else { 0.0 }
        + xtick_h
        + tick_out;
    let top = style.layout_pad + ytick_h * 0.5;
    let right = style.layout_pad + last_xtick_w * 0.5;
    Insets::new(left, right, top, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_scales_with_dpi() {
        let lo = StyleMetrics::for_dpi(72.0);
        let hi = StyleMetrics::for_dpi(144.0);
        assert_eq!(lo.font_size, 10.0);
        assert_eq!(hi.font_size, 20.0);
        assert_eq!(hi.line_width, 2.0 * lo.line_width);
    }

    #[test]
    fn insets_grow_with_labels() {
        let style = StyleMetrics::for_dpi(100.0);
        let est = |s: &str| -> (f32, f32) { (s.len() as f32 * 6.0, if s.is_empty() { 0.0 } else { 12.0 }) };
        let x = AxisScene::new("", 0.0, 1.0, 5);
        let y_short = AxisScene::new("", 0.0, 1.0, 5);
        let y_long = AxisScene::new("a long y label", 0.0, 10000.0, 5);
        let a = tight_insets(&x, &y_short, &style, &est);
        let b = tight_insets(&x, &y_long, &style, &est);
        assert!(b.left > a.left);
        assert_eq!(a.bottom, b.bottom);
    }
}
