// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG/SVG rendering pipeline using per-call Skia figures.

use std::path::Path;

use log::info;
use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::figure::Figure;
use crate::legend::LegendLocation;
use crate::render::paint_scene;
use crate::scene::Scene;
use crate::series::{Point, Series, SeriesCollection};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{DPI, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN};
use crate::Axis;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
    pub theme: Theme,
    pub minor_grid: bool,
    /// Draw tick, axis and legend text. Off for font-independent snapshots.
    pub draw_labels: bool,
    /// `None` hides the legend.
    pub legend: Option<LegendLocation>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width_in: FIGURE_WIDTH_IN,
            height_in: FIGURE_HEIGHT_IN,
            dpi: DPI,
            theme: Theme::light(),
            minor_grid: true,
            draw_labels: true,
            legend: Some(LegendLocation::Best),
        }
    }
}

impl RenderOptions {
    /// Canvas size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            (self.width_in * self.dpi).round() as i32,
            (self.height_in * self.dpi).round() as i32,
        )
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: SeriesCollection,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Derive axis ranges from the data; when false the axes' min/max are used as is.
    pub autoscale: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: SeriesCollection::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            autoscale: true,
        }
    }

    pub fn with_labels(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self { x_axis: Axis::labeled(x_label), y_axis: Axis::labeled(y_label), ..Self::new() }
    }

    pub fn from_series(series: SeriesCollection, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self { series, ..Self::with_labels(x_label, y_label) }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.add_series(series);
    }

    pub fn insert(&mut self, name: impl Into<String>, data: Vec<Point>) {
        self.series.insert(name, data);
    }

    /// Lay the chart out for the canvas `opts` describes, without drawing anything.
    pub fn scene(&self, opts: &RenderOptions) -> Result<Scene> {
        Scene::build(self, opts, opts.pixel_size(), &TextShaper::new())
    }

    /// Draw onto a caller-owned figure; returns the scene that was painted.
    pub fn draw(&self, figure: &mut Figure, opts: &RenderOptions) -> Result<Scene> {
        let shaper = TextShaper::new();
        let scene = Scene::build(self, opts, figure.size(), &shaper)?;
        paint_scene(figure.canvas(), &scene, opts, &shaper);
        Ok(scene)
    }

    /// Render into a fresh figure and return the encoded PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (w, h) = opts.pixel_size();
        let mut figure = Figure::new(w, h)?;
        self.draw(&mut figure, opts)?;
        figure.encode_png()
    }

    /// Render the chart to a PNG at `output_png_path`. The parent directory must exist;
    /// an existing file is overwritten.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(path, &bytes)?;
        info!("wrote {} ({} series, {} bytes)", path.display(), self.series.len(), bytes.len());
        Ok(())
    }

    /// Render the same scene as vector SVG.
    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let path = output_svg_path.as_ref();
        let (w, h) = opts.pixel_size();
        let shaper = TextShaper::new();
        let scene = Scene::build(self, opts, (w, h), &shaper)?;
        let canvas = skia::svg::Canvas::new(skia::Rect::from_wh(w as f32, h as f32), None);
        paint_scene(&canvas, &scene, opts, &shaper);
        let data = canvas.end();
        write_output(path, data.as_bytes())?;
        info!("wrote {} ({} series)", path.display(), self.series.len());
        Ok(())
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|source| ChartError::Io { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_canvas_is_eight_by_five_at_200_dpi() {
        assert_eq!(RenderOptions::default().pixel_size(), (1600, 1000));
    }
}
