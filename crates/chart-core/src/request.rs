// File: crates/chart-core/src/request.rs
// Summary: One chart request (series, axis labels, output path) and the single-shot render entry point.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::series::SeriesCollection;
use crate::{Chart, RenderOptions};

#[derive(Clone, Debug)]
pub struct ChartRequest {
    pub series: SeriesCollection,
    pub x_label: String,
    pub y_label: String,
    pub output: PathBuf,
}

impl ChartRequest {
    pub fn new(
        series: SeriesCollection,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self { series, x_label: x_label.into(), y_label: y_label.into(), output: output.into() }
    }

    pub fn chart(&self) -> Chart {
        Chart::from_series(self.series.clone(), self.x_label.clone(), self.y_label.clone())
    }

    /// Render to `self.output` as PNG.
    pub fn render(&self, opts: &RenderOptions) -> Result<()> {
        self.chart().render_to_png(opts, &self.output)
    }
}

/// Render `series` as a line chart with markers, gridlines and a legend to `output`
/// using the default canvas (8x5 in at 200 dpi).
pub fn render(
    series: &SeriesCollection,
    x_label: &str,
    y_label: &str,
    output: impl AsRef<Path>,
) -> Result<()> {
    Chart::from_series(series.clone(), x_label, y_label).render_to_png(&RenderOptions::default(), output)
}
