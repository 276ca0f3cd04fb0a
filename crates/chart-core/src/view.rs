// File: crates/chart-core/src/view.rs
// Visible data ranges and autoscale over finite coordinates.

use log::{debug, warn};

use crate::error::{ChartError, Result};
use crate::series::SeriesCollection;
use crate::Chart;

/// Fraction of the data span added on each side of the view.
pub const MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 }
    }
}

impl ViewState {
    /// Autoscale over every finite coordinate of `series`.
    ///
    /// An empty collection (or one whose series hold no points) yields the unit view.
    /// Points present but none finite cannot be scaled and produce `ChartError::Render`.
    pub fn from_series(series: &SeriesCollection) -> Result<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut any_finite = false;
        for (name, data) in series.iter() {
            let mut finite_here = 0usize;
            for &(x, y) in data {
                if x.is_finite() && y.is_finite() {
                    x_min = x_min.min(x);
                    x_max = x_max.max(x);
                    y_min = y_min.min(y);
                    y_max = y_max.max(y);
                    finite_here += 1;
                }
            }
            if !data.is_empty() && finite_here == 0 {
                warn!("series '{}' has {} points but none finite", name, data.len());
            }
            any_finite |= finite_here > 0;
        }

        if !any_finite {
            if series.point_count() > 0 {
                return Err(ChartError::render(
                    "cannot autoscale axes: no finite data points in any series",
                ));
            }
            debug!("no data points; using unit view");
            return Ok(Self::default());
        }

        let (x_min, x_max) = with_margin(nonsingular(x_min, x_max));
        let (y_min, y_max) = with_margin(nonsingular(y_min, y_max));
        Ok(Self { x_min, x_max, y_min, y_max })
    }

    pub fn from_chart(chart: &Chart) -> Result<Self> {
        Self::from_series(&chart.series)
    }
}

/// Widen a zero-width interval around its value.
fn nonsingular(lo: f64, hi: f64) -> (f64, f64) {
    if (hi - lo).abs() > f64::EPSILON * lo.abs().max(hi.abs()).max(1.0) {
        return (lo, hi);
    }
    if lo == 0.0 {
        (-0.05, 0.05)
    } else {
        let d = lo.abs() * 0.05;
        (lo - d, hi + d)
    }
}

fn with_margin((lo, hi): (f64, f64)) -> (f64, f64) {
    let m = (hi - lo) * MARGIN;
    (lo - m, hi + m)
}
