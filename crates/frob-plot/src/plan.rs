// File: crates/frob-plot/src/plan.rs
// Summary: The two chart requests this tool produces and where their data comes from.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chart_core::ChartRequest;

use crate::builtin::{self, Table};
use crate::data::load_series_csv;

/// Static description of one output chart.
pub struct ChartSpec {
    pub name: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub file_name: &'static str,
    pub builtin: Table,
}

pub const FROBENIUS_CHART: ChartSpec = ChartSpec {
    name: "frobenius",
    x_label: "k",
    y_label: "Frobenius norm (||A - A_c||)",
    file_name: "frobenius_error_plot.png",
    builtin: builtin::FROBENIUS,
};

pub const PER_PIXEL_CHART: ChartSpec = ChartSpec {
    name: "per-pixel",
    x_label: "k",
    y_label: "Error per pixel",
    file_name: "frobenius_error_plot_pp.png",
    builtin: builtin::PER_PIXEL,
};

/// Optional CSV replacements for the built-in tables.
#[derive(Debug, Default, Clone)]
pub struct Sources {
    pub frobenius: Option<PathBuf>,
    pub per_pixel: Option<PathBuf>,
}

impl ChartSpec {
    pub fn request(&self, csv: Option<&Path>, out_dir: &Path) -> Result<ChartRequest> {
        let series = match csv {
            Some(path) => load_series_csv(path)?,
            None => builtin::collection(self.builtin),
        };
        Ok(ChartRequest::new(series, self.x_label, self.y_label, out_dir.join(self.file_name)))
    }
}

/// Requests in render order: Frobenius norm first, then error per pixel.
pub fn requests(sources: &Sources, out_dir: &Path) -> Result<Vec<(&'static str, ChartRequest)>> {
    Ok(vec![
        (FROBENIUS_CHART.name, FROBENIUS_CHART.request(sources.frobenius.as_deref(), out_dir)?),
        (PER_PIXEL_CHART.name, PER_PIXEL_CHART.request(sources.per_pixel.as_deref(), out_dir)?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_matches_builtin_outputs() {
        let plan = requests(&Sources::default(), Path::new("../figs")).unwrap();
        assert_eq!(plan.len(), 2);
        let (name, first) = &plan[0];
        assert_eq!(*name, "frobenius");
        assert_eq!(first.output, PathBuf::from("../figs/frobenius_error_plot.png"));
        assert_eq!(first.x_label, "k");
        assert_eq!(first.y_label, "Frobenius norm (||A - A_c||)");
        assert_eq!(first.series.len(), 4);
        let (_, second) = &plan[1];
        assert_eq!(second.output, PathBuf::from("../figs/frobenius_error_plot_pp.png"));
        assert_eq!(second.y_label, "Error per pixel");
    }

    #[test]
    fn csv_replaces_one_table() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("pp.csv");
        std::fs::write(&csv, "series,x,y\nonly.png,5,0.5\n").unwrap();
        let sources = Sources { frobenius: None, per_pixel: Some(csv) };
        let plan = requests(&sources, dir.path()).unwrap();
        assert_eq!(plan[0].1.series.len(), 4);
        assert_eq!(plan[1].1.series.names().collect::<Vec<_>>(), vec!["only.png"]);
    }

    #[test]
    fn plan_renders_into_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = chart_core::RenderOptions::default();
        opts.dpi = 40.0;
        for (_, req) in requests(&Sources::default(), dir.path()).unwrap() {
            req.render(&opts).unwrap();
            assert!(std::fs::metadata(&req.output).unwrap().len() > 0);
        }
    }
}
