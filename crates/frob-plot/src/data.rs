// File: crates/frob-plot/src/data.rs
// Summary: Load a series collection from a `series,x,y` CSV file.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chart_core::SeriesCollection;
use log::debug;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Row {
    series: String,
    x: f64,
    y: f64,
}

/// Read rows into series grouped by first appearance; points keep file order.
pub fn read_series<R: Read>(reader: R) -> Result<SeriesCollection> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = SeriesCollection::new();
    for (i, rec) in rdr.deserialize::<Row>().enumerate() {
        // header is line 1
        let row = rec.with_context(|| format!("line {}: expected `series,x,y`", i + 2))?;
        out.push(&row.series, (row.x, row.y));
    }
    Ok(out)
}

pub fn load_series_csv(path: &Path) -> Result<SeriesCollection> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let series = read_series(file).with_context(|| format!("reading {}", path.display()))?;
    debug!("loaded {} series ({} points) from {}", series.len(), series.point_count(), path.display());
    Ok(series)
}
