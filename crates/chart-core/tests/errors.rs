// File: crates/chart-core/tests/errors.rs
// Purpose: Error taxonomy: unwritable output paths and data the autoscaler cannot handle.

use chart_core::{render, ChartError, ChartRequest, RenderOptions, SeriesCollection};

fn one_series() -> SeriesCollection {
    [("a", vec![(1.0, 2.0), (2.0, 3.0)])].into_iter().collect()
}

#[test]
fn missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("does-not-exist").join("chart.png");
    match render(&one_series(), "x", "y", &out) {
        Err(ChartError::Io { path, .. }) => assert_eq!(path, out),
        other => panic!("expected io error, got {:?}", other),
    }
    assert!(!out.parent().unwrap().exists(), "renderer must not create directories");
}

#[test]
fn all_nan_series_is_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nan.png");
    let c: SeriesCollection = [("nan", vec![(f64::NAN, f64::NAN), (1.0, f64::NAN)])].into_iter().collect();
    let err = render(&c, "x", "y", &out).unwrap_err();
    assert!(matches!(err, ChartError::Render(_)), "got {:?}", err);
    assert!(!out.exists());
}

#[test]
fn zero_sized_canvas_is_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = RenderOptions::default();
    opts.width_in = 0.0;
    let err = ChartRequest::new(one_series(), "x", "y", dir.path().join("z.png"))
        .render(&opts)
        .unwrap_err();
    assert!(matches!(err, ChartError::Render(_)));
}

#[test]
fn error_messages_name_the_path() {
    let out = std::path::PathBuf::from("/definitely/not/here/chart.png");
    let err = render(&one_series(), "x", "y", &out).unwrap_err();
    assert!(err.to_string().contains("chart.png"));
}
