// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small charts to PNG bytes (labels off to avoid font variance).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for an exact match.
// - Always checks the decoded pixels structurally: background, and a series-colored
//   marker at every point position the scene reports.

use chart_core::{Chart, RenderOptions, Scene, SeriesCollection};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn snapshot_opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    opts.dpi = 60.0;
    opts
}

fn render_bytes(series: SeriesCollection) -> Vec<u8> {
    Chart::from_series(series, "k", "err").render_to_png_bytes(&snapshot_opts()).expect("render bytes")
}

/// Render `series` and assert the raster agrees with the scene it was laid out from.
fn render_and_check(series: SeriesCollection) -> Vec<u8> {
    let opts = snapshot_opts();
    let chart = Chart::from_series(series, "k", "err");
    let scene: Scene = chart.scene(&opts).expect("scene");
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width() as i32, img.height() as i32), (scene.width, scene.height));

    let bg = opts.theme.background;
    assert_eq!(img.get_pixel(0, 0).0, [bg.r(), bg.g(), bg.b(), 255]);

    let mut checked = 0;
    for line in &scene.lines {
        let want = [line.color.r(), line.color.g(), line.color.b(), 255];
        for (x, y) in scene.markers(line) {
            if scene.legend.as_ref().is_some_and(|l| l.frame.contains(x, y)) {
                continue;
            }
            let (cx, cy) = (x.round() as i64, y.round() as i64);
            let hit = (-1..=1).any(|dy| {
                (-1..=1).any(|dx| {
                    let (px, py) = (cx + dx, cy + dy);
                    px >= 0
                        && py >= 0
                        && (px as u32) < img.width()
                        && (py as u32) < img.height()
                        && img.get_pixel(px as u32, py as u32).0 == want
                })
            });
            assert!(hit, "no {} marker pixel near ({x}, {y})", line.label);
            checked += 1;
        }
    }
    assert!(checked > 0, "no markers were checked");
    bytes
}

#[test]
fn golden_multi_series() {
    let series: SeriesCollection = [
        ("einstein.png", vec![(80.0, 0.01075), (40.0, 0.03452), (30.0, 0.04644), (20.0, 0.06289), (10.0, 0.09602)]),
        ("globe.png", vec![(20.0, 0.03460), (10.0, 0.05238)]),
        ("greyscale.png", vec![(20.0, 0.00386), (10.0, 0.00959)]),
        ("test.png", vec![(20.0, 0.12099), (10.0, 0.18637)]),
    ]
    .into_iter()
    .collect();
    write_or_compare("multi_series.png", &render_and_check(series));
}

#[test]
fn golden_single_point() {
    let series: SeriesCollection = [("test.png", vec![(20.0, 0.0)])].into_iter().collect();
    write_or_compare("single_point.png", &render_and_check(series));
}

#[test]
fn rendering_is_deterministic() {
    let series: SeriesCollection = [("a", vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.5)])].into_iter().collect();
    let a = image::load_from_memory(&render_bytes(series.clone())).unwrap().to_rgba8();
    let b = image::load_from_memory(&render_bytes(series)).unwrap().to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
