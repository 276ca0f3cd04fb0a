// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the series color cycle.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub grid_minor: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_face: skia::Color,
    pub legend_frame: skia::Color,
    /// Series colors, assigned in draw order and cycled.
    pub palette: [skia::Color; 10],
}

/// Ten-color categorical cycle ("tab10").
fn tab10() -> [skia::Color; 10] {
    [
        skia::Color::from_argb(255, 0x1f, 0x77, 0xb4), // blue
        skia::Color::from_argb(255, 0xff, 0x7f, 0x0e), // orange
        skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c), // green
        skia::Color::from_argb(255, 0xd6, 0x27, 0x28), // red
        skia::Color::from_argb(255, 0x94, 0x67, 0xbd), // purple
        skia::Color::from_argb(255, 0x8c, 0x56, 0x4b), // brown
        skia::Color::from_argb(255, 0xe3, 0x77, 0xc2), // pink
        skia::Color::from_argb(255, 0x7f, 0x7f, 0x7f), // gray
        skia::Color::from_argb(255, 0xbc, 0xbd, 0x22), // olive
        skia::Color::from_argb(255, 0x17, 0xbe, 0xcf), // cyan
    ]
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 176, 176, 176),
            grid_minor: skia::Color::from_argb(255, 222, 222, 222),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            legend_face: skia::Color::from_argb(204, 255, 255, 255),
            legend_frame: skia::Color::from_argb(255, 204, 204, 204),
            palette: tab10(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 70, 70, 78),
            grid_minor: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_face: skia::Color::from_argb(204, 28, 28, 32),
            legend_frame: skia::Color::from_argb(255, 90, 90, 100),
            palette: tab10(),
        }
    }

    /// Color for the `index`-th series.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        let t = Theme::light();
        assert_eq!(t.series_color(0), t.series_color(10));
        assert_ne!(t.series_color(0), t.series_color(1));
    }

    #[test]
    fn find_by_name() {
        assert_eq!(find("DARK").map(|t| t.name), Some("dark"));
        assert!(find("neon").is_none());
    }
}
