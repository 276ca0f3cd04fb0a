// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the series model, chart rendering and scene API.

pub mod axis;
pub mod chart;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod render;
pub mod request;
pub mod scale;
pub mod scene;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use error::ChartError;
pub use figure::Figure;
pub use legend::{Legend, LegendEntry, LegendLocation};
pub use request::{render, ChartRequest};
pub use scene::{PlotLine, Scene};
pub use series::{Point, Series, SeriesCollection};
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
