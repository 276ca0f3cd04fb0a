// File: crates/frob-plot/src/builtin.rs
// Summary: Built-in reconstruction-error tables (image -> (k, error)) for rank-k approximations.

use chart_core::{Point, SeriesCollection};

/// A named table: one entry per image, points as (k, value) in measurement order.
pub type Table = &'static [(&'static str, &'static [Point])];

/// Frobenius norm ||A - A_k|| per image.
pub const FROBENIUS: Table = &[
    (
        "einstein.png",
        &[(80.0, 363.79527), (40.0, 1168.53798), (30.0, 1572.21786), (20.0, 2129.10169), (10.0, 3250.57103)],
    ),
    ("globe.png", &[(20.0, 3259.34411), (10.0, 4934.48761)]),
    ("greyscale.png", &[(20.0, 1012.42629), (10.0, 2512.75645)]),
    ("test.png", &[(20.0, 1004.19470), (10.0, 1546.89140)]),
];

/// Frobenius norm divided by the pixel count.
pub const PER_PIXEL: Table = &[
    (
        "einstein.png",
        &[(80.0, 0.01075), (40.0, 0.03452), (30.0, 0.04644), (20.0, 0.06289), (10.0, 0.09602)],
    ),
    ("globe.png", &[(20.0, 0.03460), (10.0, 0.05238)]),
    ("greyscale.png", &[(20.0, 0.00386), (10.0, 0.00959)]),
    ("test.png", &[(20.0, 0.12099), (10.0, 0.18637)]),
];

pub fn collection(table: Table) -> SeriesCollection {
    table.iter().map(|&(name, points)| (name, points.to_vec())).collect()
}
