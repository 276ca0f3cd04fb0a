// File: crates/chart-core/src/series.rs
// Summary: Named XY line series and the ordered, name-unique collection charts consume.

use indexmap::IndexMap;

/// One data point: (x, y). Values are not validated.
pub type Point = (f64, f64);

/// A named, ordered sequence of points drawn as one polyline with markers.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub data: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data: Vec::new() }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<Point>) -> Self {
        Self { name: name.into(), data }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.data.push((x, y));
    }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn len(&self) -> usize { self.data.len() }
}

/// Ordered mapping from series name to points.
/// Iteration follows first insertion; re-inserting a name replaces its points in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesCollection {
    entries: IndexMap<String, Vec<Point>>,
}

impl SeriesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the points of `name`. Returns the previous points if the name existed.
    pub fn insert(&mut self, name: impl Into<String>, data: Vec<Point>) -> Option<Vec<Point>> {
        self.entries.insert(name.into(), data)
    }

    pub fn add_series(&mut self, series: Series) -> Option<Vec<Point>> {
        self.insert(series.name, series.data)
    }

    /// Append one point to `name`, creating the series at the end if it is new.
    pub fn push(&mut self, name: &str, point: Point) {
        match self.entries.get_mut(name) {
            Some(data) => data.push(point),
            None => {
                self.entries.insert(name.to_string(), vec![point]);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Point]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Point])> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<Point>)> for SeriesCollection {
    fn from_iter<I: IntoIterator<Item = (S, Vec<Point>)>>(iter: I) -> Self {
        let mut c = SeriesCollection::new();
        for (name, data) in iter {
            c.insert(name, data);
        }
        c
    }
}

impl FromIterator<Series> for SeriesCollection {
    fn from_iter<I: IntoIterator<Item = Series>>(iter: I) -> Self {
        let mut c = SeriesCollection::new();
        for s in iter {
            c.add_series(s);
        }
        c
    }
}
