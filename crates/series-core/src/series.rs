// File: crates/series-core/src/series.rs
// Summary: Series model for multi-line charts: labelled points, named series, ordered series list.
// Notes:
// - Serialized shape is what line renderers expect:
//   `[{"id": .., "color": .., "data": [{"x": .., "y": ..}]}]`.

use std::ops::Index;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: String,
    pub y: f64,
}

impl SeriesPoint {
    pub fn new(x: impl Into<String>, y: f64) -> Self {
        Self { x: x.into(), y }
    }
}

/// One named line; points are in source iteration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    /// Display hint passed through to the renderer untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "data")]
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(id: impl Into<String>, color: Option<String>) -> Self {
        Self { id: id.into(), color, points: Vec::new() }
    }

    pub fn with_points(id: impl Into<String>, color: Option<String>, points: Vec<SeriesPoint>) -> Self {
        Self { id: id.into(), color, points }
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Min and max y over this series, `None` when empty.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut it = self.points.iter().map(|p| p.y);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

/// Ordered output of one reshape call. Position is significant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesList(Vec<Series>);

impl SeriesList {
    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Series> { self.0.iter() }

    pub fn as_slice(&self) -> &[Series] { &self.0 }

    pub fn get(&self, i: usize) -> Option<&Series> { self.0.get(i) }

    /// First series with the given id.
    pub fn by_id(&self, id: &str) -> Option<&Series> {
        self.0.iter().find(|s| s.id == id)
    }

    pub fn into_inner(self) -> Vec<Series> { self.0 }
}

impl From<Vec<Series>> for SeriesList {
    fn from(v: Vec<Series>) -> Self { Self(v) }
}

impl Index<usize> for SeriesList {
    type Output = Series;

    fn index(&self, i: usize) -> &Series { &self.0[i] }
}

impl<'a> IntoIterator for &'a SeriesList {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl IntoIterator for SeriesList {
    type Item = Series;
    type IntoIter = std::vec::IntoIter<Series>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_range_over_points() {
        let s = Series::with_points(
            "a",
            None,
            vec![SeriesPoint::new("Jan", 3.0), SeriesPoint::new("Feb", -1.0), SeriesPoint::new("Mar", 2.0)],
        );
        assert_eq!(s.y_range(), Some((-1.0, 3.0)));
        assert_eq!(Series::new("b", None).y_range(), None);
    }

    #[test]
    fn lookup_by_id_and_position() {
        let list = SeriesList::from(vec![Series::new("Total Sales", None), Series::new("Total Units", None)]);
        assert_eq!(list[1].id, "Total Units");
        assert!(list.by_id("Total Sales").is_some());
        assert!(list.by_id("Missing").is_none());
    }
}
