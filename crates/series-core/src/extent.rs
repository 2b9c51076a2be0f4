// File: crates/series-core/src/extent.rs
// Summary: Value extent over a series list, for renderers that autoscale the y axis.

use serde::Serialize;

use crate::series::SeriesList;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ValueExtent {
    pub min: f64,
    pub max: f64,
}

impl ValueExtent {
    pub fn span(&self) -> f64 { self.max - self.min }
}

impl SeriesList {
    /// Min/max y across every point, padded by `margin_frac` of the span on each side.
    /// A flat range is widened to 1.0 before padding. `None` without points.
    pub fn value_extent(&self, margin_frac: f64) -> Option<ValueExtent> {
        let (mut min, mut max) = self
            .iter()
            .filter_map(|s| s.y_range())
            .reduce(|(a, b), (c, d)| (a.min(c), b.max(d)))?;
        if (max - min).abs() < 1e-9 { max = min + 1.0; }
        let m = (max - min) * margin_frac.max(0.0);
        min -= m;
        max += m;
        Some(ValueExtent { min, max })
    }
}
