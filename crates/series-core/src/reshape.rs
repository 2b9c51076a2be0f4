// File: crates/series-core/src/reshape.rs
// Summary: Pure transform from a period collection to an ordered multi-series list.
// Notes:
// - One pass per descriptor, no sorting. Output order follows descriptor order,
//   point order follows the collection's iteration order.
// - Fails fast: a missing or non-finite value aborts the whole call.

use tracing::{debug, instrument, trace};

use crate::error::{ReshapeError, Result};
use crate::field::{Field, FieldSelector, SeriesSpec};
use crate::period::PeriodCollection;
use crate::series::{Series, SeriesList, SeriesPoint};

/// Reshape `input` into one series per descriptor in `specs`.
#[instrument(level = "debug", skip_all, fields(series = specs.len(), periods = input.len()))]
pub fn reshape<K, S: FieldSelector>(input: &PeriodCollection<K>, specs: &[SeriesSpec<S>]) -> Result<SeriesList> {
    if specs.is_empty() {
        return Err(ReshapeError::InvalidInput("series configuration is empty".to_string()));
    }
    let mut out = Vec::with_capacity(specs.len());
    for spec in specs {
        out.push(build_series(input, spec)?);
    }
    debug!("reshaped {} periods into {} series", input.len(), out.len());
    Ok(SeriesList::from(out))
}

fn build_series<K, S: FieldSelector>(input: &PeriodCollection<K>, spec: &SeriesSpec<S>) -> Result<Series> {
    let mut points = Vec::with_capacity(input.len());
    let mut running = 0.0f64;
    for record in input.records() {
        let y = spec
            .field
            .select(record)
            .filter(|v| v.is_finite())
            .ok_or_else(|| ReshapeError::FieldMissing {
                series: spec.id.clone(),
                field: spec.field.describe(),
                period: record.period.clone(),
            })?;
        let y = if spec.accumulate {
            running += y;
            if !running.is_finite() {
                return Err(ReshapeError::NonFiniteTotal {
                    series: spec.id.clone(),
                    period: record.period.clone(),
                });
            }
            running
        } else {
            y
        };
        points.push(SeriesPoint::new(record.period.clone(), y));
    }
    trace!(series = %spec.id, points = points.len(), "series built");
    Ok(Series::with_points(spec.id.clone(), spec.color.clone(), points))
}

/// A validated, non-empty descriptor list that can be applied repeatedly.
#[derive(Clone, Debug)]
pub struct Reshaper<S = Field> {
    specs: Vec<SeriesSpec<S>>,
}

impl<S: FieldSelector> Reshaper<S> {
    pub fn new(specs: Vec<SeriesSpec<S>>) -> Result<Self> {
        if specs.is_empty() {
            return Err(ReshapeError::InvalidInput("series configuration is empty".to_string()));
        }
        Ok(Self { specs })
    }

    pub fn specs(&self) -> &[SeriesSpec<S>] { &self.specs }

    pub fn apply<K>(&self, input: &PeriodCollection<K>) -> Result<SeriesList> {
        reshape(input, &self.specs)
    }
}
