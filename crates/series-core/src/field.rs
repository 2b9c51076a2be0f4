// File: crates/series-core/src/field.rs
// Summary: Field selectors and series descriptors used to configure the reshaper.

use serde::{Deserialize, Serialize};

use crate::palette::Palette;
use crate::period::PeriodRecord;

/// Resolves the y value of one record. `None` means the value is missing.
pub trait FieldSelector {
    fn select(&self, record: &PeriodRecord) -> Option<f64>;

    /// Name used in error messages.
    fn describe(&self) -> String {
        "custom".to_string()
    }
}

/// Built-in selectors over the record's known fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    TotalPrimary,
    TotalSecondary,
    /// A named entry of `PeriodRecord::metrics`.
    Metric(String),
}

impl FieldSelector for Field {
    fn select(&self, record: &PeriodRecord) -> Option<f64> {
        match self {
            Field::TotalPrimary => record.total_primary,
            Field::TotalSecondary => record.total_secondary,
            Field::Metric(name) => record.metric(name),
        }
    }

    fn describe(&self) -> String {
        match self {
            Field::TotalPrimary => "totalPrimary".to_string(),
            Field::TotalSecondary => "totalSecondary".to_string(),
            Field::Metric(name) => name.clone(),
        }
    }
}

impl<F> FieldSelector for F
where
    F: Fn(&PeriodRecord) -> Option<f64>,
{
    fn select(&self, record: &PeriodRecord) -> Option<f64> {
        self(record)
    }
}

/// Descriptor for one output series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec<S = Field> {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub field: S,
    /// Emit running totals instead of raw values.
    #[serde(default)]
    pub accumulate: bool,
}

impl<S> SeriesSpec<S> {
    pub fn new(id: impl Into<String>, field: S) -> Self {
        Self { id: id.into(), color: None, field, accumulate: false }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn accumulated(mut self) -> Self {
        self.accumulate = true;
        self
    }
}

/// The monthly sales chart: "Total Sales" then "Total Units".
pub fn monthly_sales_specs(palette: &Palette) -> Vec<SeriesSpec> {
    vec![
        SeriesSpec::new("Total Sales", Field::TotalPrimary).with_color(palette.secondary_main),
        SeriesSpec::new("Total Units", Field::TotalSecondary).with_color(palette.secondary_600),
    ]
}

/// Same fields as the monthly chart, as cumulative totals (overview chart).
pub fn overview_specs(palette: &Palette) -> Vec<SeriesSpec> {
    monthly_sales_specs(palette).into_iter().map(SeriesSpec::accumulated).collect()
}
