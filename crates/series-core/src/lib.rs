// File: crates/series-core/src/lib.rs
// Summary: Core library entry point; exports period records, series model and the reshaper.

pub mod error;
pub mod period;
pub mod series;
pub mod field;
pub mod reshape;
pub mod summary;
pub mod extent;
pub mod palette;
pub mod memo;

pub use error::{ReshapeError, Result};
pub use period::{PeriodCollection, PeriodRecord};
pub use series::{Series, SeriesList, SeriesPoint};
pub use field::{monthly_sales_specs, overview_specs, Field, FieldSelector, SeriesSpec};
pub use reshape::{reshape, Reshaper};
pub use summary::{format_change, summarize, LatestPeriod, PeriodSummary};
pub use extent::ValueExtent;
pub use palette::Palette;
pub use memo::MemoizedReshaper;
