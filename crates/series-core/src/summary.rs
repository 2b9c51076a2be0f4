// File: crates/series-core/src/summary.rs
// Summary: Stat-card figures over a period collection (totals, latest period, period-over-period change).

use serde::Serialize;

use crate::period::PeriodCollection;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LatestPeriod {
    pub period: String,
    pub total_primary: Option<f64>,
    pub total_secondary: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub periods: usize,
    /// Sums skip missing and non-finite values.
    pub total_primary: f64,
    pub total_secondary: f64,
    pub latest: Option<LatestPeriod>,
    /// Change of the primary total between the last two periods, as a fraction.
    pub primary_change: Option<f64>,
}

pub fn summarize<K>(input: &PeriodCollection<K>) -> PeriodSummary {
    let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
    let total_primary = input.records().filter_map(|r| finite(r.total_primary)).sum();
    let total_secondary = input.records().filter_map(|r| finite(r.total_secondary)).sum();

    let mut tail = input.records().rev();
    let last = tail.next();
    let prev = tail.next();

    let primary_change = match (prev.and_then(|r| finite(r.total_primary)), last.and_then(|r| finite(r.total_primary))) {
        (Some(p), Some(c)) if p != 0.0 => Some((c - p) / p.abs()),
        _ => None,
    };

    PeriodSummary {
        periods: input.len(),
        total_primary,
        total_secondary,
        latest: last.map(|r| LatestPeriod {
            period: r.period.clone(),
            total_primary: r.total_primary,
            total_secondary: r.total_secondary,
        }),
        primary_change,
    }
}

/// Format a fractional change as a signed whole percentage, e.g. `+14%`.
pub fn format_change(change: f64) -> String {
    let pct = (change * 100.0).round();
    if pct >= 0.0 {
        format!("+{}%", pct.abs())
    } else {
        format!("{}%", pct)
    }
}
