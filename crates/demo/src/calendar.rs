// File: crates/demo/src/calendar.rs
// Summary: Calendar ordering of month-labelled records, applied before reshaping.

use chrono::Month;
use series_core::PeriodCollection;

/// 0-based month index; unrecognized labels sort after December.
fn month_index(label: &str) -> u32 {
    label.trim().parse::<Month>().map(|m| m.number_from_month() - 1).unwrap_or(12)
}

/// Stable sort by month; records with unknown labels keep their relative order at the end.
pub fn sort_by_calendar(input: PeriodCollection) -> PeriodCollection {
    let mut rows = input.into_iter().collect::<Vec<_>>();
    rows.sort_by_key(|(_, r)| month_index(&r.period));
    rows.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use series_core::PeriodRecord;

    #[test]
    fn sorts_full_and_short_names() {
        let c = PeriodCollection::from_records(vec![
            PeriodRecord::new("March", 3.0, 1.0),
            PeriodRecord::new("Q4", 0.0, 0.0),
            PeriodRecord::new("jan", 1.0, 1.0),
            PeriodRecord::new("February", 2.0, 1.0),
        ]);
        let sorted = sort_by_calendar(c);
        let labels: Vec<&str> = sorted.records().map(|r| r.period.as_str()).collect();
        assert_eq!(labels, ["jan", "February", "March", "Q4"]);
        // keys travel with their records
        assert_eq!(sorted.get("2").map(|r| r.period.as_str()), Some("jan"));
    }
}
