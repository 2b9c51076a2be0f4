// File: crates/series-core/tests/concurrency.rs
// Purpose: Reshaper and its outputs can be shared across threads.

use std::thread;

use series_core::{
    monthly_sales_specs, Field, MemoizedReshaper, Palette, PeriodCollection, PeriodRecord, Reshaper, SeriesList,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn core_types_are_send_and_sync() {
    assert_send_sync::<Reshaper<Field>>();
    assert_send_sync::<SeriesList>();
    assert_send_sync::<PeriodCollection>();
    assert_send_sync::<MemoizedReshaper<Field>>();
}

#[test]
fn concurrent_calls_agree() {
    let reshaper = Reshaper::new(monthly_sales_specs(&Palette::dark())).expect("specs");
    let input = PeriodCollection::from_records((0..24).map(|i| PeriodRecord::new(format!("P{i}"), i as f64 * 10.0, i as f64)));
    let want = reshaper.apply(&input).expect("reshape");

    thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| reshaper.apply(&input).expect("reshape"))).collect();
        for h in handles {
            assert_eq!(h.join().expect("thread"), want);
        }
    });
}
