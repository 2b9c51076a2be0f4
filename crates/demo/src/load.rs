// File: crates/demo/src/load.rs
// Summary: Input loaders for the sales payload (JSON as served by the API, or CSV).

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use series_core::{PeriodCollection, PeriodRecord};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Guess from the file extension; JSON unless it says csv.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().map(|e| e.to_string_lossy().to_lowercase()).as_deref() {
            Some("csv") => InputFormat::Csv,
            _ => InputFormat::Json,
        }
    }
}

/// The sales endpoint wraps its monthly records in `monthlyData`.
#[derive(Deserialize)]
struct SalesPayload {
    #[serde(rename = "monthlyData")]
    monthly_data: PeriodCollection,
}

pub fn load(path: &Path, format: InputFormat) -> Result<PeriodCollection> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = std::io::BufReader::new(file);
    match format {
        InputFormat::Json => load_json(reader),
        InputFormat::Csv => load_csv(reader),
    }
}

/// Picks the payload shape first, then parses the text again with the typed
/// target so serde's message (field, line, column) reaches the caller.
pub fn load_json<R: Read>(mut reader: R) -> Result<PeriodCollection> {
    let mut text = String::new();
    reader.read_to_string(&mut text).context("reading sales payload")?;

    let shape: serde_json::Value = serde_json::from_str(&text).context("parsing sales payload")?;
    let wrapped = shape.as_object().is_some_and(|o| o.contains_key("monthlyData"));
    if wrapped {
        let payload: SalesPayload = serde_json::from_str(&text).context("parsing `monthlyData` records")?;
        Ok(payload.monthly_data)
    } else {
        serde_json::from_str(&text).context("parsing period records")
    }
}

/// CSV with a header row. Recognized columns: month label, total sales,
/// total units, optional `_id`/`id` key. Other numeric columns become metrics.
pub fn load_csv<R: Read>(reader: R) -> Result<PeriodCollection> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    // metric names keep the header's case; column matching ignores it
    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    debug!(?headers, "csv headers");
    let lowered = headers.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> { lowered.iter().position(|h| names.contains(&h.as_str())) };

    let i_month = idx(&["month", "period", "date"]).context("no month/period column in CSV header")?;
    let i_sales = idx(&["totalsales", "total_sales", "totalprimary", "sales"]);
    let i_units = idx(&["totalunits", "total_units", "totalsecondary", "units"]);
    let i_key = idx(&["_id", "id", "key"]);
    if i_sales.is_none() || i_units.is_none() {
        warn!("could not find one of the sales/units columns; those values will be missing");
    }
    let known = [Some(i_month), i_sales, i_units, i_key];

    let mut out = PeriodCollection::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading CSV row {}", row + 1))?;
        let parse = |i: Option<usize>| -> Option<f64> { i.and_then(|ix| rec.get(ix)).and_then(|s| s.parse::<f64>().ok()) };

        let mut record = PeriodRecord::empty(rec.get(i_month).unwrap_or_default());
        record.total_primary = parse(i_sales);
        record.total_secondary = parse(i_units);
        for (ix, name) in headers.iter().enumerate() {
            if known.contains(&Some(ix)) {
                continue;
            }
            if let Some(v) = parse(Some(ix)) {
                record.metrics.insert(name.clone(), v);
            }
        }

        let key = i_key.and_then(|ix| rec.get(ix)).filter(|k| !k.is_empty()).map(str::to_string).unwrap_or_else(|| row.to_string());
        out.insert(key, record);
    }
    Ok(out)
}

/// Resolve path, trying the .json/.csv sibling if needed.
/// Returns (actual_path, used_alt)
pub fn resolve_path(raw: &Path) -> Result<(PathBuf, bool)> {
    if raw.exists() {
        return Ok((raw.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(raw) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", raw.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "json" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("json");
            Some(alt)
        }
        _ => None,
    }
}
