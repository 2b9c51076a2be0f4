// File: crates/demo/src/main.rs
// Summary: Demo loads a monthly sales payload (JSON/CSV), reshapes it into line-chart series and writes JSON.

mod calendar;
mod load;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use series_core::{
    format_change, monthly_sales_specs, overview_specs, summarize, Palette, Reshaper, SeriesSpec,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::load::InputFormat;

#[derive(Parser, Debug)]
#[command(name = "series-demo")]
#[command(about = "Reshape monthly sales records into chart-ready line series")]
#[command(version)]
struct Cli {
    /// Sales payload: `{"monthlyData": ...}`, a bare array/object of records, or CSV
    input: PathBuf,

    /// Input format; guessed from the extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<InputFormat>,

    /// JSON file with an array of series descriptors
    #[arg(short, long)]
    series: Option<PathBuf>,

    /// Color-hint palette for the built-in series
    #[arg(long, env = "SERIES_PALETTE", default_value = "dark")]
    palette: String,

    /// Cumulative totals instead of per-month values
    #[arg(long)]
    overview: bool,

    /// Order records January..December before reshaping
    #[arg(long)]
    sort_calendar: bool,

    /// Write the series JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let (path, used_alt) = load::resolve_path(&cli.input)?;
    info!("using input file: {}", path.display());
    if used_alt {
        info!("  (extension swapped between .json/.csv)");
    }

    let format = cli.format.unwrap_or_else(|| InputFormat::from_path(&path));
    let mut periods = load::load(&path, format)
        .with_context(|| format!("failed to load '{}'", path.display()))?;
    info!("loaded {} periods", periods.len());

    if cli.sort_calendar {
        periods = calendar::sort_by_calendar(periods);
    }

    let palette = Palette::find(&cli.palette);
    let specs = match &cli.series {
        Some(p) => load_specs(p)?,
        None if cli.overview => overview_specs(&palette),
        None => monthly_sales_specs(&palette),
    };

    let summary = summarize(&periods);
    info!(
        "totals: primary {:.2}, secondary {:.2} across {} periods",
        summary.total_primary, summary.total_secondary, summary.periods
    );
    if let Some(latest) = &summary.latest {
        let change = summary.primary_change.map(format_change).unwrap_or_else(|| "n/a".to_string());
        info!("latest period {}: primary {:?} ({} since previous)", latest.period, latest.total_primary, change);
    }

    let reshaper = Reshaper::new(specs)?;
    let series = reshaper.apply(&periods).context("reshaping periods into series")?;
    if let Some(extent) = series.value_extent(0.02) {
        info!("y extent [{:.2}, {:.2}]", extent.min, extent.max);
    }

    let json = serde_json::to_string_pretty(&series)?;
    match &cli.output {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
            println!("Wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn load_specs(path: &std::path::Path) -> Result<Vec<SeriesSpec>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing series descriptors in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
    }

    #[test]
    fn sample_descriptors_fit_both_samples() {
        let specs = load_specs(&data("series.json")).expect("specs");
        let reshaper = Reshaper::new(specs).expect("reshaper");
        for (file, format) in [("monthly_sales.json", InputFormat::Json), ("monthly_sales.csv", InputFormat::Csv)] {
            let periods = load::load(&data(file), format).expect("load sample");
            let series = reshaper.apply(&periods).unwrap_or_else(|e| panic!("{file}: {e}"));
            assert_eq!(series.len(), 2);
            assert_eq!(series[1].points.len(), periods.len());
        }
    }
}
