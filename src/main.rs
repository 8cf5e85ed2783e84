//! benchplot: render a comparison chart from a Google Benchmark CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use benchplot::{
    chart, default_cache_boundaries, group_by_algorithm, load_csv, summary, CacheBoundary,
    ChartConfig,
};

#[derive(Parser)]
#[command(name = "benchplot")]
#[command(about = "Render a comparison chart from Google Benchmark CSV results")]
struct Args {
    /// Input CSV with `name` and `cpu_time` columns
    #[arg(short, long, default_value = "data.csv")]
    input: PathBuf,

    /// Output image; .svg selects the vector backend, anything else PNG
    #[arg(short, long, default_value = "plot.png")]
    output: PathBuf,

    /// Chart title
    #[arg(long, default_value = "lower_bound() comparison")]
    title: String,

    /// Algorithm rendered de-emphasized as the baseline
    #[arg(long, default_value = "StdLowerBound")]
    baseline: String,

    /// Fixed y-axis clamp in nanoseconds
    #[arg(long, default_value_t = 250.0)]
    y_max: f64,

    /// Cache boundary as `<log2_len>:<label>`; repeatable, replaces defaults
    #[arg(long = "boundary")]
    boundaries: Vec<CacheBoundary>,

    /// Skip cache-boundary reference lines
    #[arg(long)]
    no_annotations: bool,

    /// Also write per-algorithm summary statistics as JSON
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let report = load_csv(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    if report.skipped > 0 {
        println!(
            "{} skipped {} malformed row(s)",
            "Warning:".yellow().bold(),
            report.skipped
        );
    }
    println!(
        "{} loaded {} rows from {}",
        "✓".green().bold(),
        report.records.len(),
        args.input.display()
    );

    let series = group_by_algorithm(&report.records, &args.baseline)?;

    let config = ChartConfig {
        title: args.title,
        y_max: args.y_max,
        boundaries: if args.no_annotations {
            Vec::new()
        } else if args.boundaries.is_empty() {
            default_cache_boundaries()
        } else {
            args.boundaries
        },
        ..ChartConfig::default()
    };

    chart::render(&args.output, &series, &config)
        .with_context(|| format!("failed to render {}", args.output.display()))?;
    println!(
        "{} wrote chart with {} series to {}",
        "✓".green().bold(),
        series.len(),
        args.output.display()
    );

    let summaries = summary::summarize(&series);
    print!("{}", summary::format_table(&summaries));

    if let Some(path) = args.summary_json {
        summary::write_json(&path, &summaries)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{} wrote summary to {}", "✓".green().bold(), path.display());
    }

    Ok(())
}
