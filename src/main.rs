mod dataset;
mod error;
mod model;
mod pipeline;
mod report;
mod tracing;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::error::QcError;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage1_records::build_records;
use crate::pipeline::stage2_classify::run_stage2;
use crate::pipeline::stage3_stats::run_stage3;
use crate::pipeline::stage4_report::{Stage4Input, Stage4Output, run_stage4, write_reports};
use crate::report::chart::{ChartRenderer, ChartSpec, SvgChartRenderer};
use crate::report::format_f64_1;
use crate::report::sink::{ConsoleSink, TextSink};
use crate::report::terminal::{ColorMode, TerminalChartRenderer};

#[derive(Parser, Debug)]
#[command(name = "kira-qualityqc")]
#[command(about = "Classify per-category quality scores and print an analysis summary", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify the built-in dataset, draw the chart and print the report
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Also write report.txt, summary.json and chart.svg into this directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Skip the terminal bar chart
    #[arg(long)]
    no_chart: bool,

    /// ANSI colors for the terminal chart
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn main() {
    crate::tracing::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Run(args) => run(&args),
    };
    if let Err(err) = result {
        crate::error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), QcError> {
    let thresholds = ThresholdProfile::default_v1();
    let chart = ChartSpec::default();

    let mut terminal = TerminalChartRenderer::new(args.color);
    let mut svg = args
        .out
        .as_ref()
        .map(|dir| SvgChartRenderer::new(dir.join("chart.svg")));

    let mut renderers: Vec<&mut dyn ChartRenderer> = Vec::new();
    if !args.no_chart {
        renderers.push(&mut terminal);
    }
    if let Some(svg) = svg.as_mut() {
        renderers.push(svg);
    }

    let mut sink = ConsoleSink;
    run_pipeline(
        dataset::builtin_pairs(),
        &thresholds,
        &chart,
        args.out.as_deref(),
        &mut renderers,
        &mut sink,
    )?;
    Ok(())
}

fn run_pipeline(
    pairs: &[(&str, f64)],
    thresholds: &ThresholdProfile,
    chart: &ChartSpec,
    out_dir: Option<&Path>,
    renderers: &mut [&mut dyn ChartRenderer],
    sink: &mut dyn TextSink,
) -> Result<Stage4Output, QcError> {
    let records = build_records(pairs)?;
    crate::info!("loaded {} score records", records.len());

    let classified = run_stage2(&records, thresholds);
    let stats = run_stage3(&records, thresholds)?;
    crate::info!(
        "mean={} high={} medium={} low={}",
        format_f64_1(stats.mean),
        stats.count_high,
        stats.count_medium,
        stats.count_low
    );

    let input = Stage4Input {
        classified: &classified,
        stats: &stats,
        thresholds,
        chart,
    };
    let output = run_stage4(&input, renderers, sink)?;

    if let Some(dir) = out_dir {
        write_reports(&input, &output, dir)?;
    }

    Ok(output)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
