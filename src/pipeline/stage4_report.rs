use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::QcError;
use crate::model::stats::SummaryStats;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage2_classify::{ClassifiedRecord, chart_bars};
use crate::report::chart::{ChartBar, ChartRenderer, ChartSpec};
use crate::report::json::render_summary_json;
use crate::report::sink::TextSink;
use crate::report::text::{format_report_lines, render_report_text};

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub classified: &'a [ClassifiedRecord<'a>],
    pub stats: &'a SummaryStats,
    pub thresholds: &'a ThresholdProfile,
    pub chart: &'a ChartSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stage4Output {
    pub lines: Vec<String>,
    pub bars: Vec<ChartBar>,
}

/// Formats the report, hands the bars to every renderer and the lines to the
/// sink. Nothing is emitted if formatting fails.
pub fn run_stage4(
    input: &Stage4Input<'_>,
    renderers: &mut [&mut dyn ChartRenderer],
    sink: &mut dyn TextSink,
) -> Result<Stage4Output, QcError> {
    let lines = format_report_lines(input.classified, input.stats, input.thresholds)?;
    let bars = chart_bars(input.classified);

    for renderer in renderers.iter_mut() {
        if let Err(err) = renderer.render(input.chart, &bars) {
            crate::warn!("{} chart rendering failed: {}", renderer.name(), err);
        }
    }

    sink.write_lines(&lines)?;

    Ok(Stage4Output { lines, bars })
}

pub fn write_reports(
    input: &Stage4Input<'_>,
    output: &Stage4Output,
    out_dir: &Path,
) -> Result<(), QcError> {
    fs::create_dir_all(out_dir)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(&output.lines))?;

    let summary_path = out_dir.join("summary.json");
    let json = render_summary_json(input.classified, input.stats, input.thresholds)?;
    write_text(&summary_path, &json)?;

    crate::info!(
        "reports written: {}, {}",
        report_path.display(),
        summary_path.display()
    );
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
