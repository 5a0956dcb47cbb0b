use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use crate::error::QcError;
use crate::model::tier::BarColor;
use html_escape::encode_text;

use crate::report::format_f64_1;

/// One bar of the chart: category, value and fill.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub category: String,
    pub score: f64,
    pub color: BarColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub y_label: String,
    pub y_range: (f64, f64),
    pub label_rotation_deg: f64,
    pub grid_alpha: f64,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            title: "Average quality by project category".to_string(),
            y_label: "Quality".to_string(),
            y_range: (80.0, 100.0),
            label_rotation_deg: 30.0,
            grid_alpha: 0.3,
        }
    }
}

impl ChartSpec {
    /// Position of `score` inside the y range, clamped to [0, 1].
    pub fn fraction(&self, score: f64) -> f64 {
        let (lo, hi) = self.y_range;
        let span = hi - lo;
        if span <= 0.0 {
            return 0.0;
        }
        ((score - lo) / span).clamp(0.0, 1.0)
    }
}

pub trait ChartRenderer {
    fn name(&self) -> &'static str;
    fn render(&mut self, spec: &ChartSpec, bars: &[ChartBar]) -> Result<(), QcError>;
}

const SVG_WIDTH: f64 = 800.0;
const SVG_HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 110.0;
const GRID_STEP: f64 = 5.0;

pub fn render_svg(spec: &ChartSpec, bars: &[ChartBar]) -> String {
    let plot_w = SVG_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = SVG_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let base_y = MARGIN_TOP + plot_h;
    let (y_lo, y_hi) = spec.y_range;

    let mut grid = String::new();
    if y_hi > y_lo {
        let mut tick = (y_lo / GRID_STEP).ceil() * GRID_STEP;
        while tick <= y_hi + 1e-9 {
            let y = base_y - spec.fraction(tick) * plot_h;
            let _ = writeln!(
                grid,
                r##"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#000000" stroke-opacity="{}"/>"##,
                MARGIN_LEFT,
                y,
                MARGIN_LEFT + plot_w,
                y,
                spec.grid_alpha
            );
            let _ = writeln!(
                grid,
                r##"  <text x="{:.1}" y="{:.1}" font-size="11" text-anchor="end">{}</text>"##,
                MARGIN_LEFT - 6.0,
                y + 4.0,
                tick
            );
            tick += GRID_STEP;
        }
    }

    let mut body = String::new();
    if !bars.is_empty() {
        let slot = plot_w / bars.len() as f64;
        let bar_w = slot * 0.8;
        for (i, bar) in bars.iter().enumerate() {
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
            let h = spec.fraction(bar.score) * plot_h;
            let category = encode_text(&bar.category);
            let _ = writeln!(
                body,
                r##"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{}: {}</title></rect>"##,
                x,
                base_y - h,
                bar_w,
                h,
                bar.color.hex(),
                category,
                format_f64_1(bar.score)
            );
            let label_x = x + bar_w / 2.0;
            let label_y = base_y + 14.0;
            let _ = writeln!(
                body,
                r##"  <text x="{:.1}" y="{:.1}" font-size="11" text-anchor="end" transform="rotate(-{} {:.1} {:.1})">{}</text>"##,
                label_x,
                label_y,
                spec.label_rotation_deg,
                label_x,
                label_y,
                category
            );
        }
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <rect width="{w}" height="{h}" fill="#ffffff"/>
  <text x="{tx:.1}" y="24" font-size="15" text-anchor="middle">{title}</text>
  <text x="16" y="{ly:.1}" font-size="12" text-anchor="middle" transform="rotate(-90 16 {ly:.1})">{y_label}</text>
{grid}{body}  <line x1="{x0:.1}" y1="{by:.1}" x2="{x1:.1}" y2="{by:.1}" stroke="#000000"/>
</svg>
"##,
        w = SVG_WIDTH,
        h = SVG_HEIGHT,
        tx = SVG_WIDTH / 2.0,
        title = encode_text(&spec.title),
        ly = MARGIN_TOP + plot_h / 2.0,
        y_label = encode_text(&spec.y_label),
        grid = grid,
        body = body,
        x0 = MARGIN_LEFT,
        x1 = MARGIN_LEFT + plot_w,
        by = base_y,
    )
}

/// Writes the chart as a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgChartRenderer {
    pub path: PathBuf,
}

impl SvgChartRenderer {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(&mut self, spec: &ChartSpec, bars: &[ChartBar]) -> Result<(), QcError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, render_svg(spec, bars))?;
        crate::info!("chart written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<(ChartSpec, Vec<ChartBar>)>,
    pub fail: bool,
}

#[cfg(test)]
impl ChartRenderer for RecordingRenderer {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn render(&mut self, spec: &ChartSpec, bars: &[ChartBar]) -> Result<(), QcError> {
        self.calls.push((spec.clone(), bars.to_vec()));
        if self.fail {
            return Err(QcError::Io(std::io::Error::other("renderer offline")));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/chart.rs"]
mod tests;
