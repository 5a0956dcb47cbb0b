use std::io::{BufWriter, IsTerminal, Write};

use owo_colors::OwoColorize;

use crate::error::QcError;
use crate::model::tier::{BarColor, color_for, label_for, tier_order};
use crate::report::chart::{ChartBar, ChartRenderer, ChartSpec};
use crate::report::format_f64_1;

const DEFAULT_BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

fn rgb(color: BarColor) -> (u8, u8, u8) {
    match color {
        BarColor::Green => (0x4C, 0xAF, 0x50),
        BarColor::Amber => (0xFF, 0xA5, 0x00),
        BarColor::Red => (0xF4, 0x43, 0x36),
    }
}

fn paint(text: &str, color: BarColor, use_colors: bool) -> String {
    if use_colors {
        let (r, g, b) = rgb(color);
        text.truecolor(r, g, b).to_string()
    } else {
        text.to_string()
    }
}

/// Horizontal bar chart, one line per bar, scaled to the chart's y range.
pub fn render_terminal_chart(
    spec: &ChartSpec,
    bars: &[ChartBar],
    use_colors: bool,
    width: usize,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(bars.len() + 4);
    let title = if use_colors {
        spec.title.bold().to_string()
    } else {
        spec.title.clone()
    };
    lines.push(title);
    lines.push(format!(
        "{} ({}..{})",
        spec.y_label, spec.y_range.0, spec.y_range.1
    ));

    for bar in bars {
        let filled = (spec.fraction(bar.score) * width as f64).round() as usize;
        let body = "█".repeat(filled);
        let pad = " ".repeat(width.saturating_sub(filled));
        lines.push(format!(
            "{} {:<label$} |{}{}| {}",
            bar.color.marker(),
            bar.category,
            paint(&body, bar.color, use_colors),
            pad,
            format_f64_1(bar.score),
            label = LABEL_WIDTH
        ));
    }

    let legend = tier_order()
        .iter()
        .map(|&t| format!("{} {}", paint("■", color_for(t), use_colors), label_for(t)))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(legend);
    lines
}

/// Draws the chart to stdout with ANSI colors.
#[derive(Debug, Clone)]
pub struct TerminalChartRenderer {
    pub color_mode: ColorMode,
    pub width: usize,
}

impl TerminalChartRenderer {
    pub fn new(color_mode: ColorMode) -> Self {
        Self {
            color_mode,
            width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl ChartRenderer for TerminalChartRenderer {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn render(&mut self, spec: &ChartSpec, bars: &[ChartBar]) -> Result<(), QcError> {
        let lines = render_terminal_chart(spec, bars, self.color_mode.enabled(), self.width);
        let stdout = std::io::stdout();
        let mut w = BufWriter::new(stdout.lock());
        for line in lines {
            writeln!(w, "{}", line)?;
        }
        writeln!(w)?;
        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/terminal.rs"]
mod tests;
