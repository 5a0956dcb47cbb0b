pub mod chart;
pub mod json;
pub mod sink;
pub mod terminal;
pub mod text;

pub fn format_f64_1(v: f64) -> String {
    format!("{:.1}", v)
}

/// Whole thresholds print without a fractional part ("90", not "90.0").
pub fn format_threshold(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}
