// Fixed-layout text report

use crate::diff::accumulator::DiffReport;
use crate::format::numbers::format_scientific_f32;

pub const BANNER: &str = "************** Data Diff Results **************";
pub const FOOTER: &str = "***********************************************";
pub const EMPTY_NOTICE: &str = "No samples to compare.";

/// Column where values start; labels are left-aligned and padded to it.
const LABEL_WIDTH: usize = 35;

fn labelled(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<width$}{}", format!("{label}:"), value, width = LABEL_WIDTH)
}

/// Render the report, one entry per output line.
///
/// With no samples the averages are undefined, so only the count and a notice
/// are shown between banner and footer.
pub fn render_report(report: &DiffReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(18);
    lines.push(BANNER.to_string());
    lines.push(labelled("Array Count", report.count));
    lines.push(String::new());

    let (Some(abs_avg), Some(rel_avg)) = (report.abs_avg, report.rel_avg) else {
        lines.push(EMPTY_NOTICE.to_string());
        lines.push(FOOTER.to_string());
        return lines;
    };

    lines.push(labelled("Average Absolute Error", format_scientific_f32(abs_avg)));
    lines.push(labelled("Max Absolute Error Position", report.abs_max.position));
    lines.push(labelled(
        "Max Absolute Error",
        format_scientific_f32(report.abs_max.value),
    ));
    lines.push(String::new());
    lines.push(labelled("Average Relative Error", format_scientific_f32(rel_avg)));
    lines.push(labelled("Max Relative Error Position", report.rel_max.position));
    lines.push(labelled(
        "Max Relative Error",
        format_scientific_f32(report.rel_max.value),
    ));
    lines.push(String::new());
    for (exponent, count) in report.decades.iter() {
        lines.push(labelled(
            &format!("Number of Relative Error(>1e-{exponent})"),
            count,
        ));
    }
    lines.push(FOOTER.to_string());
    lines
}
