//! Report formatting and the share hand-off seam

use crate::{BmiInput, BmiResult};

/// Format a shareable multi-line report.
///
/// Pure string assembly over raw inputs and a result produced by
/// [`calculate`](crate::calculate); no validation happens here, an
/// Invalid result is rendered as-is.
pub fn format_report(input: &BmiInput, result: &BmiResult) -> String {
    format!(
        "BMI Report\n\
         Weight: {} {}\n\
         Height: {} {}\n\
         BMI: {:.2}\n\
         Category: {}",
        input.weight_text,
        input.weight_unit.symbol(),
        input.height_text,
        input.height_unit.symbol(),
        result.bmi,
        result.category,
    )
}

/// Destination for a formatted report (share sheet, clipboard, stdout).
///
/// Adapters are supplied by the presentation layer; the core only hands
/// text across this seam.
pub trait Exporter: Send + Sync {
    fn share(&self, text: &str);
}

/// Format a report and hand it to an exporter
pub fn share_report(input: &BmiInput, result: &BmiResult, exporter: &dyn Exporter) {
    exporter.share(&format_report(input, result));
}
