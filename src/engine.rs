use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::math::grayscale::{to_grayscale, DEFAULT_GRAYSCALE_FACTOR};
use crate::math::hex::HexColor;
use crate::math::shades::generate;
use crate::math::wcag::RatioPrecision;
use crate::report::{emit_report, Report};
use crate::types::ColorSeries;

/// Knobs for a single run. Defaults reproduce the `primary` vs `grayscale` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub name: String,
    pub gray_name: String,
    pub factor: f64,
    pub precision: RatioPrecision,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            name: "primary".to_string(),
            gray_name: "grayscale".to_string(),
            factor: DEFAULT_GRAYSCALE_FACTOR,
            precision: RatioPrecision::default(),
        }
    }
}

/// Everything derived from one base color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastReport {
    pub base: HexColor,
    pub grayscale: HexColor,
    pub shades: ColorSeries,
    pub grayscale_shades: ColorSeries,
    pub report: Report,
}

/// Parse `input` and run the whole pipeline.
///
/// This is the main entry point used by the CLI and the Node bindings.
pub fn contrast_report(input: &str, options: &ReportOptions) -> Result<ContrastReport> {
    let base = HexColor::parse(input)?;
    Ok(contrast_report_for(base, options))
}

/// Pipeline for an already parsed color:
///   1. tonal scale of the base color
///   2. grayscale of the base color, then its tonal scale
///   3. cross-join of the two scales
pub fn contrast_report_for(base: HexColor, options: &ReportOptions) -> ContrastReport {
    let shades = generate(&options.name, base);
    let grayscale = to_grayscale(base, options.factor);
    debug!(%base, %grayscale, factor = options.factor, "derived grayscale");
    let grayscale_shades = generate(&options.gray_name, grayscale);

    let report = emit_report(&shades, &grayscale_shades, options.precision);
    debug!(rows = report.len(), precision = ?options.precision, "emitted report");

    ContrastReport {
        base,
        grayscale,
        shades,
        grayscale_shades,
        report,
    }
}
