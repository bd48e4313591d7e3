//! N-API surface. Mirrors the Rust API with plain JS objects and hex strings.

use napi::{Error, Status};

use crate::engine::{self, ReportOptions};
use crate::math::{grayscale, hex::HexColor, shades, wcag};
use crate::types::{ColorSeries, ContrastRow};

#[napi(object)]
#[derive(Debug, Clone)]
pub struct NamedColorJs {
    pub name: String,
    pub hex: String,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ContrastRowJs {
    pub name1: String,
    pub color1: String,
    pub name2: String,
    pub color2: String,
    pub ratio: f64,
}

/// Options passed from JS. Missing fields fall back to the CLI defaults.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ReportOptionsJs {
    pub name: Option<String>,
    pub gray_name: Option<String>,
    pub factor: Option<f64>,
    /// "rounded" | "raw"
    pub precision: Option<String>,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ContrastReportJs {
    pub base: String,
    pub grayscale: String,
    pub shades: Vec<NamedColorJs>,
    pub grayscale_shades: Vec<NamedColorJs>,
    pub rows: Vec<ContrastRowJs>,
}

fn parse(hex: &str) -> napi::Result<HexColor> {
    HexColor::parse(hex).map_err(|e| Error::new(Status::InvalidArg, e.to_string()))
}

fn series_js(series: &ColorSeries) -> Vec<NamedColorJs> {
    series
        .iter()
        .map(|e| NamedColorJs {
            name: e.name.clone(),
            hex: e.color.format(),
        })
        .collect()
}

fn row_js(row: &ContrastRow) -> ContrastRowJs {
    ContrastRowJs {
        name1: row.name1.clone(),
        color1: row.color1.format(),
        name2: row.name2.clone(),
        color2: row.color2.format(),
        ratio: row.ratio,
    }
}

fn options_from_js(js: Option<ReportOptionsJs>) -> napi::Result<ReportOptions> {
    let mut options = ReportOptions::default();
    let Some(js) = js else {
        return Ok(options);
    };
    if let Some(name) = js.name {
        options.name = name;
    }
    if let Some(gray_name) = js.gray_name {
        options.gray_name = gray_name;
    }
    if let Some(factor) = js.factor {
        options.factor = factor;
    }
    options.precision = match js.precision.as_deref() {
        None | Some("rounded") => wcag::RatioPrecision::Rounded,
        Some("raw") => wcag::RatioPrecision::Raw,
        Some(other) => {
            return Err(Error::new(
                Status::InvalidArg,
                format!("unknown precision {other:?}, expected \"rounded\" or \"raw\""),
            ))
        }
    };
    Ok(options)
}

#[napi]
pub fn generate_shades(name: String, hex: String) -> napi::Result<Vec<NamedColorJs>> {
    Ok(series_js(&shades::generate(&name, parse(&hex)?)))
}

#[napi]
pub fn to_grayscale(hex: String, factor: Option<f64>) -> napi::Result<String> {
    let factor = factor.unwrap_or(grayscale::DEFAULT_GRAYSCALE_FACTOR);
    Ok(grayscale::to_grayscale(parse(&hex)?, factor).format())
}

#[napi]
pub fn relative_luminance(hex: String) -> napi::Result<f64> {
    Ok(wcag::relative_luminance(parse(&hex)?))
}

#[napi]
pub fn contrast_ratio(a: String, b: String) -> napi::Result<f64> {
    Ok(wcag::contrast_ratio(parse(&a)?, parse(&b)?))
}

#[napi]
pub fn contrast_report(hex: String, options: Option<ReportOptionsJs>) -> napi::Result<ContrastReportJs> {
    let options = options_from_js(options)?;
    let result = engine::contrast_report_for(parse(&hex)?, &options);
    Ok(ContrastReportJs {
        base: result.base.format(),
        grayscale: result.grayscale.format(),
        shades: series_js(&result.shades),
        grayscale_shades: series_js(&result.grayscale_shades),
        rows: result.report.rows().iter().map(row_js).collect(),
    })
}
