use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::wcag::{reported_ratio, RatioPrecision};
use crate::types::{ColorSeries, ContrastRow};

pub const REPORT_HEADER: [&str; 5] = ["Name", "Color", "Name", "Color", "Ratio"];
const DELIMITER: &str = ", ";

/// Serialization of a [`Report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Contrast of every entry of one series against every entry of another.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    rows: Vec<ContrastRow>,
}

/// Cross-join `a` x `b`. Outer loop over `a`, inner over `b`, both in series order.
pub fn emit_report(a: &ColorSeries, b: &ColorSeries, precision: RatioPrecision) -> Report {
    let rows = a
        .iter()
        .flat_map(|left| {
            b.iter().map(move |right| ContrastRow {
                name1: left.name.clone(),
                color1: left.color,
                name2: right.name.clone(),
                color2: right.color,
                ratio: reported_ratio(left.color, right.color, precision),
            })
        })
        .collect();
    Report { rows }
}

impl Report {
    pub fn rows(&self) -> &[ContrastRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `Name, Color, Name, Color, Ratio`
    pub fn header_line() -> String {
        REPORT_HEADER.join(DELIMITER)
    }

    pub fn write(&self, format: OutputFormat, out: &mut impl Write) -> Result<()> {
        match format {
            OutputFormat::Csv => self.write_csv(out),
            OutputFormat::Json => self.write_json(out),
        }
    }

    /// Header, then one `name1, #hex1, name2, #hex2, ratio` line per row.
    pub fn write_csv(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", Self::header_line())?;
        for row in &self.rows {
            writeln!(
                out,
                "{}{d}{}{d}{}{d}{}{d}{}",
                row.name1,
                row.color1,
                row.name2,
                row.color2,
                format_ratio(row.ratio),
                d = DELIMITER,
            )?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn write_json(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.rows)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

/// Shortest round-trip form that always keeps a fractional part (`21.0`, `4.54`).
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:?}")
}

/// `{digits}-contrast-ratios.{ext}`, where `digits` is the input as typed with one
/// leading `#` removed. `#FF5733` gives `FF5733-contrast-ratios.csv`.
pub fn output_file_name(input: &str, format: OutputFormat) -> String {
    let input = input.trim();
    let digits = input.strip_prefix('#').unwrap_or(input);
    format!("{digits}-contrast-ratios.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::grayscale::to_grayscale_default;
    use crate::math::hex::HexColor;
    use crate::math::shades::generate;

    fn fixture() -> (ColorSeries, ColorSeries) {
        let base = HexColor::parse("#FF5733").unwrap();
        (
            generate("primary", base),
            generate("grayscale", to_grayscale_default(base)),
        )
    }

    #[test]
    fn header_is_exact() {
        assert_eq!(Report::header_line(), "Name, Color, Name, Color, Ratio");
    }

    #[test]
    fn cross_product_has_81_rows_in_order() {
        let (a, b) = fixture();
        let report = emit_report(&a, &b, RatioPrecision::Rounded);
        assert_eq!(report.len(), 81);

        let rows = report.rows();
        assert_eq!(rows[0].name1, "primary-100");
        assert_eq!(rows[0].name2, "grayscale-100");
        assert_eq!(rows[1].name1, "primary-100");
        assert_eq!(rows[1].name2, "grayscale-200");
        assert_eq!(rows[9].name1, "primary-200");
        assert_eq!(rows[9].name2, "grayscale-100");
        assert_eq!(rows[80].name1, "primary-900");
        assert_eq!(rows[80].name2, "grayscale-900");
    }

    #[test]
    fn ratios_are_at_least_one() {
        let (a, b) = fixture();
        for precision in [RatioPrecision::Rounded, RatioPrecision::Raw] {
            let report = emit_report(&a, &b, precision);
            assert!(report.rows().iter().all(|r| r.ratio >= 1.0));
        }
    }

    #[test]
    fn self_report_diagonal_is_one() {
        let (a, _) = fixture();
        let report = emit_report(&a, &a, RatioPrecision::Raw);
        for i in 0..9 {
            assert_eq!(report.rows()[i * 9 + i].ratio, 1.0);
        }
    }

    #[test]
    fn csv_layout() {
        let (a, b) = fixture();
        let report = emit_report(&a, &b, RatioPrecision::Rounded);
        let mut buf = Vec::new();
        report.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 82);
        assert_eq!(lines[0], "Name, Color, Name, Color, Ratio");
        // center row: primary-500 against grayscale-500
        assert_eq!(lines[1 + 4 * 9 + 4], "primary-500, #ff5733, grayscale-500, #8e817e, 1.19");
        assert!(text.ends_with('\n'));
        for line in &lines[1..] {
            assert_eq!(line.split(", ").count(), 5, "{line}");
        }
    }

    #[test]
    fn json_rows() {
        let (a, b) = fixture();
        let report = emit_report(&a, &b, RatioPrecision::Rounded);
        let mut buf = Vec::new();
        report.write(OutputFormat::Json, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 81);
        assert_eq!(rows[40]["name1"], "primary-500");
        assert_eq!(rows[40]["color1"], "#ff5733");
        assert_eq!(rows[40]["color2"], "#8e817e");
        assert_eq!(rows[40]["ratio"], 1.19);
    }

    #[test]
    fn ratio_formatting() {
        assert_eq!(format_ratio(21.0), "21.0");
        assert_eq!(format_ratio(1.0), "1.0");
        assert_eq!(format_ratio(4.54), "4.54");
    }

    #[test]
    fn file_name_drops_hash_and_keeps_case() {
        assert_eq!(output_file_name("#FF5733", OutputFormat::Csv), "FF5733-contrast-ratios.csv");
        assert_eq!(output_file_name("FF5733", OutputFormat::Csv), "FF5733-contrast-ratios.csv");
        assert_eq!(output_file_name("#ff5733\n", OutputFormat::Json), "ff5733-contrast-ratios.json");
        assert_eq!(output_file_name("#aBc123", OutputFormat::Csv), "aBc123-contrast-ratios.csv");
    }
}
