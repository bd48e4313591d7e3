use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use shade_contrast::engine::{contrast_report_for, ReportOptions};
use shade_contrast::math::grayscale::DEFAULT_GRAYSCALE_FACTOR;
use shade_contrast::report::output_file_name;
use shade_contrast::{HexColor, OutputFormat, RatioPrecision};

const PROMPT: &str = "Please enter Primary hex color (ex: #FF5733): ";

#[derive(Debug, Parser)]
#[command(
    name = "shade-contrast",
    version,
    about = "Generate a 9-step shade scale and its contrast table against a grayscale scale"
)]
struct Cli {
    /// Base color (`#rrggbb` or `rrggbb`). Prompted on stdin when omitted.
    #[arg(long)]
    color: Option<String>,

    /// Label for the base scale.
    #[arg(long, default_value = "primary")]
    name: String,

    /// Label for the grayscale scale.
    #[arg(long, default_value = "grayscale")]
    gray_name: String,

    /// Grayscale blend factor, 0 (original) to 1 (neutral gray).
    #[arg(long, default_value_t = DEFAULT_GRAYSCALE_FACTOR)]
    factor: f64,

    #[arg(long, value_enum, default_value_t = PrecisionArg::Rounded)]
    precision: PrecisionArg,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    format: FormatArg,

    /// Directory for the output file.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the table instead of writing a file.
    #[arg(long)]
    stdout: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PrecisionArg {
    /// Two decimal places.
    Rounded,
    /// Full precision.
    Raw,
}

impl From<PrecisionArg> for RatioPrecision {
    fn from(p: PrecisionArg) -> Self {
        match p {
            PrecisionArg::Rounded => RatioPrecision::Rounded,
            PrecisionArg::Raw => RatioPrecision::Raw,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let mut cli = Cli::parse();

    let raw = match cli.color.take() {
        Some(c) => c,
        None => prompt_color().context("read color from stdin")?,
    };
    let base: HexColor = raw.trim().parse().context("parse base color")?;
    debug!(%base, "base color");

    let options = ReportOptions {
        name: cli.name,
        gray_name: cli.gray_name,
        factor: cli.factor,
        precision: cli.precision.into(),
    };
    let format: OutputFormat = cli.format.into();
    let result = contrast_report_for(base, &options);

    if cli.stdout {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        result.report.write(format, &mut out).context("write report to stdout")?;
        return Ok(());
    }

    println!("Generating color shades...");
    let file_name = output_file_name(&raw, format);
    let path = cli.out_dir.join(&file_name);
    let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    result
        .report
        .write(format, &mut out)
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = result.report.len(), "wrote report");
    println!("{file_name} created!");

    Ok(())
}

fn prompt_color() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
