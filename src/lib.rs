#[cfg(feature = "node")]
#[macro_use]
extern crate napi_derive;

pub mod engine;
pub mod error;
pub mod math;
pub mod report;
pub mod types;

#[cfg(feature = "node")]
mod node;

pub use engine::{contrast_report, ContrastReport, ReportOptions};
pub use error::{Error, FormatError, Result};
pub use math::hex::HexColor;
pub use math::wcag::RatioPrecision;
pub use report::{OutputFormat, Report};
pub use types::{ColorSeries, ContrastRow, NamedColor};
