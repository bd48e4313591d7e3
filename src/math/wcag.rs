use serde::{Deserialize, Serialize};

use super::hex::HexColor;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
///
/// 0.03928 is the threshold printed in WCAG 2.x. The IEC value 0.04045 gives the
/// same result for every 8-bit channel.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.1.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: HexColor) -> f64 {
    0.2126 * srgb_to_linear(color.r) + 0.7152 * srgb_to_linear(color.g) + 0.0722 * srgb_to_linear(color.b)
}

/// Calculate WCAG 2.1 contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: HexColor, b: HexColor) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// How ratios are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioPrecision {
    /// Two decimal places.
    #[default]
    Rounded,
    /// Full `f64` precision.
    Raw,
}

impl RatioPrecision {
    pub fn apply(self, ratio: f64) -> f64 {
        match self {
            RatioPrecision::Rounded => (ratio * 100.0).round() / 100.0,
            RatioPrecision::Raw => ratio,
        }
    }
}

/// Contrast ratio with the requested precision applied.
pub fn reported_ratio(a: HexColor, b: HexColor, precision: RatioPrecision) -> f64 {
    precision.apply(contrast_ratio(a, b))
}
