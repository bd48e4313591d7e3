use super::hex::HexColor;
use crate::types::{ColorSeries, NamedColor};

/// Lightness step per magnitude; magnitude 4 moves 80% of the way to white/black.
const STEP: f64 = 0.2;

/// Build the nine-step tonal scale for `color`.
///
/// Four lighter shades (`name-100` .. `name-400`), the base color unchanged as
/// `name-500`, then four darker shades (`name-600` .. `name-900`).
pub fn generate(name: &str, color: HexColor) -> ColorSeries {
    let lighter = |magnitude: u32| {
        NamedColor::new(
            format!("{name}-{}", 100 * (4 - magnitude + 1)),
            adjust(color, STEP * f64::from(magnitude), true),
        )
    };
    let darker = |magnitude: u32| {
        NamedColor::new(
            format!("{name}-{}", 500 + 100 * magnitude),
            adjust(color, STEP * f64::from(magnitude), false),
        )
    };

    ColorSeries::from_entries([
        lighter(4),
        lighter(3),
        lighter(2),
        lighter(1),
        NamedColor::new(format!("{name}-500"), color),
        darker(1),
        darker(2),
        darker(3),
        darker(4),
    ])
}

/// Move each channel toward white (lighter) or black by `factor`.
/// The delta is truncated before it is applied.
fn adjust(color: HexColor, factor: f64, lighter: bool) -> HexColor {
    let shift = |c: u8| -> u8 {
        let c = i32::from(c);
        let shifted = if lighter {
            (c + ((255 - c) as f64 * factor) as i32).min(255)
        } else {
            (c - (c as f64 * factor) as i32).max(0)
        };
        shifted.clamp(0, 255) as u8
    };

    HexColor::from_channels(shift(color.r), shift(color.g), shift(color.b))
}
