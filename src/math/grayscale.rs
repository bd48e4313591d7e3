use super::hex::HexColor;

/// Blend factor used for the grayscale palette.
pub const DEFAULT_GRAYSCALE_FACTOR: f64 = 0.925;

/// Blend a color toward its perceptual gray.
/// gray = trunc(0.299 * R + 0.587 * G + 0.114 * B)
/// per channel: C' = trunc(C * (1 - factor) + gray * factor)
///
/// factor 0.0 keeps the color, 1.0 gives a neutral gray. This is the Rec. 601
/// luma weighting, not the WCAG luminance used for contrast.
pub fn to_grayscale(color: HexColor, factor: f64) -> HexColor {
    let [r, g, b] = color.channels().map(f64::from);
    let gray = (0.299 * r + 0.587 * g + 0.114 * b).trunc();

    let blend = |c: f64| c * (1.0 - factor) + gray * factor;

    HexColor::from_clamped(blend(r), blend(g), blend(b))
}

pub fn to_grayscale_default(color: HexColor) -> HexColor {
    to_grayscale(color, DEFAULT_GRAYSCALE_FACTOR)
}
