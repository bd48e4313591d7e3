pub mod grayscale;
pub mod hex;
pub mod shades;
pub mod wcag;
