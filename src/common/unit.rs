//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are expressed in English Metric Units (EMU).
//! Font sizes are written in hundredths of a point.

/// A length in English Metric Units.
pub type Emu = i64;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMU, rounding to the nearest unit.
#[inline]
pub fn inches(value: f64) -> Emu {
    (value * EMUS_PER_INCH as f64).round() as Emu
}

/// Convert points to EMU, rounding to the nearest unit.
#[inline]
pub fn points(value: f64) -> Emu {
    (value * EMUS_PER_PT as f64).round() as Emu
}

#[inline]
pub fn emu_to_inches(emu: Emu) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// Font size in points to the `sz` attribute of `<a:rPr>` (centipoints).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}
