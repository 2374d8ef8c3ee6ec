/// Map an 8-bit channel onto `[0, 1]`.
#[inline]
pub(crate) fn unit(c: u8) -> f32 {
    f32::from(c) / 255.0
}

/// Map a `[0, 1]` channel back to 8 bits.
///
/// Truncates like an integer cast. Out-of-range and NaN inputs saturate into `0..=255`.
#[inline]
pub(crate) fn quantize_trunc(v: f32) -> u8 {
    let scaled = v * 255.0;
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 255.0) as u8
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
