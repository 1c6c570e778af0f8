/// Source-over blend of one straight-alpha color channel.
///
/// Computes `round(src * a + dst * (1 - a))` with `a = alpha / 255` in integer arithmetic.
/// The numerator is an integer and 255 is odd, so `(n + 127) / 255` never meets a .5 tie.
pub(crate) fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    let n = u32::from(src) * a + u32::from(dst) * (255 - a);
    ((n + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
