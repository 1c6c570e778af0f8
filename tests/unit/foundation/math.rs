use super::*;

fn blend_f64(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = f64::from(alpha) / 255.0;
    (f64::from(src) * a + f64::from(dst) * (1.0 - a)).round() as u8
}

#[test]
fn blend_endpoints() {
    assert_eq!(blend_channel(200, 10, 255), 200);
    assert_eq!(blend_channel(200, 10, 0), 10);
}

#[test]
fn blend_matches_float_rounding_exhaustive_alpha() {
    for alpha in 0..=255u8 {
        for (src, dst) in [(0u8, 255u8), (255, 0), (100, 50), (1, 254), (128, 127)] {
            assert_eq!(
                blend_channel(src, dst, alpha),
                blend_f64(src, dst, alpha),
                "src={src} dst={dst} alpha={alpha}"
            );
        }
    }
}

#[test]
fn blend_half_alpha_rounds() {
    // 255 * 128/255 + 0 = 128
    assert_eq!(blend_channel(255, 0, 128), 128);
    // 0 + 255 * 127/255 = 127
    assert_eq!(blend_channel(0, 255, 128), 127);
}
