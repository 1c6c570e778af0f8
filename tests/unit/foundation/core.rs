use super::*;

#[test]
fn color_bgra_byte_order() {
    let c = Color::rgba(10, 20, 30, 40);
    assert_eq!(c.to_bgra(), [30, 20, 10, 40]);
    assert_eq!(Color::from_bgra(c.to_bgra()), c);
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(3, 2).unwrap();
    assert_eq!(c.byte_len().unwrap(), 24);
}

#[test]
fn bgra_len_detects_overflow() {
    if usize::BITS == 32 {
        assert!(bgra_len(u32::MAX, u32::MAX).is_err());
    } else {
        assert_eq!(
            bgra_len(u32::MAX, 1).unwrap(),
            (u32::MAX as usize) * BYTES_PER_PIXEL
        );
    }
}
