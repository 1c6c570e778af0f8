use super::*;

#[test]
fn from_bgra8_validates_length() {
    assert!(ImageData::from_bgra8(2, 2, vec![0; 16]).is_ok());
    let err = ImageData::from_bgra8(2, 2, vec![0; 15]).unwrap_err();
    assert!(matches!(err, JetframeError::Validation(_)));
}

#[test]
fn from_rgba8_swaps_to_bgra() {
    let img = ImageData::from_rgba8(1, 1, vec![1, 2, 3, 4]).unwrap();
    assert_eq!(img.pixels(), &[3, 2, 1, 4]);
}

#[test]
fn solid_fills_every_pixel() {
    let img = ImageData::solid(3, 2, Color::rgba(255, 0, 0, 128)).unwrap();
    assert_eq!(img.pixels().len(), 3 * 2 * 4);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(img.pixel(x, y), Some([0, 0, 255, 128]));
        }
    }
    assert_eq!(img.pixel(3, 0), None);
    assert_eq!(img.pixel(0, 2), None);
}

#[test]
fn zero_sized_image_is_allowed() {
    let img = ImageData::from_bgra8(0, 5, Vec::new()).unwrap();
    assert_eq!(img.width(), 0);
    assert!(img.pixels().is_empty());
}
