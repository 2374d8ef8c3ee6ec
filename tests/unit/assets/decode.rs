use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(w, h, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_keeps_straight_alpha_by_default() {
    let bytes = png_bytes(2, 1, vec![100, 50, 200, 128, 1, 2, 3, 255]);
    let payload = decode_payload(&bytes, AlphaMode::default()).unwrap();
    assert_eq!(payload.size(), Size::new(2, 1));
    assert_eq!(
        payload.pixels(),
        &[Pixel::from_rgba(100, 50, 200, 128), Pixel::from_rgba(1, 2, 3, 255)]
    );
}

#[test]
fn decode_premultiplies_on_request() {
    let bytes = png_bytes(1, 1, vec![100, 50, 200, 128]);
    let payload = decode_payload(&bytes, AlphaMode::Premultiplied).unwrap();
    assert_eq!(
        payload.pixels()[0].to_bytes(),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_rejects_garbage() {
    let err = decode_payload(b"not an image", AlphaMode::Straight).unwrap_err();
    assert!(err.to_string().contains("decode payload image"));
}

#[test]
fn premultiply_zeroes_transparent_color() {
    let mut px = [Pixel::from_rgba(9, 9, 9, 0), Pixel::from_rgba(9, 9, 9, 255)];
    premultiply_in_place(&mut px);
    assert_eq!(px, [Pixel::TRANSPARENT, Pixel::from_rgba(9, 9, 9, 255)]);
}
