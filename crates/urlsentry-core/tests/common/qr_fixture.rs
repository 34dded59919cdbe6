//! QR images rendered on the fly, encoded as PNG or JPEG bytes.

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

pub fn qr_image(payload: &str, format: ImageFormat) -> Vec<u8> {
    let code = QrCode::new(payload.as_bytes()).unwrap();
    let rendered = code.render::<Luma<u8>>().min_dimensions(200, 200).build();
    let mut out = Vec::new();
    DynamicImage::ImageLuma8(rendered)
        .write_to(&mut Cursor::new(&mut out), format)
        .unwrap();
    out
}

pub fn qr_png(payload: &str) -> Vec<u8> {
    qr_image(payload, ImageFormat::Png)
}

/// Plain white PNG with no code in it.
pub fn blank_png() -> Vec<u8> {
    let blank = image::GrayImage::from_pixel(120, 120, Luma([255u8]));
    let mut out = Vec::new();
    DynamicImage::ImageLuma8(blank)
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .unwrap();
    out
}
