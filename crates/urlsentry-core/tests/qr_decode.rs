//! Integration test: QR image bytes through the content-type gate, the
//! decoder and on into prediction.

mod common;

use image::ImageFormat;
use tempfile::tempdir;
use urlsentry_core::classifier::load_classifier;
use urlsentry_core::predict::Predictor;
use urlsentry_core::qr::{decode_image_bytes, sniff_content_type, ImageQrDecoder, QrDecoder};
use urlsentry_core::verdict::Verdict;
use urlsentry_core::Error;

#[test]
fn decodes_url_from_png() {
    let png = common::qr_fixture::qr_png("https://example.com/pay?id=7");
    assert_eq!(sniff_content_type(&png), "image/png");

    let decoded = decode_image_bytes(&png).unwrap();
    assert_eq!(decoded.url, "https://example.com/pay?id=7");
    assert_eq!(decoded.message, "QR decoded");
}

#[test]
fn decodes_url_from_jpeg() {
    let jpeg = common::qr_fixture::qr_image("http://a.com/x", ImageFormat::Jpeg);
    assert_eq!(sniff_content_type(&jpeg), "image/jpeg");
    assert_eq!(decode_image_bytes(&jpeg).unwrap().url, "http://a.com/x");
}

#[test]
fn payload_is_trimmed() {
    let png = common::qr_fixture::qr_png("  http://a.com/x \n");
    assert_eq!(ImageQrDecoder.decode(&png).as_deref(), Some("  http://a.com/x \n"));
    assert_eq!(decode_image_bytes(&png).unwrap().url, "http://a.com/x");
}

#[test]
fn image_without_code_is_not_detected() {
    let png = common::qr_fixture::blank_png();
    assert!(matches!(
        decode_image_bytes(&png).unwrap_err(),
        Error::QrNotDetected
    ));
}

#[test]
fn decoded_url_feeds_prediction() {
    let dir = tempdir().unwrap();
    let path = common::model_fixture::write_model(dir.path());
    let predictor = Predictor::with_classifier(load_classifier(&path, None).unwrap());

    let png = common::qr_fixture::qr_png("login-verify.example.com/update?id=1&x=2");
    let decoded = decode_image_bytes(&png).unwrap();
    let p = predictor.predict(&decoded.url).unwrap();
    assert_eq!(p.verdict, Verdict::Malicious);
    assert_eq!(p.confidence, 67.5);
}
