//! QR payloads from uploaded images.
//!
//! Anything that turns image bytes into an optional text payload implements
//! [`QrDecoder`]; [`ImageQrDecoder`] does it for common raster formats. The
//! decoded payload is raw input for the normalizer, nothing more.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Image bytes to optional payload. Returns `None` when the bytes are not an
/// image or contain no QR code.
pub trait QrDecoder {
    fn decode(&self, image: &[u8]) -> Option<String>;
}

impl<F> QrDecoder for F
where
    F: Fn(&[u8]) -> Option<String>,
{
    fn decode(&self, image: &[u8]) -> Option<String> {
        self(image)
    }
}

/// Decodes PNG, JPEG, GIF, BMP or WebP bytes and returns the payload of the
/// first QR grid that reads cleanly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageQrDecoder;

impl QrDecoder for ImageQrDecoder {
    fn decode(&self, bytes: &[u8]) -> Option<String> {
        let gray = match image::load_from_memory(bytes) {
            Ok(img) => img.to_luma8(),
            Err(e) => {
                tracing::debug!("image not decodable: {}", e);
                return None;
            }
        };
        let (width, height) = gray.dimensions();
        let mut prepared =
            rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
                gray.get_pixel(x as u32, y as u32).0[0]
            });
        prepared
            .detect_grids()
            .into_iter()
            .find_map(|grid| match grid.decode() {
                Ok((_, content)) => Some(content),
                Err(e) => {
                    tracing::debug!("qr grid rejected: {:?}", e);
                    None
                }
            })
    }
}

/// Content type implied by the leading magic bytes, or
/// `application/octet-stream` when no image format matches.
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream")
}

/// Result of decoding an uploaded QR image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedQr {
    pub url: String,
    pub message: String,
}

/// Reject uploads whose declared content type is not `image/*`.
pub fn ensure_image_content_type(content_type: &str) -> Result<()> {
    if content_type.trim().to_ascii_lowercase().starts_with("image/") {
        Ok(())
    } else {
        Err(Error::NotAnImage(content_type.to_string()))
    }
}

/// Decode `image` and return the trimmed payload.
pub fn decode_qr_url<D: QrDecoder + ?Sized>(decoder: &D, image: &[u8]) -> Result<DecodedQr> {
    if image.is_empty() {
        return Err(Error::QrNotDetected);
    }
    let payload = decoder.decode(image).ok_or(Error::QrNotDetected)?;
    let url = payload.trim();
    if url.is_empty() {
        return Err(Error::QrNotDetected);
    }
    tracing::debug!(bytes = image.len(), url, "decoded qr payload");
    Ok(DecodedQr {
        url: url.to_string(),
        message: "QR decoded".to_string(),
    })
}

/// Gate on the sniffed content type, then decode with [`ImageQrDecoder`].
pub fn decode_image_bytes(bytes: &[u8]) -> Result<DecodedQr> {
    ensure_image_content_type(sniff_content_type(bytes))?;
    decode_qr_url(&ImageQrDecoder, bytes)
}
