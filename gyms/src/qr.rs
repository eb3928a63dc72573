//! QR rendering for turnstile payloads.
//!
//! The dialog shows the SVG form; the download button saves the PNG form
//! via a `data:` URL so no blob handling is needed in the browser.

#[cfg(test)]
#[path = "qr_test.rs"]
mod qr_test;

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use qrcode::render::svg;

/// Smallest rendered edge, in pixels.
pub const MIN_SIZE_PX: u32 = 200;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QrRenderError {
    #[error("QR payload is empty")]
    EmptyPayload,
    #[error("failed to encode QR code: {0}")]
    Encode(String),
    #[error("failed to write QR image: {0}")]
    Image(String),
}

fn encode(payload: &str) -> Result<QrCode, QrRenderError> {
    if payload.is_empty() {
        return Err(QrRenderError::EmptyPayload);
    }
    QrCode::new(payload.as_bytes()).map_err(|e| QrRenderError::Encode(e.to_string()))
}

/// Render `payload` as an inline SVG document.
///
/// # Errors
///
/// Fails on an empty payload or one too large for any QR version.
pub fn render_svg(payload: &str) -> Result<String, QrRenderError> {
    let code = encode(payload)?;
    Ok(code
        .render::<svg::Color<'_>>()
        .min_dimensions(MIN_SIZE_PX, MIN_SIZE_PX)
        .quiet_zone(true)
        .build())
}

/// Render `payload` as a PNG and wrap it in a `data:image/png;base64,` URL.
///
/// # Errors
///
/// Fails on an empty or oversized payload, or if PNG encoding fails.
pub fn png_data_url(payload: &str) -> Result<String, QrRenderError> {
    let code = encode(payload)?;
    let pixels = code.render::<Luma<u8>>().min_dimensions(MIN_SIZE_PX, MIN_SIZE_PX).build();

    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(pixels)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| QrRenderError::Image(e.to_string()))?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&bytes)))
}

/// File name offered when downloading a turnstile's QR image.
#[must_use]
pub fn download_filename(turnstile_id: &str) -> String {
    format!("turnstile-{turnstile_id}.png")
}
