//! In-memory PNG encoding.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::error::RenderResult;

/// Encode a raw RGB framebuffer as a base64 PNG string.
pub fn rgb_to_png_base64(buffer: &[u8], width: u32, height: u32) -> RenderResult<String> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(buffer, width, height, ExtendedColorType::Rgb8)?;
    Ok(BASE64.encode(png))
}
