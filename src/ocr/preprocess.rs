use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ImageResult, Rgba, RgbaImage};

use crate::config;
use crate::error::LogOnError;

/// Downscales an image so its width is at most `max_width`, keeping aspect ratio.
///
/// Narrower images are returned unchanged (never upscaled).
pub fn downscale(img: RgbaImage, max_width: u32) -> RgbaImage {
  let (width, height) = img.dimensions();
  if width <= max_width {
    return img;
  }

  let scale = max_width as f64 / width as f64;
  let new_height = ((height as f64 * scale) as u32).max(1);
  image::imageops::resize(&img, max_width, new_height, FilterType::Triangle)
}

/// Converts every pixel to pure black or white.
///
/// The unweighted average of R, G and B is compared with the mid-point of
/// the intensity range: above it the pixel becomes white, otherwise black.
/// Alpha is copied unchanged.
pub fn binarize(img: &RgbaImage) -> RgbaImage {
  let (width, height) = img.dimensions();
  let mut output = RgbaImage::new(width, height);

  for (x, y, pixel) in img.enumerate_pixels() {
    let [r, g, b, a] = pixel.0;
    let sum = r as u32 + g as u32 + b as u32;

    // avg > midpoint  <=>  sum > 3 * midpoint, without float rounding
    let value = if sum > 3 * config::BINARIZE_MIDPOINT { 255u8 } else { 0u8 };

    output.put_pixel(x, y, Rgba([value, value, value, a]));
  }

  output
}

/// Decodes, downscales, binarizes and re-encodes a page as JPEG.
pub fn preprocess_blocking(encoded: &[u8]) -> ImageResult<Vec<u8>> {
  let decoded = image::load_from_memory(encoded)?.to_rgba8();
  let scaled = downscale(decoded, config::MAX_IMAGE_WIDTH);
  let binary = binarize(&scaled);

  // JPEG has no alpha channel
  let rgb = image::DynamicImage::ImageRgba8(binary).to_rgb8();

  let mut jpeg = Vec::new();
  JpegEncoder::new_with_quality(&mut jpeg, config::JPEG_QUALITY).encode_image(&rgb)?;
  Ok(jpeg)
}

/// Prepares a captured page for recognition.
///
/// Decoding and pixel work run on the blocking pool. Never fails: if the
/// input cannot be decoded (or the task dies), the original bytes are
/// returned so recognition can still be attempted.
pub async fn preprocess(encoded: &[u8]) -> Vec<u8> {
  let input = encoded.to_vec();
  let processed = tokio::task::spawn_blocking(move || preprocess_blocking(&input))
    .await
    .log_warn("Preprocessing task failed")
    .and_then(|result| result.log_warn("Could not decode captured image, using it unprocessed"));

  processed.unwrap_or_else(|| encoded.to_vec())
}
