// SPDX-License-Identifier: MPL-2.0
//! Remote image loading.
//!
//! Fetches image bytes over HTTP, decodes them to RGBA, and produces an
//! [`iced::widget::image::Handle`] plus the bitmap's measured average color.
//! Decoding happens inside the async task driven by `iced::Task`, never on
//! the render path. Results land in an LRU [`cache::ImageCache`] owned by
//! the app; cache misses render the model's precomputed average color.

mod cache;

pub use cache::ImageCache;

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use iced::Color;
use std::sync::OnceLock;

const USER_AGENT: &str = concat!("Crier/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client; cloning reuses the same connection pool across
/// every fetch task.
fn client() -> Result<reqwest::Client> {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    if let Some(client) = CLIENT.get() {
        return Ok(client.clone());
    }

    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    Ok(CLIENT.get_or_init(|| client).clone())
}

/// Post-decode treatment of the bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Keep the bitmap as-is (post images).
    Plain,
    /// Mask everything outside the inscribed circle (avatars).
    Circle,
}

/// A downloaded and decoded image, ready to draw.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
    /// Average color measured from the decoded pixels.
    pub average: Color,
}

/// Downloads and decodes one image.
pub async fn fetch(url: String, shape: Shape) -> Result<Fetched> {
    let response = client()?.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "HTTP status {} for {}",
            response.status(),
            url
        )));
    }

    let bytes = response.bytes().await?;
    decode(&bytes, shape)
}

/// Decodes raw image bytes into a [`Fetched`].
pub fn decode(bytes: &[u8], shape: Shape) -> Result<Fetched> {
    let mut rgba = image_rs::load_from_memory(bytes)?.to_rgba8();
    let average = average_color(&rgba);

    if shape == Shape::Circle {
        circle_mask(&mut rgba);
    }

    let (width, height) = rgba.dimensions();
    Ok(Fetched {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
        average,
    })
}

/// Mean RGB over all pixels. Returns an opaque color; alpha is ignored
/// because placeholders are drawn as solid fills.
#[must_use]
pub fn average_color(image: &image_rs::RgbaImage) -> Color {
    let pixel_count = u64::from(image.width()) * u64::from(image.height());
    if pixel_count == 0 {
        return Color::BLACK;
    }

    let mut sums = [0u64; 3];
    for pixel in image.pixels() {
        for (sum, channel) in sums.iter_mut().zip(pixel.0) {
            *sum += u64::from(channel);
        }
    }

    Color::from_rgb(
        (sums[0] / pixel_count) as f32 / 255.0,
        (sums[1] / pixel_count) as f32 / 255.0,
        (sums[2] / pixel_count) as f32 / 255.0,
    )
}

/// Zeroes the alpha of every pixel outside the largest centered circle.
fn circle_mask(image: &mut image_rs::RgbaImage) {
    let (width, height) = image.dimensions();
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = width.min(height) as f32 / 2.0;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center_x;
        let dy = y as f32 + 0.5 - center_y;
        if dx * dx + dy * dy > radius * radius {
            pixel.0[3] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]))
    }

    #[test]
    fn average_of_solid_image_is_that_color() {
        let image = solid(8, 8, [255, 0, 0]);
        let color = average_color(&image);
        assert_eq!(color, Color::from_rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn average_of_empty_image_is_black() {
        let image = RgbaImage::new(0, 0);
        assert_eq!(average_color(&image), Color::BLACK);
    }

    #[test]
    fn circle_mask_clears_corners_keeps_center() {
        let mut image = solid(10, 10, [10, 20, 30]);
        circle_mask(&mut image);

        assert_eq!(image.get_pixel(0, 0).0[3], 0);
        assert_eq!(image.get_pixel(9, 9).0[3], 0);
        assert_eq!(image.get_pixel(5, 5).0[3], 255);
    }

    #[test]
    fn shared_client_is_available_on_repeat_calls() {
        assert!(client().is_ok());
        assert!(client().is_ok());
    }

    #[test]
    fn decode_rejects_garbage_bytes() {
        let result = decode(b"definitely not an image", Shape::Plain);
        assert!(matches!(result, Err(crate::error::Error::Image(_))));
    }

    #[test]
    fn decode_produces_handle_and_average() {
        let mut bytes = Vec::new();
        let image = solid(4, 4, [0, 255, 0]);
        image_rs::DynamicImage::ImageRgba8(image)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image_rs::ImageFormat::Png,
            )
            .unwrap();

        let fetched = decode(&bytes, Shape::Plain).unwrap();
        assert_eq!((fetched.width, fetched.height), (4, 4));
        assert!(fetched.average.g > 0.9);
        assert!(fetched.average.r < 0.1);
    }
}
