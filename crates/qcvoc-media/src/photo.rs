// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Photo transform pipeline — center-crop to a square, scale to a fixed
// canvas, encode as JPEG, and wrap as a base64 data URL.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::DynamicImage;
use tracing::{debug, warn};

use qcvoc_core::error::{Result, ShellError};

/// Prefix of every payload the photo flow delivers to the page.
pub const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// A processed photo ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoArtifact {
    /// `data:image/jpeg;base64,...` payload.
    pub data_url: String,
    /// True when the capture could not be read and a blank placeholder was
    /// substituted. The caller should notify the user.
    pub degraded: bool,
}

/// Deterministic capture-to-data-URL transform.
///
/// The pipeline is fixed: center-crop to a square whose side is the shorter
/// image dimension, scale to `edge` x `edge`, encode as JPEG at `quality`.
#[derive(Debug, Clone)]
pub struct PhotoPipeline {
    edge: u32,
    quality: u8,
}

impl PhotoPipeline {
    pub fn new(edge: u32, quality: u8) -> Self {
        Self { edge, quality }
    }

    /// Load a captured image from disk and run the full transform.
    ///
    /// An unreadable or undecodable capture is replaced by a blank canvas
    /// rather than failing the flow, so the page always receives a payload.
    /// Only encoding the placeholder itself can fail.
    pub fn process_file(&self, path: &Path) -> Result<PhotoArtifact> {
        match image::open(path) {
            Ok(img) => {
                debug!(
                    width = img.width(),
                    height = img.height(),
                    "captured photo loaded"
                );
                let squared = square_crop(&img);
                let scaled = squared.resize_exact(
                    self.edge,
                    self.edge,
                    image::imageops::FilterType::Lanczos3,
                );
                Ok(PhotoArtifact { data_url: self.data_url(&scaled)?, degraded: false })
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "captured photo unreadable; substituting blank canvas"
                );
                Ok(PhotoArtifact { data_url: self.data_url(&self.blank())?, degraded: true })
            }
        }
    }

    /// Encode an image as a `data:image/jpeg;base64,` URL.
    pub fn data_url(&self, image: &DynamicImage) -> Result<String> {
        let jpeg = self.jpeg_bytes(image)?;
        Ok(format!("{DATA_URL_PREFIX}{}", BASE64.encode(&jpeg)))
    }

    /// A blank canvas at the configured edge length.
    pub fn blank(&self) -> DynamicImage {
        DynamicImage::new_rgb8(self.edge, self.edge)
    }

    fn jpeg_bytes(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let rgb = image.to_rgb8();
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, self.quality);
        rgb.write_with_encoder(encoder)
            .map_err(|err| ShellError::Image(format!("JPEG encoding failed: {err}")))?;
        Ok(buffer)
    }
}

/// Center-crop to a square whose side is the shorter dimension, symmetric
/// around the center of the longer axis.
pub fn square_crop(image: &DynamicImage) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    if width >= height {
        image.crop_imm(width / 2 - height / 2, 0, height, height)
    } else {
        image.crop_imm(0, height / 2 - width / 2, width, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        // Red channel encodes x, green channel encodes y, so crop offsets
        // are observable in the output pixels.
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([x as u8, y as u8, 0])
        }))
    }

    fn pipeline() -> PhotoPipeline {
        PhotoPipeline::new(300, 70)
    }

    fn decode_data_url(data_url: &str) -> DynamicImage {
        let encoded = data_url.strip_prefix(DATA_URL_PREFIX).expect("prefix");
        let bytes = BASE64.decode(encoded).expect("valid base64");
        image::load_from_memory(&bytes).expect("valid JPEG")
    }

    #[test]
    fn landscape_crops_to_centered_square() {
        let cropped = square_crop(&gradient(8, 4));
        assert_eq!((cropped.width(), cropped.height()), (4, 4));
        // Crop starts at x = 8/2 - 4/2 = 2.
        assert_eq!(cropped.to_rgb8().get_pixel(0, 0)[0], 2);
    }

    #[test]
    fn portrait_crops_to_centered_square() {
        let cropped = square_crop(&gradient(4, 8));
        assert_eq!((cropped.width(), cropped.height()), (4, 4));
        assert_eq!(cropped.to_rgb8().get_pixel(0, 0)[1], 2);
    }

    #[test]
    fn square_input_is_untouched() {
        let cropped = square_crop(&gradient(5, 5));
        assert_eq!((cropped.width(), cropped.height()), (5, 5));
        assert_eq!(cropped.to_rgb8().get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn pipeline_emits_300x300_jpeg_data_url() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("capture.jpg");
        gradient(400, 300).save(&path).expect("write capture");

        let artifact = pipeline().process_file(&path).expect("process");
        assert!(!artifact.degraded);
        assert!(artifact.data_url.starts_with(DATA_URL_PREFIX));

        let decoded = decode_data_url(&artifact.data_url);
        assert_eq!((decoded.width(), decoded.height()), (300, 300));
    }

    #[test]
    fn unreadable_capture_degrades_to_blank_canvas() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.jpg");

        let artifact = pipeline().process_file(&path).expect("process");
        assert!(artifact.degraded);

        let decoded = decode_data_url(&artifact.data_url);
        assert_eq!((decoded.width(), decoded.height()), (300, 300));
    }

    #[test]
    fn garbage_bytes_degrade_to_blank_canvas() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not an image").expect("write");

        let artifact = pipeline().process_file(&path).expect("process");
        assert!(artifact.degraded);
        assert!(artifact.data_url.starts_with(DATA_URL_PREFIX));
    }
}
