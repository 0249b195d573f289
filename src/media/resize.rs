// SPDX-License-Identifier: MPL-2.0
//! Resizing a batch of images to a common bounding box.

use super::format;
use super::intake::{Dimensions, SelectedFile};
use crate::app::config::{DEFAULT_RESIZE_SIZE, MAX_RESIZE_SIZE, MIN_RESIZE_SIZE};
use crate::error::{Error, Result};
use futures_util::future::join_all;
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, ImageFormat};
use std::fmt;
use std::io::Cursor;

// ==========================================================================
// Resize Target Value Object
// ==========================================================================

/// Width and height every exported image is fitted into.
///
/// Both sides are always within `MIN_RESIZE_SIZE..=MAX_RESIZE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeTarget {
    width: u32,
    height: u32,
}

impl Default for ResizeTarget {
    fn default() -> Self {
        Self::uniform(DEFAULT_RESIZE_SIZE)
    }
}

impl fmt::Display for ResizeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl ResizeTarget {
    /// Creates a target, clamping both sides to the valid range.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.clamp(MIN_RESIZE_SIZE, MAX_RESIZE_SIZE),
            height: height.clamp(MIN_RESIZE_SIZE, MAX_RESIZE_SIZE),
        }
    }

    /// Same value for width and height.
    #[must_use]
    pub fn uniform(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Parses the navbar input. Returns `None` for anything that is not an
    /// integer in the valid range, so the caller can keep its previous target.
    #[must_use]
    pub fn parse_uniform(input: &str) -> Option<Self> {
        let value: u32 = input.trim().parse().ok()?;
        (MIN_RESIZE_SIZE..=MAX_RESIZE_SIZE)
            .contains(&value)
            .then(|| Self::uniform(value))
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Output size of an image of `source` size: aspect ratio kept, never
    /// enlarged, each side at least one pixel.
    #[must_use]
    pub fn fit(self, source: Dimensions) -> Dimensions {
        if source.width <= self.width && source.height <= self.height {
            return source;
        }
        let scale_w = f64::from(self.width) / f64::from(source.width);
        let scale_h = f64::from(self.height) / f64::from(source.height);
        let scale = scale_w.min(scale_h);

        let scaled = |side: u32, bound: u32| {
            ((f64::from(side) * scale).round() as u32).clamp(1, bound)
        };
        Dimensions::new(
            scaled(source.width, self.width),
            scaled(source.height, self.height),
        )
    }
}

// ==========================================================================
// Jobs and Artifacts
// ==========================================================================

/// One image to resize, snapshotted from the gallery at export time.
#[derive(Debug, Clone)]
pub struct ResizeJob {
    pub file: SelectedFile,
    pub type_label: String,
}

/// Encoded output of one resize job.
#[derive(Clone, PartialEq, Eq)]
pub struct ResizedArtifact {
    pub source_name: String,
    pub type_label: String,
    pub dimensions: Dimensions,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ResizedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizedArtifact")
            .field("source_name", &self.source_name)
            .field("type_label", &self.type_label)
            .field("dimensions", &self.dimensions)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Decodes, resizes and re-encodes a single image in its own format.
///
/// # Errors
///
/// [`Error::Decode`] when the bytes cannot be decoded, [`Error::Resize`] when
/// the format has no encoder or encoding fails.
pub fn resize_one(job: &ResizeJob, target: ResizeTarget, quality: u8) -> Result<ResizedArtifact> {
    let name = &job.file.name;
    let output_format = format::image_format_for_label(&job.type_label)
        .ok_or_else(|| Error::resize(name, format!("no encoder for {}", job.type_label)))?;

    let source = image_rs::load_from_memory(&job.file.bytes).map_err(|err| Error::decode(name, err))?;
    let size = target.fit(Dimensions::new(source.width(), source.height()));
    let resized = if size.width == source.width() && size.height == source.height() {
        source
    } else {
        source.resize_exact(size.width, size.height, FilterType::Lanczos3)
    };

    let bytes = encode(&resized, output_format, quality).map_err(|err| Error::resize(name, err))?;
    Ok(ResizedArtifact {
        source_name: name.clone(),
        type_label: job.type_label.clone(),
        dimensions: size,
        bytes,
    })
}

fn encode(
    image: &DynamicImage,
    format: ImageFormat,
    quality: u8,
) -> std::result::Result<Vec<u8>, image_rs::ImageError> {
    let mut buffer = Vec::new();
    match format {
        ImageFormat::Jpeg => {
            // JPEG has no alpha channel.
            let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
            let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
            rgb.write_with_encoder(encoder)?;
        }
        ImageFormat::Ico => {
            let rgba = DynamicImage::ImageRgba8(image.to_rgba8());
            rgba.write_to(&mut Cursor::new(&mut buffer), format)?;
        }
        _ => image.write_to(&mut Cursor::new(&mut buffer), format)?,
    }
    Ok(buffer)
}

/// Resizes every job concurrently.
///
/// Artifacts come back in job order. If any job fails, every failure is
/// logged and the first one in job order is returned.
pub async fn resize_batch(
    jobs: Vec<ResizeJob>,
    target: ResizeTarget,
    quality: u8,
) -> Result<Vec<ResizedArtifact>> {
    let tasks = jobs.into_iter().map(|job| async move {
        let name = job.file.name.clone();
        tokio::task::spawn_blocking(move || resize_one(&job, target, quality))
            .await
            .unwrap_or_else(|err| Err(Error::resize(name, format!("resize task failed: {err}"))))
    });
    let results = join_all(tasks).await;

    let mut artifacts = Vec::with_capacity(results.len());
    let mut first_error = None;
    for result in results {
        match result {
            Ok(artifact) => artifacts.push(artifact),
            Err(err) => {
                tracing::warn!(error = %err, "image failed to resize");
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(artifacts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};

    fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([200, 10, 10, 255]),
        ));
        encode(&image, format, 90).expect("encode fixture")
    }

    fn job(name: &str, width: u32, height: u32, format: ImageFormat, label: &str) -> ResizeJob {
        ResizeJob {
            file: SelectedFile::new(name, encoded(width, height, format)),
            type_label: label.to_string(),
        }
    }

    #[test]
    fn default_target_is_512_square() {
        let target = ResizeTarget::default();
        assert_eq!((target.width(), target.height()), (512, 512));
        assert_eq!(target.to_string(), "512x512");
    }

    #[test]
    fn parse_uniform_accepts_only_valid_sizes() {
        assert_eq!(ResizeTarget::parse_uniform("300"), Some(ResizeTarget::uniform(300)));
        assert_eq!(ResizeTarget::parse_uniform(" 64 "), Some(ResizeTarget::uniform(64)));
        assert_eq!(ResizeTarget::parse_uniform("0"), None);
        assert_eq!(ResizeTarget::parse_uniform("-4"), None);
        assert_eq!(ResizeTarget::parse_uniform("12.5"), None);
        assert_eq!(ResizeTarget::parse_uniform("abc"), None);
        assert_eq!(ResizeTarget::parse_uniform(""), None);
        assert_eq!(ResizeTarget::parse_uniform("16385"), None);
        assert_eq!(
            ResizeTarget::parse_uniform("16384"),
            Some(ResizeTarget::uniform(16_384))
        );
    }

    #[test]
    fn new_clamps_out_of_range_sides() {
        let target = ResizeTarget::new(0, 100_000);
        assert_eq!((target.width(), target.height()), (1, 16_384));
    }

    #[test]
    fn fit_shrinks_landscape_to_width() {
        let fitted = ResizeTarget::uniform(300).fit(Dimensions::new(1200, 600));
        assert_eq!(fitted, Dimensions::new(300, 150));
    }

    #[test]
    fn fit_shrinks_portrait_to_height() {
        let fitted = ResizeTarget::uniform(300).fit(Dimensions::new(600, 1200));
        assert_eq!(fitted, Dimensions::new(150, 300));
    }

    #[test]
    fn fit_never_enlarges() {
        let fitted = ResizeTarget::uniform(512).fit(Dimensions::new(100, 40));
        assert_eq!(fitted, Dimensions::new(100, 40));
    }

    #[test]
    fn fit_keeps_at_least_one_pixel() {
        let fitted = ResizeTarget::uniform(10).fit(Dimensions::new(10_000, 1));
        assert_eq!(fitted, Dimensions::new(10, 1));
    }

    #[test]
    fn resize_one_keeps_format() {
        let artifact = resize_one(
            &job("photo.jpg", 64, 32, ImageFormat::Jpeg, "JPEG"),
            ResizeTarget::uniform(16),
            100,
        )
        .expect("resize jpeg");
        assert_eq!(artifact.type_label, "JPEG");
        assert_eq!(artifact.dimensions, Dimensions::new(16, 8));
        assert_eq!(
            image_rs::guess_format(&artifact.bytes).expect("guess"),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn resize_one_reports_undecodable_file() {
        let broken = ResizeJob {
            file: SelectedFile::new("broken.png", vec![1, 2, 3]),
            type_label: "PNG".into(),
        };
        let err = resize_one(&broken, ResizeTarget::default(), 100).unwrap_err();
        assert!(matches!(err, Error::Decode { ref name, .. } if name == "broken.png"));
    }

    #[test]
    fn resize_one_rejects_unknown_label() {
        let odd = job("vector.png", 4, 4, ImageFormat::Png, "SVG+XML");
        let err = resize_one(&odd, ResizeTarget::default(), 100).unwrap_err();
        assert!(matches!(err, Error::Resize { ref name, .. } if name == "vector.png"));
    }

    #[tokio::test]
    async fn resize_batch_preserves_order() {
        let jobs = vec![
            job("a.png", 40, 40, ImageFormat::Png, "PNG"),
            job("b.jpg", 80, 20, ImageFormat::Jpeg, "JPEG"),
            job("c.bmp", 10, 30, ImageFormat::Bmp, "BMP"),
        ];
        let artifacts = resize_batch(jobs, ResizeTarget::uniform(20), 100)
            .await
            .expect("batch resize");
        let names: Vec<_> = artifacts.iter().map(|a| a.source_name.as_str()).collect();
        assert_eq!(names, ["a.png", "b.jpg", "c.bmp"]);
        assert_eq!(artifacts[1].dimensions, Dimensions::new(20, 5));
    }

    #[tokio::test]
    async fn resize_batch_is_all_or_nothing() {
        let jobs = vec![
            job("ok.png", 8, 8, ImageFormat::Png, "PNG"),
            ResizeJob {
                file: SelectedFile::new("first-bad.png", vec![0]),
                type_label: "PNG".into(),
            },
            ResizeJob {
                file: SelectedFile::new("second-bad.png", vec![0]),
                type_label: "PNG".into(),
            },
        ];
        let err = resize_batch(jobs, ResizeTarget::uniform(4), 100)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode { ref name, .. } if name == "first-bad.png"));
    }
}
