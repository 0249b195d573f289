// SPDX-License-Identifier: MPL-2.0
//! MIME types, type labels and encoder formats.
//!
//! The type label shown in the gallery is the uppercased MIME subtype
//! (`image/jpeg` -> `JPEG`). The same label later selects the encoder, so a
//! resized image always keeps the format it was uploaded in.

use image_rs::ImageFormat;
use std::path::Path;

/// Extensions offered by the file picker, paired with their MIME type.
const MIME_BY_EXTENSION: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("ico", "image/x-icon"),
];

/// Extensions accepted by the upload dialog.
#[must_use]
pub fn supported_extensions() -> Vec<&'static str> {
    MIME_BY_EXTENSION.iter().map(|(ext, _)| *ext).collect()
}

/// Returns the MIME type registered for `ext` (case-insensitive).
#[must_use]
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    MIME_BY_EXTENSION
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

/// Returns the MIME type for a file name, `application/octet-stream` when
/// the extension is unknown.
#[must_use]
pub fn mime_for_name(name: &str) -> &'static str {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
        .unwrap_or("application/octet-stream")
}

/// Uppercased MIME subtype, e.g. `image/png` -> `PNG`.
#[must_use]
pub fn type_label(mime: &str) -> String {
    mime.split_once('/')
        .map_or(mime, |(_, subtype)| subtype)
        .to_uppercase()
}

/// Encoder format for a type label produced by [`type_label`].
#[must_use]
pub fn image_format_for_label(label: &str) -> Option<ImageFormat> {
    match label.to_ascii_uppercase().as_str() {
        "PNG" => Some(ImageFormat::Png),
        "JPEG" | "JPG" => Some(ImageFormat::Jpeg),
        "GIF" => Some(ImageFormat::Gif),
        "WEBP" => Some(ImageFormat::WebP),
        "BMP" => Some(ImageFormat::Bmp),
        "TIFF" => Some(ImageFormat::Tiff),
        "X-ICON" | "VND.MICROSOFT.ICON" => Some(ImageFormat::Ico),
        _ => None,
    }
}

/// Type label for a sniffed format, `None` when no encoder exists for it.
#[must_use]
pub fn label_for_format(format: ImageFormat) -> Option<String> {
    let label = type_label(format.to_mime_type());
    image_format_for_label(&label).map(|_| label)
}

/// Canonical file extension for a type label, used when the original file
/// name carries none.
#[must_use]
pub fn extension_for_label(label: &str) -> &'static str {
    image_format_for_label(label)
        .and_then(|format| format.extensions_str().first().copied())
        .unwrap_or("img")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_lookup_is_case_insensitive() {
        assert_eq!(mime_for_extension("PNG"), Some("image/png"));
        assert_eq!(mime_for_extension("Jpeg"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("svg"), None);
    }

    #[test]
    fn mime_for_name_uses_last_extension() {
        assert_eq!(mime_for_name("holiday.final.jpg"), "image/jpeg");
        assert_eq!(mime_for_name("README"), "application/octet-stream");
    }

    #[test]
    fn type_label_uppercases_subtype() {
        assert_eq!(type_label("image/png"), "PNG");
        assert_eq!(type_label("image/jpeg"), "JPEG");
        assert_eq!(type_label("image/x-icon"), "X-ICON");
        assert_eq!(type_label("image/svg+xml"), "SVG+XML");
    }

    #[test]
    fn every_supported_extension_has_an_encoder() {
        for ext in supported_extensions() {
            let label = type_label(mime_for_extension(ext).unwrap());
            assert!(
                image_format_for_label(&label).is_some(),
                "no encoder for {ext} ({label})"
            );
        }
    }

    #[test]
    fn sniffed_formats_map_back_to_encoders() {
        assert_eq!(label_for_format(ImageFormat::Png).as_deref(), Some("PNG"));
        assert_eq!(label_for_format(ImageFormat::Jpeg).as_deref(), Some("JPEG"));
        assert_eq!(label_for_format(ImageFormat::Ico).as_deref(), Some("X-ICON"));
        assert_eq!(label_for_format(ImageFormat::Pnm), None);
    }

    #[test]
    fn extension_for_label_is_canonical() {
        assert_eq!(extension_for_label("PNG"), "png");
        assert_eq!(extension_for_label("JPEG"), "jpg");
        assert_eq!(extension_for_label("SVG+XML"), "img");
    }
}
