//! Image upload rules and URL resolution.

use crate::shared::config::{ACCEPTED_IMAGE_TYPES, MAX_IMAGE_BYTES};
use crate::shared::metadata::FieldMetadata;

/// What the browser tells us about a chosen file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMeta {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageRejection {
    #[error("Допустимы только изображения PNG, JPEG или GIF")]
    UnsupportedType(String),
    #[error("Размер изображения не должен превышать 10 МБ")]
    TooLarge(u64),
}

impl ImageMeta {
    /// MIME type, falling back to the file extension when the browser
    /// reports none.
    pub fn effective_mime_type(&self) -> String {
        let declared = self.mime_type.trim().to_ascii_lowercase();
        if !declared.is_empty() {
            return declared;
        }
        let extension = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            _ => "",
        }
        .to_string()
    }
}

/// Check type and size of a chosen image.
pub fn validate_image(meta: &ImageMeta) -> Result<(), ImageRejection> {
    let mime = meta.effective_mime_type();
    if !ACCEPTED_IMAGE_TYPES.contains(&mime.as_str()) {
        return Err(ImageRejection::UnsupportedType(mime));
    }
    if meta.size > MAX_IMAGE_BYTES {
        return Err(ImageRejection::TooLarge(meta.size));
    }
    Ok(())
}

/// Value for the `accept` attribute of file inputs.
pub fn accept_attribute() -> String {
    ACCEPTED_IMAGE_TYPES.join(",")
}

/// Turn an image path from the API into something an `<img>` can load.
///
/// Absolute URLs (`http`, `https`, `data:`, `blob:`) pass through,
/// relative paths are joined to `base`, blanks give `None`.
pub fn resolve_image_url(base: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    let lower = path.to_ascii_lowercase();
    if ["http://", "https://", "data:", "blob:", "//"]
        .iter()
        .any(|prefix| lower.starts_with(prefix))
    {
        return Some(path.to_string());
    }
    let base = base.trim_end_matches('/');
    if let Some(stripped) = path.strip_prefix('/') {
        Some(format!("{}/{}", base, stripped))
    } else {
        Some(format!("{}/{}", base, path))
    }
}

/// Image state of a form: the image already stored on the server and a
/// newly chosen file waiting for upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageField {
    pub current_url: Option<String>,
    pub pending: Option<ImageMeta>,
}

impl ImageField {
    pub fn from_url(url: Option<String>) -> Self {
        Self {
            current_url: url.filter(|u| !u.trim().is_empty()),
            pending: None,
        }
    }

    pub fn has_image(&self) -> bool {
        self.current_url.is_some() || self.pending.is_some()
    }

    /// Stage a chosen file. A rejected file leaves the field untouched.
    pub fn stage(&mut self, meta: ImageMeta) -> Result<(), ImageRejection> {
        validate_image(&meta)?;
        self.pending = Some(meta);
        Ok(())
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Required-image check for the form.
    pub fn check(&self, field: &FieldMetadata) -> Result<(), String> {
        if field.is_required() && !self.has_image() {
            return Err(field.missing());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, mime: &str, size: u64) -> ImageMeta {
        ImageMeta {
            file_name: name.to_string(),
            mime_type: mime.to_string(),
            size,
        }
    }

    #[test]
    fn accepts_png_jpeg_gif_up_to_limit() {
        assert!(validate_image(&meta("a.png", "image/png", 1024)).is_ok());
        assert!(validate_image(&meta("a.jpg", "image/jpeg", MAX_IMAGE_BYTES)).is_ok());
        assert!(validate_image(&meta("a.gif", "IMAGE/GIF", 10)).is_ok());
    }

    #[test]
    fn rejects_other_types() {
        assert_eq!(
            validate_image(&meta("a.webp", "image/webp", 10)),
            Err(ImageRejection::UnsupportedType("image/webp".to_string()))
        );
        assert!(validate_image(&meta("doc.pdf", "application/pdf", 10)).is_err());
        assert!(validate_image(&meta("icon.svg", "image/svg+xml", 10)).is_err());
    }

    #[test]
    fn rejects_files_over_ten_megabytes() {
        assert_eq!(
            validate_image(&meta("a.png", "image/png", MAX_IMAGE_BYTES + 1)),
            Err(ImageRejection::TooLarge(MAX_IMAGE_BYTES + 1))
        );
    }

    #[test]
    fn missing_mime_falls_back_to_extension() {
        assert!(validate_image(&meta("photo.JPEG", "", 10)).is_ok());
        assert!(validate_image(&meta("photo.bmp", "", 10)).is_err());
        assert!(validate_image(&meta("noext", "", 10)).is_err());
    }

    #[test]
    fn rejected_file_does_not_replace_staged_one() {
        let mut field = ImageField::from_url(Some("/uploads/old.png".to_string()));
        field.stage(meta("new.png", "image/png", 100)).unwrap();
        assert!(field.stage(meta("big.png", "image/png", MAX_IMAGE_BYTES * 2)).is_err());
        assert_eq!(field.pending.as_ref().map(|m| m.file_name.as_str()), Some("new.png"));
    }

    #[test]
    fn resolves_relative_and_absolute_urls() {
        let base = "http://shop.local:3000/";
        assert_eq!(
            resolve_image_url(base, "/uploads/a.png").as_deref(),
            Some("http://shop.local:3000/uploads/a.png")
        );
        assert_eq!(
            resolve_image_url(base, "uploads/a.png").as_deref(),
            Some("http://shop.local:3000/uploads/a.png")
        );
        assert_eq!(
            resolve_image_url(base, "https://cdn.example.com/a.png").as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(
            resolve_image_url(base, "blob:http://x/123").as_deref(),
            Some("blob:http://x/123")
        );
        assert_eq!(resolve_image_url(base, "  "), None);
    }

    #[test]
    fn blank_url_means_no_image() {
        assert!(!ImageField::from_url(Some(" ".to_string())).has_image());
        assert!(ImageField::from_url(Some("/a.png".to_string())).has_image());
    }
}
