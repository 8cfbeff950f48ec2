/// Upper bound for any uploaded image.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];
const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageRejection {
    #[error("Only JPEG, PNG, GIF and WEBP images are allowed")]
    UnsupportedType,

    #[error("File extension must be one of jpg, jpeg, png, gif, webp")]
    UnsupportedExtension,

    #[error("File is empty")]
    Empty,

    #[error("File too large (max 5 MB)")]
    TooLarge,
}

/// An image that passed the upload policy.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    mime_type: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn check(
        content_type: &str,
        filename: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<Self, ImageRejection> {
        let mime_type = content_type.trim().to_ascii_lowercase();
        if !ALLOWED_MIME_TYPES.contains(&mime_type.as_str()) {
            return Err(ImageRejection::UnsupportedType);
        }

        if let Some(ext) = filename.and_then(extension) {
            if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
                return Err(ImageRejection::UnsupportedExtension);
            }
        }

        if bytes.is_empty() {
            return Err(ImageRejection::Empty);
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ImageRejection::TooLarge);
        }

        Ok(Self { mime_type, bytes })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.mime_type, self.bytes)
    }
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

fn extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}
