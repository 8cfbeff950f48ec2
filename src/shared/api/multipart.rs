use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures::StreamExt;

use crate::shared::api::ApiResponse;

/// Text parts are small form values; anything larger is rejected.
const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct MultipartPayload {
    pub fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl MultipartPayload {
    pub fn take_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("File too large: more than {max} bytes")]
    FileTooLarge { max: usize },

    #[error("Field `{0}` is too large")]
    FieldTooLarge(String),

    #[error("Field `{0}` is not valid UTF-8")]
    InvalidText(String),

    #[error("Only one `{0}` file may be uploaded")]
    DuplicateFile(String),

    #[error("Malformed multipart body: {0}")]
    Malformed(String),
}

impl UploadError {
    /// Oversized files are an attachment problem; everything else is a malformed form.
    pub fn to_response(&self) -> HttpResponse {
        match self {
            UploadError::FileTooLarge { max } => ApiResponse::bad_request(
                "INVALID_ATTACHMENT",
                &format!("File too large (max {} MB)", max / (1024 * 1024)),
            ),
            other => ApiResponse::validation_error(&other.to_string()),
        }
    }
}

/// Read a multipart form into memory: text parts into `fields`, the part named
/// `file_field` into `file`.
///
/// File bytes are buffered chunk by chunk and reading stops as soon as
/// `max_file_bytes` is exceeded. Parts with other names that carry a filename are
/// skipped.
pub async fn read_multipart(
    multipart: &mut Multipart,
    file_field: &str,
    max_file_bytes: usize,
) -> Result<MultipartPayload, UploadError> {
    let mut payload = MultipartPayload::default();

    while let Some(item) = multipart.next().await {
        let mut field = item.map_err(|e| UploadError::Malformed(e.to_string()))?;

        let name = field.name().unwrap_or_default().to_string();
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(|f| f.to_string());

        if name == file_field {
            if payload.file.is_some() {
                return Err(UploadError::DuplicateFile(name));
            }

            let content_type = field
                .content_type()
                .map(|m| m.essence_str().to_string())
                .unwrap_or_default();

            let bytes = read_limited(&mut field, max_file_bytes)
                .await?
                .ok_or(UploadError::FileTooLarge {
                    max: max_file_bytes,
                })?;

            // Browsers send an empty part when the file input was left blank
            if bytes.is_empty() && filename.as_deref().unwrap_or_default().is_empty() {
                continue;
            }

            payload.file = Some(UploadedFile {
                filename,
                content_type,
                bytes,
            });
            continue;
        }

        if filename.is_some() {
            continue;
        }

        let bytes = read_limited(&mut field, MAX_TEXT_FIELD_BYTES)
            .await?
            .ok_or_else(|| UploadError::FieldTooLarge(name.clone()))?;
        let text = String::from_utf8(bytes).map_err(|_| UploadError::InvalidText(name.clone()))?;

        payload.fields.insert(name, text);
    }

    Ok(payload)
}

/// `Ok(None)` when the part exceeds `max_bytes`.
async fn read_limited(
    field: &mut actix_multipart::Field,
    max_bytes: usize,
) -> Result<Option<Vec<u8>>, UploadError> {
    let mut buf: Vec<u8> = Vec::new();
    let mut total: usize = 0;

    while let Some(chunk) = field.next().await {
        let data = chunk.map_err(|e| UploadError::Malformed(e.to_string()))?;
        total = total.saturating_add(data.len());
        if total > max_bytes {
            return Ok(None);
        }
        buf.extend_from_slice(&data);
    }

    Ok(Some(buf))
}
