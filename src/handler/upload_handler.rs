use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use bytes::BytesMut;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::dto::upload_dto::UploadResponse;
use crate::util::error::HandlerError;
use crate::util::minio::MediaStore;

/// POST /api/admin/upload — store one media file and return its public URL.
/// The file is uploaded to the media host first; the returned URL is only
/// attached to a record by a later request.
pub async fn upload_media_handler(
    State(store): State<Arc<MediaStore>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HandlerError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        if field.file_name().is_none() {
            continue;
        }

        let filename = field
            .file_name()
            .map(sanitize_filename)
            .unwrap_or_default();
        let content_type = field.content_type().map(|ct| ct.to_string());

        let mut buf = BytesMut::new();
        let mut stream = field;
        while let Some(chunk) = stream.chunk().await.map_err(|e| {
            error!("Failed to read upload chunk: {}", e);
            HandlerError::bad_request(format!("Failed to read file: {}", e))
        })? {
            buf.extend_from_slice(&chunk);
            if buf.len() > store.config.max_upload_bytes {
                return Err(HandlerError::validation(format!(
                    "File exceeds the {} byte upload limit",
                    store.config.max_upload_bytes
                )));
            }
        }

        if buf.is_empty() {
            return Err(HandlerError::validation("Uploaded file is empty"));
        }

        let object_name = format!("{}-{}", Uuid::new_v4(), filename);
        store
            .put_object(&object_name, buf.to_vec(), content_type.as_deref())
            .await
            .map_err(|e| {
                error!("Upload to media store failed: {}", e);
                HandlerError::internal("Server Error")
            })?;

        let path = store.public_url(&object_name);
        info!("Stored upload as {}", object_name);
        return Ok(Json(UploadResponse { path }));
    }

    Err(HandlerError::validation("No file provided"))
}

/// Keep object names URL-safe: path separators and control characters are
/// replaced, everything else passes through.
fn sanitize_filename(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0'..='\x1f' => '_',
            c => c,
        })
        .collect();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_separators_are_stripped_from_filenames() {
        assert_eq!(sanitize_filename("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_filename("photo.jpg"), "photo.jpg");
    }

    #[test]
    fn empty_filename_gets_a_placeholder() {
        assert_eq!(sanitize_filename(""), "upload");
    }
}
