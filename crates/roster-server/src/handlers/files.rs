//! Avatar upload and download handlers.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, get, post, web};
use futures_util::TryStreamExt;
use tracing::debug;
use uuid::Uuid;

use roster_core::error::{Error, StorageWriteError, ValidationError};

use crate::error::ApiError;
use crate::uploads::{Uploads, sanitize_filename};

/// Content types accepted for avatar images.
const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/bmp"];

fn bad_multipart(err: actix_multipart::MultipartError) -> ApiError {
    ApiError::bad_request(format!("invalid multipart payload: {err}"))
}

/// POST /file/upload - store a multipart image under a uuid-prefixed name
/// and return the stored filename as a JSON string.
#[post("/file/upload")]
pub async fn upload_file(
    uploads: web::Data<Uploads>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    while let Some(mut field) = payload.try_next().await.map_err(bad_multipart)? {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();
        if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
            return Err(Error::Validation(ValidationError::UnsupportedContentType {
                found: content_type,
            })
            .into());
        }

        let original = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload");
        let stored_name = format!("{}_{}", Uuid::new_v4(), sanitize_filename(original));

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(bad_multipart)? {
            data.extend_from_slice(&chunk);
        }

        let path = uploads.path_for(&stored_name);
        tokio::fs::write(&path, &data).await.map_err(|e| {
            ApiError::from(Error::StorageWrite(StorageWriteError::Io {
                path: path.display().to_string(),
                source: e,
            }))
        })?;

        debug!(name = %stored_name, bytes = data.len(), "Stored upload");
        return Ok(HttpResponse::Created().json(stored_name));
    }

    Err(ApiError::bad_request("missing multipart field 'file'"))
}

/// GET /files/{filename} - serve a previously uploaded avatar.
#[get("/files/{filename}")]
pub async fn download_file(
    uploads: web::Data<Uploads>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let filename = path.into_inner();
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err(ApiError::bad_request("invalid file name"));
    }

    let full_path = uploads.path_for(&filename);
    let data = tokio::fs::read(&full_path)
        .await
        .map_err(|_| ApiError::not_found(format!("no uploaded file named '{filename}'")))?;

    let content_type = mime_guess::from_path(&filename)
        .first_or_octet_stream()
        .to_string();

    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .append_header((
            "Content-Disposition",
            format!("inline; filename=\"{filename}\""),
        ))
        .body(data))
}
