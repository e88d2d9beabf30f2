use std::path::Path;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use chrono::Utc;
use futures_util::TryStreamExt;
use rand::Rng;
use serde_json::json;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{config::Config, error::ApiError};

/// Multipart field carrying the file.
const IMAGE_FIELD: &str = "image";

const ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];

/// Multipart form accepted by the upload endpoint.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

/// `<unix-millis>-<random>` plus the original extension, if any.
fn generate_filename(original: Option<&str>) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    let ext = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    format!("{}-{}{}", Utc::now().timestamp_millis(), suffix, ext)
}

fn write_failed(path: &Path, e: std::io::Error) -> ApiError {
    error!(error = %e, path = %path.display(), "Failed to write upload");
    ApiError::Internal("Failed to store upload".to_string())
}

async fn discard(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        error!(error = %e, path = %path.display(), "Failed to remove rejected upload");
    }
}

/// A write failed partway: drop what was written and report the failure.
async fn abandon(path: &Path, e: std::io::Error) -> ApiError {
    let err = write_failed(path, e);
    discard(path).await;
    err
}

#[utoipa::path(
    post,
    path = "/api/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = Object, example = json!({
            "filename": "1704067200000-123456789.png"
        })),
        (status = 400, description = "No file, wrong type or too large", body = Object, example = json!({
            "error": "No file uploaded or invalid file type"
        }))
    ),
    tag = "Upload"
)]
pub async fn upload_image(
    config: web::Data<Config>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| ApiError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != IMAGE_FIELD {
            continue;
        }

        let content_type = field.content_type().map(|m| m.essence_str().to_lowercase());
        if !content_type
            .as_deref()
            .is_some_and(|ct| ALLOWED_TYPES.contains(&ct))
        {
            return Err(ApiError::Validation(
                "Only JPEG, JPG, and PNG files are allowed".to_string(),
            ));
        }

        let filename = generate_filename(field.content_disposition().get_filename());
        let path = Path::new(&config.upload_dir).join(&filename);

        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| write_failed(&path, e))?;
        let mut written = 0usize;

        loop {
            let chunk = match field.try_next().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                Err(e) => {
                    drop(file);
                    discard(&path).await;
                    return Err(ApiError::Validation(format!("Malformed upload: {e}")));
                }
            };

            written += chunk.len();
            if written > config.upload_max_bytes {
                drop(file);
                discard(&path).await;
                return Err(ApiError::Validation(format!(
                    "File too large (max {} bytes)",
                    config.upload_max_bytes
                )));
            }

            if let Err(e) = file.write_all(&chunk).await {
                drop(file);
                return Err(abandon(&path, e).await);
            }
        }

        if let Err(e) = file.flush().await {
            drop(file);
            return Err(abandon(&path, e).await);
        }
        info!(%filename, bytes = written, "Upload stored");

        return Ok(HttpResponse::Ok().json(json!({ "filename": filename })));
    }

    Err(ApiError::Validation(
        "No file uploaded or invalid file type".to_string(),
    ))
}
