use actix_multipart::form::tempfile::TempFile;
use actix_web::web;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

use crate::types::error::AppError;

/// URL prefix the uploads directory is served under.
pub const UPLOADS_URL: &str = "/uploads";

#[derive(Debug)]
pub struct StoredPhoto {
    /// Path relative to the site root, e.g. `uploads/<uuid>.jpg`.
    pub relative_path: String,
    pub location: PathBuf,
}

fn extension_of(file_name: Option<&str>) -> String {
    file_name
        .and_then(|n| Path::new(n).extension())
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| "bin".to_string())
}

/// Copies an uploaded photo into `dir` under a fresh random name.
/// Returns `None` when the form carried no named file.
pub async fn store_photo(dir: &Path, upload: Option<&TempFile>) -> Result<Option<StoredPhoto>, AppError> {
    let upload = match upload {
        Some(u) if u.file_name.as_deref().is_some_and(|n| !n.is_empty()) => u,
        _ => return Ok(None),
    };

    let file_name = format!("{}.{}", Uuid::new_v4(), extension_of(upload.file_name.as_deref()));
    let location = dir.join(&file_name);

    let source = upload.file.path().to_path_buf();
    let (target_dir, target) = (dir.to_path_buf(), location.clone());
    web::block(move || {
        fs::create_dir_all(&target_dir)?;
        fs::copy(&source, &target)
    })
    .await
    .map_err(|e| AppError::Internal(format!("saving photo failed: {e}")))?
    .map_err(|e| AppError::Internal(format!("saving photo failed: {e}")))?;

    info!("stored driver photo as {file_name}");
    Ok(Some(StoredPhoto {
        relative_path: format!("{}/{}", UPLOADS_URL.trim_start_matches('/'), file_name),
        location,
    }))
}

pub fn discard_photo(photo: &StoredPhoto) {
    if let Err(e) = fs::remove_file(&photo.location) {
        warn!("could not remove orphaned photo {}: {e}", photo.location.display());
    }
}
