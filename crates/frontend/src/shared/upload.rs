//! Image upload to the third-party media host.
//!
//! The host is an opaque collaborator: a multipart POST carrying the file,
//! the unsigned preset and a destination folder, answering with a secure URL
//! that entity records store verbatim. A failed upload blocks the record
//! save; it is never degraded into an empty URL.

use gloo_net::http::Request;
use thiserror::Error;
use web_sys::{File, FormData};

const CLOUD_NAME: &str = "lankify";
const UPLOAD_PRESET: &str = "unsigned_preset";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("upload request failed: {0}")]
    Transport(String),
    #[error("media host rejected the upload: HTTP {0}")]
    Rejected(u16),
    #[error("media host response carried no secure_url")]
    MissingUrl,
}

/// Upload a single image into `folder`, returning the hosted URL.
pub async fn upload_image(file: &File, folder: &str) -> Result<String, UploadError> {
    let form = FormData::new().map_err(|e| UploadError::Transport(format!("{e:?}")))?;
    form.append_with_blob("file", file)
        .map_err(|e| UploadError::Transport(format!("{e:?}")))?;
    form.append_with_str("upload_preset", UPLOAD_PRESET)
        .map_err(|e| UploadError::Transport(format!("{e:?}")))?;
    form.append_with_str("folder", folder)
        .map_err(|e| UploadError::Transport(format!("{e:?}")))?;

    let endpoint = format!("https://api.cloudinary.com/v1_1/{}/image/upload", CLOUD_NAME);
    let response = Request::post(&endpoint)
        .body(form)
        .map_err(|e| UploadError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(UploadError::Rejected(response.status()));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;
    body.get("secure_url")
        .and_then(|v| v.as_str())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .ok_or(UploadError::MissingUrl)
}
