//! Unsigned image upload straight from the browser to Cloudinary.

use contracts::cloudinary::{UploadErrorResponse, UploadResponse};
use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::ApiError;
use crate::config::CloudinaryConfig;

pub async fn upload_image(config: &CloudinaryConfig, file: &File) -> Result<UploadResponse, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Serialize("FormData unavailable".into()))?;
    form.append_with_blob("file", file)
        .and_then(|_| form.append_with_str("upload_preset", &config.upload_preset))
        .map_err(|_| ApiError::Serialize("could not attach the image".into()))?;

    let response = Request::post(&config.upload_url())
        .body(form)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !response.ok() {
        return Err(upload_error(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn upload_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<UploadErrorResponse>(body) {
        Ok(parsed) => ApiError::Rejected {
            status,
            message: parsed.error.message,
        },
        Err(_) => ApiError::from_response(status, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloudinary_error_message_is_used() {
        let error = upload_error(400, r#"{"error": {"message": "Upload preset not found"}}"#);
        assert_eq!(error.to_string(), "Upload preset not found");
    }

    #[test]
    fn unknown_error_body_falls_back() {
        let error = upload_error(502, "bad gateway");
        assert_eq!(error.to_string(), "Request failed with status 502");
    }
}
