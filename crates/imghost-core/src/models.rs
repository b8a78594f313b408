//! Response bodies returned by the HTTP API.

use serde::{Deserialize, Serialize};

/// Successful upload payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Public path of the stored file, e.g. `/uploads/image_1629780000_00000001.png`.
    pub path: String,
    pub blurhash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub data: UploadedImage,
}

impl UploadResponse {
    pub fn new(path: String, blurhash: String) -> Self {
        Self {
            success: true,
            data: UploadedImage { path, blurhash },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_shape() {
        let response = UploadResponse::new(
            "/uploads/image_1_00000001.png".to_string(),
            "LEHV6nWB2yk8pyo0adR*.7kCMdnj".to_string(),
        );
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["path"], "/uploads/image_1_00000001.png");
        assert_eq!(json["data"]["blurhash"], "LEHV6nWB2yk8pyo0adR*.7kCMdnj");
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("Invalid token")).expect("serialize");
        assert_eq!(json, serde_json::json!({"success": false, "error": "Invalid token"}));
    }
}
