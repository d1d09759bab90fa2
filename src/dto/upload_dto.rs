use serde::{Deserialize, Serialize};

/// Response of the media upload endpoint: the public URL of the stored file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub path: String,
}
