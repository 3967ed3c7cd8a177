use thiserror::Error;

/// Handle for one Azure Computer Vision resource: the resource endpoint
/// (e.g. `https://myresource.cognitiveservices.azure.com/`) plus its
/// subscription key.
#[derive(Clone)]
pub struct VisionClient {
    pub(crate) endpoint: String,
    pub(crate) api_key: String,
}

impl VisionClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Rate limit exceeded.")]
    RateLimited,

    #[error("Vision API error: {status}")]
    Status { status: u16, body: String },

    #[error("Vision API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode Vision API response JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
