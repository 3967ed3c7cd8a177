use reqwest::{Client, StatusCode};

use crate::models::AnalyzeResponse;
use crate::types::{VisionClient, VisionError};

const ANALYZE_PATH: &str = "vision/v3.2/analyze";
const VISUAL_FEATURES: &str = "Tags,Description,Objects,Color";

/// Sends raw image bytes to the analyze endpoint and returns the parsed
/// response. A 429 from the service is reported as its own variant so
/// callers can pass the rate limit through instead of collapsing it into a
/// generic failure.
pub async fn analyze_image(
    api_client: &VisionClient,
    image: Vec<u8>,
) -> Result<AnalyzeResponse, VisionError> {
    let url = format!(
        "{}/{}",
        api_client.endpoint().trim_end_matches('/'),
        ANALYZE_PATH
    );

    let client = Client::new();
    let response = client
        .post(url)
        .query(&[("visualFeatures", VISUAL_FEATURES), ("language", "en")])
        .header("Ocp-Apim-Subscription-Key", api_client.api_key())
        .header("Content-Type", "application/octet-stream")
        .body(image)
        .send()
        .await?;

    let status = response.status();
    let response_text = response.text().await?;

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(VisionError::RateLimited);
    }
    if !status.is_success() {
        return Err(VisionError::Status {
            status: status.as_u16(),
            body: response_text,
        });
    }

    let parsed: AnalyzeResponse = serde_json::from_str(&response_text)?;
    Ok(parsed)
}
