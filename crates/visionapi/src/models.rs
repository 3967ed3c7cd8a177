use serde::{Deserialize, Serialize};

/// Response body of `POST /vision/v3.2/analyze`. Every section is optional
/// except `tags`, which defaults to empty: the API omits whole sections when
/// the corresponding visual feature was not requested or produced nothing.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub description: Option<Description>,
    pub color: Option<ColorInfo>,
    pub objects: Option<Vec<DetectedObject>>,
    pub request_id: Option<String>,
    pub metadata: Option<ImageMetadata>,
}

/// A labeled concept the API believes is present, with its confidence.
/// Tags arrive ranked by confidence, highest first.
#[derive(Debug, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub confidence: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub captions: Vec<Caption>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Caption {
    pub text: String,
    pub confidence: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    pub dominant_color_foreground: Option<String>,
    pub dominant_color_background: Option<String>,
    #[serde(default)]
    pub dominant_colors: Vec<String>,
    pub accent_color: Option<String>,
    pub is_bw_img: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DetectedObject {
    pub object: String,
    pub confidence: f64,
    pub rectangle: Option<BoundingRect>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BoundingRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::AnalyzeResponse;

    const SAMPLE: &str = r#"{
        "tags": [
            { "name": "dog", "confidence": 0.9987 },
            { "name": "golden retriever", "confidence": 0.921 },
            { "name": "grass", "confidence": 0.88 }
        ],
        "description": {
            "tags": ["dog", "grass", "outdoor"],
            "captions": [
                { "text": "a dog sitting in the grass", "confidence": 0.87 }
            ]
        },
        "color": {
            "dominantColorForeground": "Brown",
            "dominantColorBackground": "Green",
            "dominantColors": ["Brown", "Green"],
            "accentColor": "8C6239",
            "isBwImg": false
        },
        "objects": [
            {
                "object": "dog",
                "confidence": 0.91,
                "rectangle": { "x": 10, "y": 20, "w": 300, "h": 280 }
            }
        ],
        "requestId": "c1f2a0e8-0000-0000-0000-000000000000",
        "metadata": { "height": 480, "width": 640, "format": "Jpeg" }
    }"#;

    #[test]
    fn decodes_full_response() {
        let parsed: AnalyzeResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(parsed.tags.len(), 3);
        assert_eq!(parsed.tags[0].name, "dog");
        assert!(parsed.tags[0].confidence > 0.99);

        let description = parsed.description.unwrap();
        assert_eq!(description.captions[0].text, "a dog sitting in the grass");

        let color = parsed.color.unwrap();
        assert_eq!(color.dominant_colors, vec!["Brown", "Green"]);
        assert_eq!(color.dominant_color_foreground.as_deref(), Some("Brown"));

        let objects = parsed.objects.unwrap();
        assert_eq!(objects[0].object, "dog");
        assert_eq!(objects[0].rectangle.as_ref().unwrap().w, 300);
    }

    #[test]
    fn tolerates_missing_sections() {
        let parsed: AnalyzeResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.tags.is_empty());
        assert!(parsed.description.is_none());
        assert!(parsed.color.is_none());
        assert!(parsed.objects.is_none());
    }
}
