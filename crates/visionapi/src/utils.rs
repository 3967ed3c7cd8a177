use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

pub fn detect_mime_type<P: AsRef<Path>>(path: P) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string()
}

/// Drops a leading `data:<mime>;base64,` header if present. Bare base64
/// payloads pass through untouched.
pub fn strip_data_url_prefix(data: &str) -> &str {
    if data.starts_with("data:") {
        if let Some(idx) = data.find("base64,") {
            return &data[idx + "base64,".len()..];
        }
    }
    data
}

pub fn decode_base64_image(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(data.trim())
}

pub fn encode_bytes_to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn encode_bytes_to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", encode_bytes_to_base64(bytes))
}
