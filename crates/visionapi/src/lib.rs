pub mod api;
pub mod models;
pub mod types;
pub mod utils;

pub use api::analyze_image;
pub use models::AnalyzeResponse;
pub use types::{VisionClient, VisionError};
