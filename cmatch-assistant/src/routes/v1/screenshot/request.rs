use serde::Deserialize;

#[derive(Deserialize)]
pub struct PostScreenshotBody {
    pub data: PostScreenshotData,
}

#[derive(Deserialize)]
pub struct PostScreenshotData {
    /// The product page to capture.
    pub url: String,
}
