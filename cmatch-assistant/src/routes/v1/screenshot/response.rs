use serde::Serialize;

#[derive(Serialize)]
pub struct PostScreenshot {
    pub data: PostScreenshotData,
}

#[derive(Serialize)]
pub struct PostScreenshotData {
    /// The captured image, base64 encoded.
    pub image: String,
}
