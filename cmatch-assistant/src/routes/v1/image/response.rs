use serde::Serialize;

#[derive(Serialize)]
pub struct PostImage {
    pub data: PostImageData,
}

#[derive(Serialize)]
pub struct PostImageData {
    /// The public URL of the uploaded image.
    pub url: String,
}
