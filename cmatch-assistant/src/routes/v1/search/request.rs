use serde::Deserialize;

#[derive(Deserialize)]
pub struct PostProductBody {
    pub data: PostProductData,
}

#[derive(Deserialize)]
pub struct PostProductData {
    pub query: String,
    pub brand: Option<String>,
    pub page: Option<u64>,
    #[serde(rename = "perPage")]
    pub per_page: Option<u64>,
}

#[derive(Deserialize)]
pub struct PostVisualBody {
    pub data: PostVisualData,
}

#[derive(Deserialize)]
pub struct PostVisualData {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub page: Option<u64>,
    #[serde(rename = "perPage")]
    pub per_page: Option<u64>,
}
