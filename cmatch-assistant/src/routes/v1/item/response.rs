use serde::Serialize;

#[derive(Serialize)]
pub struct PostItem {
    pub data: PostItemData,
}

#[derive(Serialize)]
pub struct PostItemData {
    #[serde(rename = "itemId")]
    pub item_id: String,
}

#[derive(Serialize)]
pub struct GetItemCount {
    pub data: GetCountData,
}

#[derive(Serialize)]
pub struct GetCountData {
    pub count: u64,
}

#[derive(Serialize)]
pub struct GetItemList {
    pub data: Vec<GetItemData>,
}

#[derive(Serialize)]
pub struct GetItemData {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub kind: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "modifiedAt")]
    pub modified_at: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
