use serde::Deserialize;

#[derive(Deserialize)]
pub struct ItemIdPath {
    pub item_id: String,
}

#[derive(Deserialize)]
pub struct PostItemBody {
    pub data: PostItemData,
}

#[derive(Deserialize)]
pub struct PostItemData {
    pub kind: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

#[derive(Deserialize)]
pub struct GetItemCountQuery {
    pub kind: Option<String>,
    pub contains: Option<String>,
}

#[derive(Deserialize)]
pub struct GetItemListQuery {
    pub kind: Option<String>,
    pub contains: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Deserialize)]
pub struct PatchItemBody {
    pub data: PatchItemData,
}

#[derive(Deserialize)]
pub struct PatchItemData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}
