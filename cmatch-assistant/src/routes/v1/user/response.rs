use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
pub struct PostUser {
    pub data: PostUserData,
}

#[derive(Serialize)]
pub struct PostUserData {
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Serialize)]
pub struct GetUser {
    pub data: GetUserData,
}

#[derive(Serialize)]
pub struct GetUserData {
    pub account: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "modifiedAt")]
    pub modified_at: String,
    pub name: String,
    pub info: Map<String, Value>,
}
