use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize)]
pub struct PostUserBody {
    pub data: PostUserData,
}

#[derive(Deserialize)]
pub struct PostUserData {
    pub account: String,
    pub password: String,
    pub name: Option<String>,
    pub info: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
pub struct PatchUserBody {
    pub data: PatchUserData,
}

#[derive(Deserialize)]
pub struct PatchUserData {
    pub password: Option<String>,
    pub name: Option<String>,
    pub info: Option<Map<String, Value>>,
}
