use serde::Deserialize;

#[derive(Deserialize)]
pub struct PostLoginBody {
    pub data: PostLoginData,
}

#[derive(Deserialize)]
pub struct PostLoginData {
    pub account: String,
    pub password: String,
}
