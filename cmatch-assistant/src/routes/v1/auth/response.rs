use serde::Serialize;

#[derive(Serialize)]
pub struct PostLogin {
    pub data: PostLoginData,
}

#[derive(Serialize)]
pub struct PostLoginData {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "tokenType")]
    pub token_type: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,
}

#[derive(Serialize)]
pub struct GetTokenInfo {
    pub data: GetTokenInfoData,
}

#[derive(Serialize)]
pub struct GetTokenInfoData {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub account: String,
    pub name: String,
}
