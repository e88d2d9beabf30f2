use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserInfo;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RegisterReq {
    #[schema(example = "Ada")]
    pub firstname: Option<String>,
    #[schema(example = "Lovelace")]
    pub lastname: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "s3cret")]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "s3cret")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub user: UserInfo,
}
