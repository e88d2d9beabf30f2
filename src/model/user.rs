use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Users row, hash included. Never serialized.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// The user fields safe to hand back to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Ada Lovelace")]
    pub username: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}
