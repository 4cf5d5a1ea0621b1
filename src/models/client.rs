use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
pub struct Client {
    pub id_client: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Body of `POST /api/clients/add`. Absent fields become empty strings.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewClientRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

/// Body of `PUT /api/clients/update`. A missing `id_client` reads as 0,
/// which never matches a stored row.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateClientRequest {
    pub id_client: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteClientParams {
    pub id_client: i64,
}
