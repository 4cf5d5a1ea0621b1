use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A stylist working in one salon.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Coiffeur {
    pub id_coiffeur: i32,
    pub id_salon: i32,
    pub firstname: String,
    pub lastname: String,
}
