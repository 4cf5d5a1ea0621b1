use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A bookable time slot for one stylist.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Creneau {
    pub id_creneau: i32,
    pub id_coiffeur: i32,
    #[sqlx(rename = "date_creneau")]
    pub date: NaiveDateTime,
    pub availability: bool,
}
