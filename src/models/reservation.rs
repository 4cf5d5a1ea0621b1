use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Reservation {
    pub id_reservation: i32,
    pub id_salon: i32,
    pub id_coiffeur: i32,
    #[sqlx(rename = "date_reservation")]
    pub date: NaiveDateTime,
}
