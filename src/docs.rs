use axum::Json;
use utoipa::OpenApi;

use crate::models::{
    Client, Coiffeur, Creneau, NewClientRequest, Reservation, Salon, UpdateClientRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::client::list_clients,
        crate::handlers::client::create_client,
        crate::handlers::client::update_client,
        crate::handlers::client::delete_client,
    ),
    components(schemas(
        Client,
        NewClientRequest,
        UpdateClientRequest,
        Salon,
        Coiffeur,
        Reservation,
        Creneau,
    )),
    tags((name = "clients", description = "Salon customers"))
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
