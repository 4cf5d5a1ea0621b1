use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use bcrypt::hash;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    error::AppError,
    models::{Client, DeleteClientParams, NewClientRequest, UpdateClientRequest},
    repository::ClientFields,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "clients",
    responses(
        (status = 200, description = "Every stored client", body = [Client]),
        (status = 500, description = "Database error")
    )
)]
pub async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, AppError> {
    let clients = state.clients.list().await?;
    tracing::debug!(count = clients.len(), "listed clients");
    Ok(Json(clients))
}

#[utoipa::path(
    post,
    path = "/api/clients/add",
    tag = "clients",
    request_body = NewClientRequest,
    responses(
        (status = 201, description = "Client created", body = Client),
        (status = 400, description = "Malformed body"),
        (status = 405, description = "Wrong method"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_client(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<Client>), AppError> {
    let req: NewClientRequest = from_object(payload)?;

    let fields = client_fields(
        req.firstname,
        req.lastname,
        req.email,
        req.password,
        state.config.bcrypt_cost,
    )
    .await?;

    let client = state.clients.insert(fields).await?;
    tracing::info!(id_client = client.id_client, "client created");

    Ok((StatusCode::CREATED, Json(client)))
}

#[utoipa::path(
    put,
    path = "/api/clients/update",
    tag = "clients",
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Unknown id_client"),
        (status = 405, description = "Wrong method"),
        (status = 500, description = "Database error")
    )
)]
pub async fn update_client(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Client>, AppError> {
    let req: UpdateClientRequest = from_object(payload)?;
    let id = stored_id(req.id_client)?;

    let fields = client_fields(
        req.firstname,
        req.lastname,
        req.email,
        req.password,
        state.config.bcrypt_cost,
    )
    .await?;

    let client = state
        .clients
        .update(id, fields)
        .await?
        .ok_or(AppError::ClientNotFound)?;
    tracing::info!(id_client = id, "client updated");

    Ok(Json(client))
}

#[utoipa::path(
    delete,
    path = "/api/clients/delete",
    tag = "clients",
    params(("id_client" = i64, Query, description = "Id of the client to remove")),
    responses(
        (status = 200, description = "Client deleted"),
        (status = 400, description = "Missing or non-integer id_client"),
        (status = 404, description = "Unknown id_client"),
        (status = 405, description = "Wrong method"),
        (status = 500, description = "Database error")
    )
)]
pub async fn delete_client(
    State(state): State<AppState>,
    params: Result<Query<DeleteClientParams>, QueryRejection>,
) -> Result<StatusCode, AppError> {
    let Query(params) = params?;
    let id = stored_id(params.id_client)?;

    if !state.clients.delete(id).await? {
        return Err(AppError::ClientNotFound);
    }
    tracing::info!(id_client = id, "client deleted");

    Ok(StatusCode::OK)
}

/// Maps a JSON object body onto a request type. Arrays, scalars and `null`
/// never reach the struct, so positional records are rejected.
fn from_object<T: DeserializeOwned>(
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(object) = payload?;
    serde_json::from_value(Value::Object(object)).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Ids are `SERIAL` columns; anything outside `i32` cannot name a row.
fn stored_id(id: i64) -> Result<i32, AppError> {
    i32::try_from(id).map_err(|_| AppError::ClientNotFound)
}

async fn client_fields(
    firstname: String,
    lastname: String,
    email: String,
    password: String,
    cost: u32,
) -> Result<ClientFields, AppError> {
    // bcrypt is CPU-bound; keep it off the request workers.
    let password_hash = tokio::task::spawn_blocking(move || hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(ClientFields {
        firstname,
        lastname,
        email,
        password_hash,
    })
}
