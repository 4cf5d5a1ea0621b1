//! Storage seam for client records.

mod postgres;
#[cfg(test)]
mod memory;

pub use postgres::PgClientRepository;
#[cfg(test)]
pub use memory::InMemoryClientRepository;

use axum::async_trait;

use crate::models::Client;

/// Field values written by create and update. The password is already hashed.
#[derive(Debug, Clone)]
pub struct ClientFields {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Client>, sqlx::Error>;

    /// Stores a new row and returns it with its generated id.
    async fn insert(&self, fields: ClientFields) -> Result<Client, sqlx::Error>;

    /// Returns `None` when no row has this id.
    async fn update(&self, id: i32, fields: ClientFields) -> Result<Option<Client>, sqlx::Error>;

    /// Returns `false` when no row has this id.
    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error>;
}
