use axum::async_trait;
use tokio::sync::Mutex;

use super::{ClientFields, ClientRepository};
use crate::models::Client;

/// Vec-backed stand-in for the clients table, with SERIAL-style ids.
#[derive(Default)]
pub struct InMemoryClientRepository {
    rows: Mutex<Rows>,
    failing: bool,
}

#[derive(Default)]
struct Rows {
    clients: Vec<Client>,
    last_id: i32,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the database were unreachable.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub async fn snapshot(&self) -> Vec<Client> {
        self.rows.lock().await.clients.clone()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn list(&self) -> Result<Vec<Client>, sqlx::Error> {
        self.check()?;
        Ok(self.snapshot().await)
    }

    async fn insert(&self, fields: ClientFields) -> Result<Client, sqlx::Error> {
        self.check()?;
        let mut rows = self.rows.lock().await;
        rows.last_id += 1;
        let client = Client {
            id_client: rows.last_id,
            firstname: fields.firstname,
            lastname: fields.lastname,
            email: fields.email,
            password_hash: fields.password_hash,
        };
        rows.clients.push(client.clone());
        Ok(client)
    }

    async fn update(&self, id: i32, fields: ClientFields) -> Result<Option<Client>, sqlx::Error> {
        self.check()?;
        let mut rows = self.rows.lock().await;
        let Some(row) = rows.clients.iter_mut().find(|c| c.id_client == id) else {
            return Ok(None);
        };
        row.firstname = fields.firstname;
        row.lastname = fields.lastname;
        row.email = fields.email;
        row.password_hash = fields.password_hash;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        self.check()?;
        let mut rows = self.rows.lock().await;
        let before = rows.clients.len();
        rows.clients.retain(|c| c.id_client != id);
        Ok(rows.clients.len() < before)
    }
}
