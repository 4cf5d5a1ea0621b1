use axum::async_trait;
use sqlx::PgPool;

use super::{ClientFields, ClientRepository};
use crate::models::Client;

#[derive(Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn list(&self) -> Result<Vec<Client>, sqlx::Error> {
        sqlx::query_as::<_, Client>(
            "SELECT id_client, firstname, lastname, email, password_hash FROM clients ORDER BY id_client",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn insert(&self, fields: ClientFields) -> Result<Client, sqlx::Error> {
        sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (firstname, lastname, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id_client, firstname, lastname, email, password_hash
            "#,
        )
        .bind(&fields.firstname)
        .bind(&fields.lastname)
        .bind(&fields.email)
        .bind(&fields.password_hash)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, id: i32, fields: ClientFields) -> Result<Option<Client>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        // Row lock holds until commit, so a concurrent delete waits for us.
        let existing: Option<i32> =
            sqlx::query_scalar("SELECT id_client FROM clients WHERE id_client = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_none() {
            return Ok(None);
        }

        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET firstname = $1, lastname = $2, email = $3, password_hash = $4
            WHERE id_client = $5
            RETURNING id_client, firstname, lastname, email, password_hash
            "#,
        )
        .bind(&fields.firstname)
        .bind(&fields.lastname)
        .bind(&fields.email)
        .bind(&fields.password_hash)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(client))
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i32> =
            sqlx::query_scalar("SELECT id_client FROM clients WHERE id_client = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM clients WHERE id_client = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(true)
    }
}

#[cfg(all(test, feature = "postgres-tests"))]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn fields(firstname: &str) -> ClientFields {
        ClientFields {
            firstname: firstname.into(),
            lastname: "Durand".into(),
            email: format!("{}@example.com", firstname.to_lowercase()),
            password_hash: "$2b$04$placeholderplaceholderplaceholderplaceholde".into(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn list_is_empty_on_fresh_schema(pool: PgPool) -> sqlx::Result<()> {
        let repo = PgClientRepository::new(pool);
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn inserted_row_is_listed_verbatim(pool: PgPool) -> sqlx::Result<()> {
        let repo = PgClientRepository::new(pool);

        let created = repo.insert(fields("Alice")).await?;
        assert!(created.id_client > 0);

        assert_eq!(repo.list().await?, vec![created]);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn update_and_delete_report_missing_rows(pool: PgPool) -> sqlx::Result<()> {
        let repo = PgClientRepository::new(pool);
        let kept = repo.insert(fields("Alice")).await?;

        assert_eq!(repo.update(999_999, fields("Bob")).await?, None);
        assert!(!repo.delete(999_999).await?);
        assert_eq!(repo.list().await?, vec![kept]);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn update_rewrites_fields_and_delete_removes_one_row(pool: PgPool) -> sqlx::Result<()> {
        let repo = PgClientRepository::new(pool);
        let alice = repo.insert(fields("Alice")).await?;
        let bob = repo.insert(fields("Bob")).await?;

        let renamed = repo
            .update(alice.id_client, fields("Alicia"))
            .await?
            .expect("row exists");
        assert_eq!(renamed.id_client, alice.id_client);
        assert_eq!(renamed.firstname, "Alicia");

        assert!(repo.delete(alice.id_client).await?);
        assert_eq!(repo.list().await?, vec![bob]);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn concurrent_inserts_get_distinct_increasing_ids(pool: PgPool) -> sqlx::Result<()> {
        let repo = Arc::new(PgClientRepository::new(pool));

        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.insert(fields(&format!("Client{i}"))).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.expect("task panicked")?.id_client);
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);

        let listed: Vec<i32> = repo.list().await?.iter().map(|c| c.id_client).collect();
        assert_eq!(listed, ids);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn long_field_values_are_stored_whole(pool: PgPool) -> sqlx::Result<()> {
        let repo = PgClientRepository::new(pool);
        let long = "x".repeat(500);

        let created = repo
            .insert(ClientFields {
                firstname: long.clone(),
                lastname: long.clone(),
                email: format!("{long}@example.com"),
                password_hash: "hash".into(),
            })
            .await?;

        assert_eq!(created.firstname.len(), 500);
        assert_eq!(repo.list().await?, vec![created]);
        Ok(())
    }
}
