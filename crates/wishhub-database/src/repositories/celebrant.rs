//! Celebrant repository implementation.

use sqlx::PgPool;

use wishhub_core::error::AppError;
use wishhub_core::result::AppResult;
use wishhub_core::types::CelebrantId;
use wishhub_entity::celebrant::{Celebrant, CreateCelebrant};

/// Repository for celebrant account records.
#[derive(Debug, Clone)]
pub struct CelebrantRepository {
    pool: PgPool,
}

impl CelebrantRepository {
    /// Create a new celebrant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a celebrant by primary key.
    pub async fn find_by_id(&self, id: CelebrantId) -> AppResult<Option<Celebrant>> {
        sqlx::query_as::<_, Celebrant>("SELECT * FROM celebrants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::internal_with("Failed to find celebrant by id", e))
    }

    /// Find a celebrant by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Celebrant>> {
        sqlx::query_as::<_, Celebrant>("SELECT * FROM celebrants WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::internal_with("Failed to find celebrant by email", e))
    }

    /// Create a new celebrant account.
    pub async fn create(&self, data: &CreateCelebrant) -> AppResult<Celebrant> {
        sqlx::query_as::<_, Celebrant>(
            "INSERT INTO celebrants (email, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("celebrants_email_key") =>
            {
                AppError::email_already_exists("Email already exists")
            }
            _ => AppError::internal_with("Failed to create celebrant", e),
        })
    }

    /// Overwrite the stored refresh credential.
    ///
    /// Called on every login and refresh; the overwrite is what invalidates
    /// the previously issued refresh token.
    pub async fn store_refresh_token(
        &self,
        id: CelebrantId,
        refresh_token: Option<&str>,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE celebrants SET refresh_token = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(refresh_token)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to store refresh token", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::internal(format!("Celebrant {id} not found")));
        }
        Ok(())
    }
}
