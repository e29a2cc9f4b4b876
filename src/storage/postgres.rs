//! Postgres storage
//!
//! Destinations are kept in the `destinations` table, migrations run on startup

use std::time::Duration;

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::destinations::Destination;

use super::CreateDestinationValues;
use super::Error;
use super::Result;
use super::Storage;
use super::UpdateDestinationValues;

/// Migrator to run migrations on startup
static MIGRATOR: Migrator = sqlx::migrate!();

/// Postgres storage
#[derive(Clone, Debug)]
pub struct Postgres {
    /// Pool of connections
    connection_pool: PgPool,
}

impl Postgres {
    /// Connect to Postgres
    ///
    /// Migrations will be run
    pub async fn connect(database_connection_string: &str) -> Result<Self> {
        let connection_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_connection_string)
            .await
            .map_err(connection_error)?;

        Self::with_pool(connection_pool).await
    }

    /// Create Postgres storage with existing pool
    ///
    /// Migrations will be run
    pub async fn with_pool(connection_pool: PgPool) -> Result<Self> {
        MIGRATOR
            .run(&connection_pool)
            .await
            .map_err(connection_error)?;

        Ok(Self { connection_pool })
    }
}

impl Storage for Postgres {
    async fn find_all_destinations(&self) -> Result<Vec<Destination>> {
        let destinations = sqlx::query_as::<_, Destination>(
            r"
            SELECT *
            FROM destinations
            ORDER BY created_at, id
            ",
        )
        .fetch_all(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(destinations)
    }

    async fn find_single_destination_by_id(&self, id: &Uuid) -> Result<Option<Destination>> {
        let destination = sqlx::query_as::<_, Destination>(
            r"
            SELECT *
            FROM destinations
            WHERE id = $1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(destination)
    }

    async fn create_destination(
        &self,
        values: &CreateDestinationValues<'_>,
    ) -> Result<Destination> {
        let destination = sqlx::query_as::<_, Destination>(
            r"
            INSERT INTO destinations
                (id, name, country, continent, description, image, activities, rating)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            ",
        )
        .bind(Uuid::new_v4())
        .bind(values.name)
        .bind(values.country)
        .bind(values.continent)
        .bind(values.description)
        .bind(values.image)
        .bind(values.activities)
        .bind(values.rating)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(destination)
    }

    async fn update_destination(
        &self,
        id: &Uuid,
        values: &UpdateDestinationValues<'_>,
    ) -> Result<Option<Destination>> {
        let destination = sqlx::query_as::<_, Destination>(
            r"
            UPDATE destinations
            SET
                name = COALESCE($2, name),
                country = COALESCE($3, country),
                continent = COALESCE($4, continent),
                description = COALESCE($5, description),
                image = COALESCE($6, image),
                activities = COALESCE($7, activities),
                rating = COALESCE($8, rating),
                updated_at = GREATEST(CURRENT_TIMESTAMP, updated_at)
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(id)
        .bind(values.name)
        .bind(values.country)
        .bind(values.continent)
        .bind(values.description)
        .bind(values.image)
        .bind(values.activities)
        .bind(values.rating)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(destination)
    }

    async fn delete_destination(&self, id: &Uuid) -> Result<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM destinations
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(result.rows_affected())
    }

    async fn close(&self) {
        self.connection_pool.close().await;

        tracing::debug!("Postgres connection pool closed");
    }
}

/// Utility function for mapping any error into a connection error
#[allow(clippy::needless_pass_by_value)]
fn connection_error<E>(err: E) -> Error
where
    E: std::error::Error,
{
    Error::Connection(err.to_string())
}
