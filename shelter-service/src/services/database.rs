//! Database service for shelter-service.
//!
//! One pooled connection is acquired per operation and returned to the pool when
//! the guard drops, whichever way the operation exits. Delete is the only
//! operation that needs a transaction (existence check plus the delete).

use crate::models::{
    AdopterContact, AdoptionStat, Animal, NewAnimal, OutcomeStat, SpeciesCount, WelfareFollowup,
};
use crate::query::{Filter, SelectStatement};
use crate::services::metrics::{record_error, record_write, DB_QUERY_DURATION};
use service_core::error::AppError;
use sqlx::any::AnyPoolOptions;
use sqlx::error::ErrorKind;
use sqlx::pool::PoolConnection;
use sqlx::{Any, AnyPool};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Row cap on `/animals-simple`.
pub const SIMPLE_LIST_LIMIT: u32 = 10;

const ANIMAL_COLUMNS: &str =
    "SELECT AnimalID, OrgID, Species, Sex, AgeMonths, Microchip, Notes FROM Animal";

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
}

impl Database {
    /// Create a new database connection pool. The URL scheme picks the driver
    /// (`mysql://` or `sqlite://`).
    #[instrument(skip(database_url), fields(service = "shelter-service"))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, AppError> {
        sqlx::any::install_default_drivers();

        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to database"
        );

        let pool = AnyPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("Database connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    async fn session(&self) -> Result<PoolConnection<Any>, AppError> {
        self.pool.acquire().await.map_err(|e| {
            record_error("db_acquire");
            AppError::DatabaseError(anyhow::anyhow!("Failed to acquire connection: {}", e))
        })
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Create the shelter tables if they do not exist.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Animals
    // -------------------------------------------------------------------------

    /// First few animals by id.
    #[instrument(skip(self))]
    pub async fn list_animals_simple(&self) -> Result<Vec<Animal>, AppError> {
        let stmt = SelectStatement::new(ANIMAL_COLUMNS)
            .order_by("AnimalID")
            .limit(SIMPLE_LIST_LIMIT);
        self.fetch_rows("list_animals_simple", stmt).await
    }

    /// Animals matching the optional species and organization filters.
    #[instrument(skip(self))]
    pub async fn search_animals(
        &self,
        species: &Filter<String>,
        org_id: &Filter<i64>,
    ) -> Result<Vec<Animal>, AppError> {
        let stmt = SelectStatement::new(ANIMAL_COLUMNS)
            .filter("Species", species)
            .filter("OrgID", org_id)
            .order_by("AnimalID");
        self.fetch_rows("search_animals", stmt).await
    }

    /// Insert one animal. Key and foreign-key rejections from the store become
    /// client errors.
    #[instrument(skip(self, input), fields(animal_id = input.animal_id, org_id = input.org_id))]
    pub async fn create_animal(&self, input: NewAnimal) -> Result<(), AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["create_animal"])
            .start_timer();

        let animal_id = input.animal_id;
        let org_id = input.org_id;
        let mut conn = self.session().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO Animal (AnimalID, OrgID, Species, Sex, AgeMonths, Microchip, Notes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(input.animal_id)
        .bind(input.org_id)
        .bind(input.species)
        .bind(input.sex)
        .bind(input.age_months)
        .bind(input.microchip)
        .bind(input.notes)
        .execute(&mut *conn)
        .await;

        timer.observe_duration();

        match result {
            Ok(_) => {
                record_write("create_animal", "ok");
                info!(animal_id = animal_id, "Animal created");
                Ok(())
            }
            Err(sqlx::Error::Database(ref db_err))
                if matches!(db_err.kind(), ErrorKind::UniqueViolation) =>
            {
                record_write("create_animal", "conflict");
                warn!(animal_id = animal_id, error = %db_err, "Duplicate animal id");
                Err(AppError::BadRequest(anyhow::anyhow!(
                    "Animal {} already exists",
                    animal_id
                )))
            }
            Err(sqlx::Error::Database(ref db_err))
                if matches!(db_err.kind(), ErrorKind::ForeignKeyViolation) =>
            {
                record_write("create_animal", "conflict");
                warn!(org_id = org_id, error = %db_err, "Unknown organization");
                Err(AppError::BadRequest(anyhow::anyhow!(
                    "Organization {} does not exist",
                    org_id
                )))
            }
            Err(sqlx::Error::Database(ref db_err))
                if matches!(
                    db_err.kind(),
                    ErrorKind::NotNullViolation | ErrorKind::CheckViolation
                ) =>
            {
                record_write("create_animal", "conflict");
                warn!(error = %db_err, "Animal row rejected by store constraint");
                Err(AppError::BadRequest(anyhow::anyhow!(
                    "Animal violates a store constraint"
                )))
            }
            Err(e) => {
                record_write("create_animal", "error");
                record_error("db_error");
                Err(AppError::DatabaseError(anyhow::anyhow!(
                    "Failed to create animal: {}",
                    e
                )))
            }
        }
    }

    /// Delete an animal after confirming it exists. Returns `false` when there
    /// was nothing to delete; the store is left untouched in that case.
    #[instrument(skip(self))]
    pub async fn delete_animal(&self, animal_id: i64) -> Result<bool, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["delete_animal"])
            .start_timer();

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to begin transaction: {}", e))
        })?;

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT AnimalID FROM Animal WHERE AnimalID = ?")
                .bind(animal_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(anyhow::anyhow!("Failed to look up animal: {}", e))
                })?;

        if existing.is_none() {
            timer.observe_duration();
            record_write("delete_animal", "not_found");
            return Ok(false);
        }

        sqlx::query("DELETE FROM Animal WHERE AnimalID = ?")
            .bind(animal_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                record_write("delete_animal", "error");
                AppError::DatabaseError(anyhow::anyhow!("Failed to delete animal: {}", e))
            })?;

        tx.commit().await.map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to commit delete: {}", e))
        })?;

        timer.observe_duration();
        record_write("delete_animal", "ok");
        info!(animal_id = animal_id, "Animal deleted");

        Ok(true)
    }

    // -------------------------------------------------------------------------
    // Adopters
    // -------------------------------------------------------------------------

    /// Overwrite an adopter's phone and email. Returns `false` when no row was
    /// affected.
    #[instrument(skip(self, contact))]
    pub async fn update_adopter(
        &self,
        ssn: &str,
        contact: AdopterContact,
    ) -> Result<bool, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["update_adopter"])
            .start_timer();

        let mut conn = self.session().await?;
        let result = sqlx::query("UPDATE Adopter SET Phone = ?, Email = ? WHERE Ssn = ?")
            .bind(contact.phone)
            .bind(contact.email)
            .bind(ssn.to_string())
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                record_write("update_adopter", "error");
                AppError::DatabaseError(anyhow::anyhow!("Failed to update adopter: {}", e))
            })?;

        timer.observe_duration();

        let updated = result.rows_affected() > 0;
        record_write("update_adopter", if updated { "ok" } else { "not_found" });
        if updated {
            info!("Adopter contact updated");
        }

        Ok(updated)
    }

    // -------------------------------------------------------------------------
    // Reports
    // -------------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn animal_stats(&self) -> Result<Vec<SpeciesCount>, AppError> {
        let stmt = SelectStatement::new("SELECT Species, COUNT(*) AS Count FROM Animal")
            .group_by("Species")
            .order_by("Species");
        self.fetch_rows("animal_stats", stmt).await
    }

    /// Exams scoring 6 or lower, newest first.
    #[instrument(skip(self))]
    pub async fn welfare_followups(
        &self,
        species: &Filter<String>,
    ) -> Result<Vec<WelfareFollowup>, AppError> {
        let stmt = SelectStatement::new(
            "SELECT w.ExamID AS ExamID, w.AnimalID AS AnimalID, a.Species AS Species, \
             w.OrgID AS OrgID, o.Name AS OrgName, CAST(w.Date AS CHAR) AS Date, \
             w.HealthScore AS HealthScore, w.Notes AS Notes \
             FROM WelfareExam w \
             JOIN Animal a ON a.AnimalID = w.AnimalID \
             JOIN Organization o ON o.OrgID = w.OrgID",
        )
        .require("w.HealthScore <= 6")
        .filter("a.Species", species)
        .order_by("w.Date DESC, w.ExamID");
        self.fetch_rows("welfare_followups", stmt).await
    }

    #[instrument(skip(self))]
    pub async fn adoption_stats(
        &self,
        state: &Filter<String>,
    ) -> Result<Vec<AdoptionStat>, AppError> {
        let stmt = SelectStatement::new(
            "SELECT l.State AS State, a.Species AS Species, COUNT(*) AS AdoptionCount \
             FROM Adoption ad \
             JOIN Animal a ON a.AnimalID = ad.AnimalID \
             JOIN Organization o ON o.OrgID = ad.OrgID \
             JOIN Location l ON l.LocationID = o.LocationID",
        )
        .filter("l.State", state)
        .group_by("l.State, a.Species")
        .order_by("l.State, a.Species");
        self.fetch_rows("adoption_stats", stmt).await
    }

    #[instrument(skip(self))]
    pub async fn outcome_stats(
        &self,
        org_id: &Filter<i64>,
        outcome_type: &Filter<String>,
    ) -> Result<Vec<OutcomeStat>, AppError> {
        let stmt = SelectStatement::new(
            "SELECT oc.OutcomeType AS OutcomeType, COUNT(*) AS Count \
             FROM Outcome oc \
             JOIN Animal a ON a.AnimalID = oc.AnimalID",
        )
        .filter("a.OrgID", org_id)
        .filter("oc.OutcomeType", outcome_type)
        .group_by("oc.OutcomeType")
        .order_by("oc.OutcomeType");
        self.fetch_rows("outcome_stats", stmt).await
    }

    async fn fetch_rows<T>(
        &self,
        operation: &str,
        stmt: SelectStatement,
    ) -> Result<Vec<T>, AppError>
    where
        T: for<'r> sqlx::FromRow<'r, sqlx::any::AnyRow> + Send + Unpin,
    {
        let timer = DB_QUERY_DURATION
            .with_label_values(&[operation])
            .start_timer();

        let mut conn = self.session().await?;
        let mut builder = stmt.build();
        let rows = builder
            .build_query_as::<T>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                record_error("db_error");
                AppError::DatabaseError(anyhow::anyhow!("Failed to run {}: {}", operation, e))
            })?;

        timer.observe_duration();

        Ok(rows)
    }
}
