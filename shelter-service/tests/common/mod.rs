//! Common test utilities for shelter-service integration tests.
//!
//! Each test spawns the real application on a random port against its own
//! SQLite file with the bootstrap migration applied.

#![allow(dead_code)]

use reqwest::{Client, Response};
use serde_json::{json, Value};
use service_core::config::Config as CommonConfig;
use shelter_service::config::{DatabaseConfig, ShelterConfig};
use shelter_service::services::Database;
use shelter_service::startup::Application;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,shelter_service=debug,sqlx=warn")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn test_config(database_url: String) -> ShelterConfig {
    ShelterConfig {
        common: CommonConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
        },
        service_name: "shelter-service-test".to_string(),
        log_level: "debug".to_string(),
        otlp_endpoint: None,
        database: DatabaseConfig {
            url: database_url,
            max_connections: 4,
            min_connections: 1,
            run_migrations: true,
        },
    }
}

/// Test application wrapper.
pub struct TestApp {
    pub address: String,
    pub http_port: u16,
    pub db: Database,
    pub client: Client,
    // Keeps the SQLite file alive for the life of the test.
    _dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        init_tracing();

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("shelter.db").display());

        let app = Application::build(test_config(database_url))
            .await
            .expect("Failed to build application");

        let http_port = app.http_port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", http_port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        let app = TestApp {
            address,
            http_port,
            db,
            client,
            _dir: dir,
        };
        app.seed_reference_data().await;
        app
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_json(&self, path: &str) -> Value {
        let response = self.get(path).await;
        assert!(
            response.status().is_success(),
            "GET {} returned {}",
            path,
            response.status()
        );
        response.json().await.expect("Failed to parse JSON")
    }

    pub async fn post_animal(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/animals"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Create an animal through the API and assert it succeeded.
    pub async fn create_animal(&self, animal_id: i64, org_id: i64, species: &str) {
        let response = self
            .post_animal(&animal_body(animal_id, org_id, species))
            .await;
        assert_eq!(response.status(), 200, "creating animal {}", animal_id);
    }

    pub async fn count_animals(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM Animal")
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to count animals")
    }

    /// Two states, three organizations, two adopters.
    async fn seed_reference_data(&self) {
        self.exec("INSERT INTO Location (LocationID, City, State) VALUES (1, 'Austin', 'TX')")
            .await;
        self.exec("INSERT INTO Location (LocationID, City, State) VALUES (2, 'Portland', 'OR')")
            .await;
        self.exec("INSERT INTO Organization (OrgID, Name, LocationID) VALUES (1, 'Austin Paws', 1)")
            .await;
        self.exec("INSERT INTO Organization (OrgID, Name, LocationID) VALUES (2, 'Hill Country Rescue', 1)")
            .await;
        self.exec("INSERT INTO Organization (OrgID, Name, LocationID) VALUES (3, 'Rose City Shelter', 2)")
            .await;
        self.exec(
            "INSERT INTO Adopter (Ssn, FirstName, LastName, Phone, Email) \
             VALUES ('123-45-6789', 'Dana', 'Reyes', '555-0100', 'dana@example.org')",
        )
        .await;
        self.exec(
            "INSERT INTO Adopter (Ssn, FirstName, LastName, Phone, Email) \
             VALUES ('987-65-4321', 'Sam', 'Okafor', '555-0199', 'sam@example.org')",
        )
        .await;
    }

    pub async fn insert_exam(&self, exam_id: i64, animal_id: i64, org_id: i64, date: &str, score: i64) {
        sqlx::query(
            "INSERT INTO WelfareExam (ExamID, AnimalID, OrgID, Date, HealthScore, Notes) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(exam_id)
        .bind(animal_id)
        .bind(org_id)
        .bind(date.to_string())
        .bind(score)
        .bind(format!("exam {}", exam_id))
        .execute(self.db.pool())
        .await
        .expect("Failed to insert exam");
    }

    pub async fn insert_adoption(&self, adoption_id: i64, animal_id: i64, ssn: &str, org_id: i64) {
        sqlx::query(
            "INSERT INTO Adoption (AdoptionID, AnimalID, Ssn, OrgID, AdoptionDate) \
             VALUES (?, ?, ?, ?, '2024-06-01')",
        )
        .bind(adoption_id)
        .bind(animal_id)
        .bind(ssn.to_string())
        .bind(org_id)
        .execute(self.db.pool())
        .await
        .expect("Failed to insert adoption");
    }

    pub async fn insert_outcome(&self, outcome_id: i64, animal_id: i64, outcome_type: &str) {
        sqlx::query(
            "INSERT INTO Outcome (OutcomeID, AnimalID, OutcomeType, OutcomeDate) \
             VALUES (?, ?, ?, '2024-07-01')",
        )
        .bind(outcome_id)
        .bind(animal_id)
        .bind(outcome_type.to_string())
        .execute(self.db.pool())
        .await
        .expect("Failed to insert outcome");
    }

    async fn exec(&self, sql: &'static str) {
        sqlx::query(sql)
            .execute(self.db.pool())
            .await
            .unwrap_or_else(|e| panic!("Seed statement failed ({}): {}", sql, e));
    }
}

/// Full create-animal body with every optional field populated.
pub fn animal_body(animal_id: i64, org_id: i64, species: &str) -> Value {
    json!({
        "AnimalID": animal_id,
        "OrgID": org_id,
        "Species": species,
        "Sex": "F",
        "AgeMonths": 18,
        "Microchip": format!("CHIP-{:04}", animal_id),
        "Notes": format!("{} intake", species),
    })
}
