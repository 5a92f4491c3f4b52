use namevault::config::{EnvConfig, MailConfig};
use namevault::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        signing_secret: "secret_key".to_string(),
        mail: MailConfig {
            api_key: "test".to_string(),
            // Unroutable: nothing in the suite is allowed to send real mail
            endpoint: "http://127.0.0.1:1/emails".to_string(),
            from: "noreply@example.com".to_string(),
        },
    }
}

// Test data helpers
pub mod test_data {
    use namevault::types::user::RUserCreate;

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            name: "alice".to_string(),
            password: "secret123".to_string(),
        }
    }
}
