use account_service::config::{EnvConfig, JwtConfig, MailConfig};
use account_service::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

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

#[allow(dead_code)]
pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        db_url: "test".to_string(), // Not used in tests
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            access_ttl_secs: 15 * 60,
            refresh_ttl_secs: 7 * 24 * 60 * 60,
        },
        mail: MailConfig {
            api_key: "test".to_string(),
            endpoint: "test".to_string(),
            from: "noreply@example.com".to_string(),
        },
        admin_seed: None,
    }
}

// Test data helpers
pub mod test_data {
    use account_service::types::account::AccountCreate;

    pub fn sample_user() -> AccountCreate {
        AccountCreate {
            email: "test@example.com".to_string(),
            password: "correct horse battery staple".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            ..Default::default()
        }
    }
}
