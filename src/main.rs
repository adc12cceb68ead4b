use account_service::config::{EnvConfig, CONFIG};
use account_service::db::postgres_service::PostgresService;
use account_service::types::account::AccountCreate;
use account_service::types::error::AppError;
use log::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    env_logger::init();
    let config = EnvConfig::from_env();
    CONFIG.set(config.clone()).ok();

    let db = PostgresService::new(&config.db_url).await?;

    // Seed the bootstrap superuser if one was configured. Safe to run on
    // every start: an existing email just skips the seed.
    if let Some(seed) = &config.admin_seed {
        let payload = AccountCreate {
            email: seed.email.clone(),
            password: seed.password.clone(),
            ..Default::default()
        };
        match db.create_superuser(payload).await {
            Ok(admin) => info!("Seeded superuser {}", admin.email),
            Err(AppError::AlreadyExists) => {
                info!("Superuser {} already present, skipping seed", seed.email)
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
