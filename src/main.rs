use std::process;

use actix_web::{App, HttpServer, middleware, web};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use dotenvy::dotenv;

use pushkind_vitrine::db::establish_connection_pool_with_size;
use pushkind_vitrine::models::config::ServerConfig;
use pushkind_vitrine::repository::DieselRepository;
use pushkind_vitrine::routes;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Defaults, then `config/default.yaml`, then `config/{APP_ENV}.yaml`, then
/// `APP_*` environment variables.
fn load_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

    config::Config::builder()
        .set_default("address", "127.0.0.1")?
        .set_default("port", 8080_i64)?
        .set_default("database_url", "vitrine.db")?
        .set_default("max_connections", 8_i64)?
        .set_default("delete_policy", "hard")?
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP").try_parsing(true))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = match load_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    let pool = match establish_connection_pool_with_size(
        &server_config.database_url,
        server_config.max_connections,
    ) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection pool: {e}");
            process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool.clone());
    match repo.ping() {
        Ok(()) => log::info!("Connected to product store at {}", server_config.database_url),
        Err(e) => {
            log::error!("Product store is unreachable: {e}");
            process::exit(1);
        }
    }

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = conn.run_pending_migrations(MIGRATIONS) {
                log::error!("Failed to run migrations: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            log::error!("Failed to get connection for migrations: {e}");
            process::exit(1);
        }
    }

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting server at http://{}:{} (delete policy: {:?})",
        bind_address.0,
        bind_address.1,
        server_config.delete_policy
    );

    let repo = web::Data::new(repo);
    let server_config = web::Data::new(server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .app_data(server_config.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
