use actix_web::{web, App, HttpServer};
use canastra::config::db::DbSettings;
use canastra::config::server::ServerConfig;
use canastra::infra::state::build_state;
use canastra::middleware::{cors_middleware, RequestTrace, StructuredLogger};
use canastra::{routes, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let server_config = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Invalid server configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = telemetry::init_tracing(server_config.log_file.as_deref()) {
        eprintln!("❌ Failed to initialise logging: {e}");
        std::process::exit(1);
    }

    let db_settings = match DbSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "invalid database configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db_settings(db_settings).build().await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialise the store");
            std::process::exit(1);
        }
    };

    let (host, port) = server_config.bind_addr();
    tracing::info!(host = %host, port, "server=starting");

    let data = web::Data::new(app_state);
    let cors_origins = server_config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
