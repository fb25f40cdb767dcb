use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use portfolio_site::{
    db::Dal,
    graceful_shutdown::shutdown_signal,
    repositories::project::ProjectRepository,
    routes::{configure_routes, not_found_service, static_files},
    settings::AppConfig,
    AppState
};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        subscriber.json().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Configuration error")?;
    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let dal = Dal::new(config.database_path.clone());
    let app_state = web::Data::new(AppState::new(dal));

    if config.init_schema {
        app_state.project_handler.project_repo
            .ensure_schema()
            .await
            .context("Failed to prepare the projects table")?;
    }

    let server_addr = config.server_addr();
    let static_dir = config.static_dir.clone();

    tracing::info!(
        "Starting {} v{} on {} (database: {})",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr,
        config.database_path.display()
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
            .service(static_files(&static_dir))
            .default_service(not_found_service())
    })
    .workers(config.worker_count)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    tokio::select! {
        res = server => res.context("Server error")?,
        _ = shutdown_signal() => {},
    }

    Ok(())
}
