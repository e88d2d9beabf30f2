use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use anyhow::Context;
use dotenvy::dotenv;

mod api;
mod auth;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod models;
mod routes;
mod service;
mod store;

use auth::session::SessionStore;
use config::Config;
use db::init_db;
use store::{Stores, mysql::MySqlStore};

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Payroll backend is running"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.tracing_level())
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(addr = %config.server_addr, "Server starting...");

    let pool = init_db(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;

    std::fs::create_dir_all(&config.upload_dir)
        .with_context(|| format!("Failed to create upload dir {}", config.upload_dir))?;

    let stores = Stores::new(Arc::new(MySqlStore::new(pool)));
    let sessions = Data::new(SessionStore::new(
        config.session_ttl_secs.map(Duration::from_secs),
    ));
    let config_data = Data::new(config.clone());
    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&config.cors_allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(NormalizePath::trim())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(config_data.clone())
            .app_data(sessions.clone())
            .configure(|cfg| stores.register(cfg))
            .service(index)
            .configure(|cfg| routes::configure(cfg, &config))
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
