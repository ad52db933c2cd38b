//! Point d'entrée principal de l'application.
//! Charge la configuration, initialise les collaborateurs en mémoire,
//! et démarre le serveur web avec Axum.

use anyhow::{Context, Result};
use dotenv::dotenv;
use log::info;
use std::{net::SocketAddr, sync::Arc};

use credgate::{
    backend::router::get_router, config::Settings, database::Database, email::Outbox,
    services::AuthService,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Charger les variables d'environnement
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = Settings::from_env().context("Invalid configuration")?;
    info!("Password policy: {:?}", settings.password_policy);

    let outbox = Arc::new(Outbox::default());
    let db = Arc::new(Database::new(outbox, settings.public_base_url.clone()));
    let service = AuthService::new(settings.password_policy, db.clone(), db.clone(), db);
    let app = get_router(Arc::new(service));

    // Démarrer le serveur web
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.http_port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to open web server listener")?;

    axum::serve(listener, app)
        .await
        .context("Failed to bind Axum to listener")?;

    Ok(())
}
