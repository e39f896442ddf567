extern crate actix_web as aw;

use ::aw::{web::Data, HttpServer};

use ::dotenvy::dotenv;
use ::log::{info, trace};
use ::sea_orm::{Database, DbErr};
use migration::{Migrator, MigratorTrait};

pub mod catalog;
pub mod data;
pub mod handlers;
pub mod import;
pub mod manager;
pub mod settings;
pub mod state;
use settings::*;
use state::*;

macro_rules! app {
    () => {
        ::actix_web::App::new()
            .wrap(::actix_web::middleware::Logger::default())
            .configure(handlers::config)
    };
}

#[derive(Debug, ::thiserror::Error)]
enum StartUpError {
    #[error("configuration error: {0}")]
    Settings(#[from] SettingsError),
    #[error("Database IO error: {0}")]
    DbErr(#[from] DbErr),
    #[error("tours import failed: {0}")]
    Import(#[from] import::ImportError),
    #[error("general IO error: {0}")]
    IO(#[from] std::io::Error),
}

#[actix_web::main]
async fn main() -> Result<(), StartUpError> {
    dotenv().ok();

    env_logger::init();

    trace!("TRACE level enabled");

    let settings = Settings::from_env()?;

    let db = Database::connect(settings.database_url.as_str()).await?;
    Migrator::up(&db, None).await?;

    if let Some(path) = settings.tours_import_file.as_deref() {
        import::import_file(&db, path).await?;
    }

    let registry = Data::new(Registry { db });

    info!(
        "listening on {}:{} ({} workers)",
        settings.bind_addr, settings.port, settings.workers
    );

    let srv = HttpServer::new(move || app!().app_data(Data::clone(&registry)))
        .workers(settings.workers)
        .bind((settings.bind_addr.as_str(), settings.port))?
        .run();

    srv.await?;

    Ok(())
}
