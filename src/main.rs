use std::path::PathBuf;

use ipldb::{ingest, web};
use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
enum LaunchError {
    #[error(transparent)]
    Ingest(#[from] ingest::IngestError),

    #[error(transparent)]
    Rocket(#[from] rocket::Error),
}

#[rocket::main]
async fn main() -> Result<(), LaunchError> {
    let data_dir = std::env::var_os("IPLDB_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));

    // A load failure means no dashboard at all; Rocket never launches.
    let context = ingest::load(&data_dir)?;
    info!("Serving dashboard over data from {}", data_dir.display());

    rocket::build()
        .mount("/", web::routes())
        .manage(context)
        .attach(web::template_fairing())
        .launch()
        .await?;

    Ok(())
}
