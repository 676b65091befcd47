use std::env;
use std::fs;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use activities::config::AppConfig;
use activities::database::catalog;

/// Writes the catalog as a seed file: `export_catalog [OUTPUT]`.
/// Re-exports (and so validates) `CATALOG_PATH` when it is set.
fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = AppConfig::from_env()?;
    let seed = match &config.catalog_path {
        Some(path) => catalog::load_catalog_file(path)?,
        None => catalog::default_catalog(),
    };
    let json = catalog::to_json_pretty(&seed)?;

    match env::args().nth(1) {
        Some(output) => {
            fs::write(&output, json).with_context(|| format!("could not write {}", output))?;
            info!(activities = seed.len(), output = %output, "catalog exported");
        }
        None => println!("{}", json),
    }
    Ok(())
}
