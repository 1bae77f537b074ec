use mongodb::bson::doc;
use mongodb::{Client, Database};
use tracing::info;

use crate::infra::config::AppConfig;

pub async fn init_db(config: &AppConfig) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(&config.db.url).await?;
    let db = client.database(&config.db.database);
    // The driver connects lazily; ping so startup fails fast on a bad URL.
    db.run_command(doc! { "ping": 1 }).await?;
    info!("Connected to database!");
    Ok(db)
}
