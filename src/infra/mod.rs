use std::sync::Arc;

use crate::adapter::crypto::argon2::ArgonPasswordHasher;
use crate::adapter::crypto::jwt::JwtTokenCodec;
use crate::infra::config::AppConfig;
use crate::infra::db::init_db;
use crate::infra::state::AppState;

pub mod app;
pub mod config;
pub mod db;
pub mod setup;
pub mod state;

pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let db = init_db(config).await?;
    let hasher = ArgonPasswordHasher;
    let tokens = JwtTokenCodec::new(&config.auth.secret, config.auth.token_ttl);

    Ok(AppState {
        db,
        hasher: Arc::new(hasher),
        tokens: Arc::new(tokens),
        config: Arc::new(config.clone()),
    })
}
