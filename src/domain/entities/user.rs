use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::entities::id::Id;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Id<User>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl User {
    /// `password` is expected to already be hashed by the caller.
    pub fn new(name: String, email: String, password: String) -> Self {
        let avatar = avatar_url(&email);
        Self {
            id: Id::generate(),
            name,
            email,
            password,
            avatar,
            date: Utc::now(),
        }
    }
}

/// Gravatar-style avatar URL derived from the normalized email address.
pub fn avatar_url(email: &str) -> String {
    let hash = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!("https://www.gravatar.com/avatar/{:x}?s=200&r=pg&d=mm", hash)
}
