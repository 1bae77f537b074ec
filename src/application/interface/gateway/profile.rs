use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Profile, ProfileUpdate};
use crate::domain::entities::user::User;

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_user(&self, user: &Id<User>) -> AppResult<Option<Profile>>;
    async fn find_by_handle(&self, handle: &str) -> AppResult<Option<Profile>>;
    async fn list(&self) -> AppResult<Vec<Profile>>;
}

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    async fn insert(&self, profile: Profile) -> AppResult<Profile>;
    /// Partial merge of the present fields onto the user's existing profile.
    /// Returns the updated record, or `None` when the user has no profile.
    async fn apply_update(&self, update: ProfileUpdate) -> AppResult<Option<Profile>>;
    /// Full replace after an embedded-list mutation.
    async fn replace(&self, profile: Profile) -> AppResult<Profile>;
    async fn delete_by_user(&self, user: &Id<User>) -> AppResult<()>;
}
