use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::post::Post;

#[async_trait]
pub trait PostReader: Send + Sync {
    /// All posts, most recent first.
    async fn list(&self) -> AppResult<Vec<Post>>;
    async fn find_by_id(&self, id: &Id<Post>) -> AppResult<Option<Post>>;
}

#[async_trait]
pub trait PostWriter: Send + Sync {
    async fn insert(&self, post: Post) -> AppResult<Post>;
    /// Full replace after an embedded-list mutation.
    async fn replace(&self, post: Post) -> AppResult<Post>;
    async fn delete(&self, id: &Id<Post>) -> AppResult<()>;
}
