use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::application::app_error::AppResult;
use crate::application::interface::gateway::post::{PostReader, PostWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::post::Post;

#[derive(Clone)]
pub struct PostGateway {
    collection: Collection<Post>,
}

impl PostGateway {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("posts"),
        }
    }
}

#[async_trait]
impl PostReader for PostGateway {
    async fn list(&self) -> AppResult<Vec<Post>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "date": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &Id<Post>) -> AppResult<Option<Post>> {
        Ok(self.collection.find_one(doc! { "_id": id.to_hex() }).await?)
    }
}

#[async_trait]
impl PostWriter for PostGateway {
    async fn insert(&self, post: Post) -> AppResult<Post> {
        self.collection.insert_one(&post).await?;
        Ok(post)
    }

    async fn replace(&self, post: Post) -> AppResult<Post> {
        self.collection
            .replace_one(doc! { "_id": post.id.to_hex() }, &post)
            .await?;
        Ok(post)
    }

    async fn delete(&self, id: &Id<Post>) -> AppResult<()> {
        self.collection.delete_one(doc! { "_id": id.to_hex() }).await?;
        Ok(())
    }
}
