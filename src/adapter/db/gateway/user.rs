use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::application::app_error::AppResult;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct UserGateway {
    collection: Collection<User>,
}

impl UserGateway {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }
}

#[async_trait]
impl UserReader for UserGateway {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn find_by_id(&self, id: &Id<User>) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "_id": id.to_hex() }).await?)
    }
}

#[async_trait]
impl UserWriter for UserGateway {
    async fn insert(&self, user: User) -> AppResult<User> {
        self.collection.insert_one(&user).await?;
        Ok(user)
    }

    async fn delete(&self, id: &Id<User>) -> AppResult<()> {
        self.collection.delete_one(doc! { "_id": id.to_hex() }).await?;
        Ok(())
    }
}
