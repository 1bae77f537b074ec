use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Profile, ProfileUpdate};
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct ProfileGateway {
    collection: Collection<Profile>,
}

impl ProfileGateway {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("profiles"),
        }
    }
}

/// Flattens a sparse update into a `$set` document. Only present fields are
/// written, so absent fields on the stored record survive the merge.
fn set_fields(update: &ProfileUpdate) -> Document {
    let mut fields = doc! { "user": update.user.to_hex() };
    if let Some(handle) = &update.handle {
        fields.insert("handle", handle.clone());
    }
    if let Some(company) = &update.company {
        fields.insert("company", company.clone());
    }
    if let Some(website) = &update.website {
        fields.insert("website", website.clone());
    }
    if let Some(location) = &update.location {
        fields.insert("location", location.clone());
    }
    if let Some(status) = &update.status {
        fields.insert("status", status.clone());
    }
    if let Some(skills) = &update.skills {
        fields.insert("skills", skills.clone());
    }
    if let Some(bio) = &update.bio {
        fields.insert("bio", bio.clone());
    }
    if let Some(githubusername) = &update.githubusername {
        fields.insert("githubusername", githubusername.clone());
    }
    if let Some(social) = &update.social {
        let mut social_doc = Document::new();
        if let Some(wechat) = &social.wechat {
            social_doc.insert("wechat", wechat.clone());
        }
        if let Some(qq) = &social.qq {
            social_doc.insert("QQ", qq.clone());
        }
        if let Some(tengxunkt) = &social.tengxunkt {
            social_doc.insert("tengxunkt", tengxunkt.clone());
        }
        if let Some(wangyikt) = &social.wangyikt {
            social_doc.insert("wangyikt", wangyikt.clone());
        }
        fields.insert("social", social_doc);
    }
    fields
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn find_by_user(&self, user: &Id<User>) -> AppResult<Option<Profile>> {
        Ok(self.collection.find_one(doc! { "user": user.to_hex() }).await?)
    }

    async fn find_by_handle(&self, handle: &str) -> AppResult<Option<Profile>> {
        Ok(self.collection.find_one(doc! { "handle": handle }).await?)
    }

    async fn list(&self) -> AppResult<Vec<Profile>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn insert(&self, profile: Profile) -> AppResult<Profile> {
        self.collection.insert_one(&profile).await?;
        Ok(profile)
    }

    async fn apply_update(&self, update: ProfileUpdate) -> AppResult<Option<Profile>> {
        let updated = self
            .collection
            .find_one_and_update(
                doc! { "user": update.user.to_hex() },
                doc! { "$set": set_fields(&update) },
            )
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }

    async fn replace(&self, profile: Profile) -> AppResult<Profile> {
        self.collection
            .replace_one(doc! { "_id": profile.id.to_hex() }, &profile)
            .await?;
        Ok(profile)
    }

    async fn delete_by_user(&self, user: &Id<User>) -> AppResult<()> {
        self.collection
            .find_one_and_delete(doc! { "user": user.to_hex() })
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ProfileDraft;

    #[test]
    fn test_set_fields_contains_exactly_user_and_company() {
        let update = ProfileUpdate::from_draft(
            Id::generate(),
            &ProfileDraft {
                company: Some("Acme".to_string()),
                ..ProfileDraft::default()
            },
        );
        let fields = set_fields(&update);
        let mut keys: Vec<&str> = fields.iter().map(|(key, _)| key.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["company", "user"]);
    }

    #[test]
    fn test_set_fields_nests_social_sub_document() {
        let update = ProfileUpdate::from_draft(
            Id::generate(),
            &ProfileDraft {
                wechat: Some("john-wc".to_string()),
                tengxunkt: Some("https://ke.qq.com/john".to_string()),
                ..ProfileDraft::default()
            },
        );
        let fields = set_fields(&update);
        let social = fields.get_document("social").expect("social sub-document");
        assert_eq!(social.get_str("wechat").unwrap(), "john-wc");
        assert_eq!(social.get_str("tengxunkt").unwrap(), "https://ke.qq.com/john");
        assert!(social.get_str("QQ").is_err());
    }

    #[test]
    fn test_set_fields_serializes_skills_as_array() {
        let update = ProfileUpdate::from_draft(
            Id::generate(),
            &ProfileDraft {
                skills: Some("js,go".to_string()),
                ..ProfileDraft::default()
            },
        );
        let fields = set_fields(&update);
        let skills = fields.get_array("skills").expect("skills array");
        assert_eq!(skills.len(), 2);
    }
}
