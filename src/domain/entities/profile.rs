use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;
use crate::domain::validation::{EducationDraft, ExperienceDraft, ProfileDraft};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: Id<Experience>,
    pub current: bool,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub description: Option<String>,
}

impl Experience {
    pub fn from_draft(draft: ExperienceDraft) -> Self {
        Self {
            id: Id::generate(),
            current: draft.current.unwrap_or(true),
            title: draft.title.unwrap_or_default(),
            company: draft.company.unwrap_or_default(),
            location: draft.location,
            from: draft.from.unwrap_or_default(),
            to: draft.to,
            description: draft.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "_id")]
    pub id: Id<Education>,
    pub current: bool,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    pub to: Option<String>,
    pub description: Option<String>,
}

impl Education {
    pub fn from_draft(draft: EducationDraft) -> Self {
        Self {
            id: Id::generate(),
            current: draft.current.unwrap_or(true),
            school: draft.school.unwrap_or_default(),
            degree: draft.degree.unwrap_or_default(),
            fieldofstudy: draft.fieldofstudy.unwrap_or_default(),
            from: draft.from.unwrap_or_default(),
            to: draft.to,
            description: draft.description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub wechat: Option<String>,
    #[serde(rename = "QQ")]
    pub qq: Option<String>,
    pub tengxunkt: Option<String>,
    pub wangyikt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: Id<Profile>,
    pub user: Id<User>,
    pub handle: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub social: Option<SocialLinks>,
    pub date: DateTime<Utc>,
}

impl Profile {
    /// Newest entry goes to the front.
    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
    }

    /// Removes the entry with the given id. Returns false when no entry
    /// matches; the list is left untouched in that case.
    pub fn remove_experience(&mut self, id: Id<Experience>) -> bool {
        match self.experience.iter().position(|e| e.id == id) {
            Some(index) => {
                self.experience.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn add_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
    }

    pub fn remove_education(&mut self, id: Id<Education>) -> bool {
        match self.education.iter().position(|e| e.id == id) {
            Some(index) => {
                self.education.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Sparse set of profile fields built from a partial-update payload. Fields
/// absent from the payload stay `None` and are never written to the store,
/// so omitting a field can not null it out.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub user: Id<User>,
    pub handle: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub skills: Option<Vec<String>>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: Option<SocialLinks>,
}

impl ProfileUpdate {
    pub fn from_draft(user: Id<User>, draft: &ProfileDraft) -> Self {
        let mut update = Self {
            user,
            handle: present(&draft.handle),
            company: present(&draft.company),
            website: present(&draft.website),
            location: present(&draft.location),
            status: present(&draft.status),
            skills: None,
            bio: present(&draft.bio),
            githubusername: present(&draft.githubusername),
            social: None,
        };

        // Comma-split as-is: surrounding whitespace is preserved, no dedup.
        if let Some(skills) = present(&draft.skills) {
            update.skills = Some(skills.split(',').map(str::to_owned).collect());
        }

        // The nested container has to exist before a sub-field lands in it.
        if let Some(wechat) = present(&draft.wechat) {
            update.social.get_or_insert_with(SocialLinks::default).wechat = Some(wechat);
        }
        if let Some(qq) = present(&draft.qq) {
            update.social.get_or_insert_with(SocialLinks::default).qq = Some(qq);
        }
        if let Some(tengxunkt) = present(&draft.tengxunkt) {
            update.social.get_or_insert_with(SocialLinks::default).tengxunkt = Some(tengxunkt);
        }
        if let Some(wangyikt) = present(&draft.wangyikt) {
            update.social.get_or_insert_with(SocialLinks::default).wangyikt = Some(wangyikt);
        }

        update
    }

    /// Builds a fresh profile from the full update mapping (create path).
    /// The caller has already run the profile validator, so the required
    /// fields are known to be present.
    pub fn into_profile(self) -> Profile {
        Profile {
            id: Id::generate(),
            user: self.user,
            handle: self.handle.unwrap_or_default(),
            company: self.company,
            website: self.website,
            location: self.location,
            status: self.status.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            bio: self.bio,
            githubusername: self.githubusername,
            experience: Vec::new(),
            education: Vec::new(),
            social: self.social,
            date: Utc::now(),
        }
    }
}

fn present(field: &Option<String>) -> Option<String> {
    field.as_deref().filter(|v| !v.is_empty()).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_id() -> Id<User> {
        Id::generate()
    }

    fn experience(title: &str) -> Experience {
        Experience::from_draft(ExperienceDraft {
            title: Some(title.to_string()),
            company: Some("Acme".to_string()),
            from: Some("2020-01-01".to_string()),
            ..ExperienceDraft::default()
        })
    }

    fn empty_profile(user: Id<User>) -> Profile {
        ProfileUpdate::from_draft(
            user,
            &ProfileDraft {
                handle: Some("john".to_string()),
                status: Some("dev".to_string()),
                skills: Some("rust".to_string()),
                ..ProfileDraft::default()
            },
        )
        .into_profile()
    }

    #[test]
    fn test_update_with_only_company_sets_nothing_else() {
        let draft = ProfileDraft {
            company: Some("Acme".to_string()),
            ..ProfileDraft::default()
        };
        let update = ProfileUpdate::from_draft(user_id(), &draft);
        assert_eq!(update.company.as_deref(), Some("Acme"));
        assert!(update.handle.is_none());
        assert!(update.website.is_none());
        assert!(update.location.is_none());
        assert!(update.status.is_none());
        assert!(update.skills.is_none());
        assert!(update.bio.is_none());
        assert!(update.githubusername.is_none());
        assert!(update.social.is_none());
    }

    #[test]
    fn test_update_treats_empty_string_as_absent() {
        let draft = ProfileDraft {
            company: Some(String::new()),
            ..ProfileDraft::default()
        };
        let update = ProfileUpdate::from_draft(user_id(), &draft);
        assert!(update.company.is_none());
    }

    #[test]
    fn test_skills_split_preserves_order_and_whitespace() {
        let draft = ProfileDraft {
            skills: Some("js,go,rust".to_string()),
            ..ProfileDraft::default()
        };
        let update = ProfileUpdate::from_draft(user_id(), &draft);
        assert_eq!(update.skills, Some(vec!["js".into(), "go".into(), "rust".into()]));

        let draft = ProfileDraft {
            skills: Some(" js , go".to_string()),
            ..ProfileDraft::default()
        };
        let update = ProfileUpdate::from_draft(user_id(), &draft);
        assert_eq!(update.skills, Some(vec![" js ".into(), " go".into()]));
    }

    #[test]
    fn test_social_container_created_on_first_sub_field() {
        let draft = ProfileDraft {
            wechat: Some("john-wc".to_string()),
            ..ProfileDraft::default()
        };
        let update = ProfileUpdate::from_draft(user_id(), &draft);
        let social = update.social.expect("social container should exist");
        assert_eq!(social.wechat.as_deref(), Some("john-wc"));
        assert!(social.qq.is_none());
        assert!(social.tengxunkt.is_none());
        assert!(social.wangyikt.is_none());
    }

    #[test]
    fn test_into_profile_uses_full_mapping() {
        let user = user_id();
        let draft = ProfileDraft {
            handle: Some("john".to_string()),
            status: Some("dev".to_string()),
            skills: Some("js,go".to_string()),
            qq: Some("12345".to_string()),
            ..ProfileDraft::default()
        };
        let profile = ProfileUpdate::from_draft(user, &draft).into_profile();
        assert_eq!(profile.user, user);
        assert_eq!(profile.handle, "john");
        assert_eq!(profile.status, "dev");
        assert_eq!(profile.skills, vec!["js".to_string(), "go".to_string()]);
        assert_eq!(profile.social.unwrap().qq.as_deref(), Some("12345"));
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_add_experience_prepends() {
        let mut profile = empty_profile(user_id());
        profile.add_experience(experience("first"));
        profile.add_experience(experience("second"));
        assert_eq!(profile.experience[0].title, "second");
        assert_eq!(profile.experience[1].title, "first");
    }

    #[test]
    fn test_remove_experience_removes_exactly_one() {
        let mut profile = empty_profile(user_id());
        profile.add_experience(experience("first"));
        profile.add_experience(experience("second"));
        profile.add_experience(experience("third"));
        let target = profile.experience[1].id;

        assert!(profile.remove_experience(target));
        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].title, "third");
        assert_eq!(profile.experience[1].title, "first");
    }

    #[test]
    fn test_remove_experience_unknown_id_leaves_list_unchanged() {
        let mut profile = empty_profile(user_id());
        profile.add_experience(experience("only"));

        assert!(!profile.remove_experience(Id::generate()));
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "only");
    }

    #[test]
    fn test_education_list_round_trip() {
        let mut profile = empty_profile(user_id());
        let entry = Education::from_draft(EducationDraft {
            school: Some("MIT".to_string()),
            degree: Some("BSc".to_string()),
            fieldofstudy: Some("CS".to_string()),
            from: Some("2018-09-01".to_string()),
            ..EducationDraft::default()
        });
        let id = entry.id;
        profile.add_education(entry);
        assert!(profile.education[0].current, "current defaults to true");
        assert!(profile.remove_education(id));
        assert!(profile.education.is_empty());
    }
}
