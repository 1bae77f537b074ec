use serde::Deserialize;

use crate::domain::validation::{EducationDraft, ExperienceDraft, ProfileDraft};

/// Create-or-update payload. Every field is optional so presence can drive
/// the partial-merge semantics downstream.
#[derive(Debug, Deserialize)]
pub struct ProfileBody {
    pub handle: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub skills: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub wechat: Option<String>,
    #[serde(rename = "QQ")]
    pub qq: Option<String>,
    pub tengxunkt: Option<String>,
    pub wangyikt: Option<String>,
}

impl ProfileBody {
    pub fn into_draft(self) -> ProfileDraft {
        ProfileDraft {
            handle: self.handle,
            company: self.company,
            website: self.website,
            location: self.location,
            status: self.status,
            skills: self.skills,
            bio: self.bio,
            githubusername: self.githubusername,
            wechat: self.wechat,
            qq: self.qq,
            tengxunkt: self.tengxunkt,
            wangyikt: self.wangyikt,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExperienceBody {
    pub current: Option<bool>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub description: Option<String>,
}

impl ExperienceBody {
    pub fn into_draft(self) -> ExperienceDraft {
        ExperienceDraft {
            current: self.current,
            title: self.title,
            company: self.company,
            location: self.location,
            from: self.from,
            to: self.to,
            description: self.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EducationBody {
    pub current: Option<bool>,
    pub school: Option<String>,
    pub degree: Option<String>,
    pub fieldofstudy: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub description: Option<String>,
}

impl EducationBody {
    pub fn into_draft(self) -> EducationDraft {
        EducationDraft {
            current: self.current,
            school: self.school,
            degree: self.degree,
            fieldofstudy: self.fieldofstudy,
            from: self.from,
            to: self.to,
            description: self.description,
        }
    }
}
