use crate::domain::validation::{EducationDraft, ExperienceDraft, ProfileDraft};

#[derive(Debug)]
pub struct UpsertProfileDTO {
    pub user: String,
    pub draft: ProfileDraft,
}

#[derive(Debug)]
pub struct AddExperienceDTO {
    pub user: String,
    pub draft: ExperienceDraft,
}

#[derive(Debug)]
pub struct AddEducationDTO {
    pub user: String,
    pub draft: EducationDraft,
}

#[derive(Debug)]
pub struct RemoveExperienceDTO {
    pub user: String,
    pub experience_id: String,
}

#[derive(Debug)]
pub struct RemoveEducationDTO {
    pub user: String,
    pub education_id: String,
}
