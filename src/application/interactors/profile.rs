use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{
    AddEducationDTO, AddExperienceDTO, RemoveEducationDTO, RemoveExperienceDTO, UpsertProfileDTO,
};
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::application::interface::gateway::user::UserWriter;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Education, Experience, Profile, ProfileUpdate};
use crate::domain::entities::user::User;
use crate::domain::validation::{
    validate_education_input, validate_experience_input, validate_profile_input,
};

const NO_PROFILE: AppError = AppError::NotFound {
    key: "noprofile",
    message: "There is no profile for this user",
};

#[derive(Clone)]
pub struct GetMyProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetMyProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.id.try_into()?;
        self.profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(NO_PROFILE)
    }
}

#[derive(Clone)]
pub struct UpsertProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl UpsertProfileInteractor {
    pub fn new(
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: UpsertProfileDTO) -> AppResult<Profile> {
        let outcome = validate_profile_input(&dto.draft);
        if !outcome.is_valid {
            return Err(AppError::Validation(outcome.errors));
        }
        let user_id: Id<User> = dto.user.try_into()?;
        let update = ProfileUpdate::from_draft(user_id, &dto.draft);

        if self.profile_reader.find_by_user(&user_id).await?.is_some() {
            let updated = self
                .profile_writer
                .apply_update(update)
                .await?
                .ok_or(NO_PROFILE)?;
            info!("Updated profile for user {}", user_id);
            return Ok(updated);
        }

        // Handle uniqueness is checked before creating a new profile.
        if let Some(handle) = &update.handle {
            if self.profile_reader.find_by_handle(handle).await?.is_some() {
                return Err(AppError::Conflict {
                    key: "handle",
                    message: "That handle is already taken",
                });
            }
        }
        let created = self.profile_writer.insert(update.into_profile()).await?;
        info!("Created profile {} for user {}", created.handle, user_id);
        Ok(created)
    }
}

#[derive(Clone)]
pub struct GetProfileByHandleInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileByHandleInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, handle: &str) -> AppResult<Profile> {
        self.profile_reader
            .find_by_handle(handle)
            .await?
            .ok_or(NO_PROFILE)
    }
}

#[derive(Clone)]
pub struct GetProfileByUserInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileByUserInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.id.try_into()?;
        self.profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(NO_PROFILE)
    }
}

#[derive(Clone)]
pub struct ListProfilesInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl ListProfilesInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<Profile>> {
        self.profile_reader.list().await
    }
}

#[derive(Clone)]
pub struct AddExperienceInteractor {
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl AddExperienceInteractor {
    pub fn new(
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: AddExperienceDTO) -> AppResult<Profile> {
        let outcome = validate_experience_input(&dto.draft);
        if !outcome.is_valid {
            return Err(AppError::Validation(outcome.errors));
        }
        let user_id: Id<User> = dto.user.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(NO_PROFILE)?;
        profile.add_experience(Experience::from_draft(dto.draft));
        self.profile_writer.replace(profile).await
    }
}

#[derive(Clone)]
pub struct AddEducationInteractor {
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl AddEducationInteractor {
    pub fn new(
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: AddEducationDTO) -> AppResult<Profile> {
        let outcome = validate_education_input(&dto.draft);
        if !outcome.is_valid {
            return Err(AppError::Validation(outcome.errors));
        }
        let user_id: Id<User> = dto.user.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(NO_PROFILE)?;
        profile.add_education(Education::from_draft(dto.draft));
        self.profile_writer.replace(profile).await
    }
}

#[derive(Clone)]
pub struct RemoveExperienceInteractor {
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl RemoveExperienceInteractor {
    pub fn new(
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveExperienceDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.user.try_into()?;
        let experience_id: Id<Experience> = dto.experience_id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(NO_PROFILE)?;
        if !profile.remove_experience(experience_id) {
            return Err(AppError::NotFound {
                key: "experience",
                message: "There is no experience entry with that id",
            });
        }
        self.profile_writer.replace(profile).await
    }
}

#[derive(Clone)]
pub struct RemoveEducationInteractor {
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl RemoveEducationInteractor {
    pub fn new(
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveEducationDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.user.try_into()?;
        let education_id: Id<Education> = dto.education_id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(NO_PROFILE)?;
        if !profile.remove_education(education_id) {
            return Err(AppError::NotFound {
                key: "education",
                message: "There is no education entry with that id",
            });
        }
        self.profile_writer.replace(profile).await
    }
}

#[derive(Clone)]
pub struct DeleteProfileInteractor {
    profile_writer: Arc<dyn ProfileWriter>,
    user_writer: Arc<dyn UserWriter>,
}

impl DeleteProfileInteractor {
    pub fn new(profile_writer: Arc<dyn ProfileWriter>, user_writer: Arc<dyn UserWriter>) -> Self {
        Self {
            profile_writer,
            user_writer,
        }
    }

    /// Removes the profile and the owning user account.
    pub async fn execute(&self, dto: IdDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.id.try_into()?;
        self.profile_writer.delete_by_user(&user_id).await?;
        self.user_writer.delete(&user_id).await?;
        info!("Deleted profile and account for user {}", user_id);
        Ok(())
    }
}
