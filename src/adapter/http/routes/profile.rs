use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::profile::{EducationBody, ExperienceBody, ProfileBody};
use crate::adapter::http::schema::SuccessResponse;
use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{
    AddEducationDTO, AddExperienceDTO, RemoveEducationDTO, RemoveExperienceDTO, UpsertProfileDTO,
};
use crate::application::interactors::profile::{
    AddEducationInteractor, AddExperienceInteractor, DeleteProfileInteractor,
    GetMyProfileInteractor, GetProfileByHandleInteractor, GetProfileByUserInteractor,
    ListProfilesInteractor, RemoveEducationInteractor, RemoveExperienceInteractor,
    UpsertProfileInteractor,
};

pub async fn get_my_profile(
    auth_user: AuthUser,
    interactor: GetMyProfileInteractor,
) -> AppResult<impl IntoResponse> {
    let profile = interactor
        .execute(IdDTO {
            id: auth_user.user_id,
        })
        .await?;
    Ok((StatusCode::OK, Json(profile)))
}

pub async fn upsert_profile(
    auth_user: AuthUser,
    interactor: UpsertProfileInteractor,
    Json(payload): Json<ProfileBody>,
) -> AppResult<impl IntoResponse> {
    let dto = UpsertProfileDTO {
        user: auth_user.user_id,
        draft: payload.into_draft(),
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(profile)))
}

pub async fn get_profile_by_handle(
    Path(handle): Path<String>,
    interactor: GetProfileByHandleInteractor,
) -> AppResult<impl IntoResponse> {
    let profile = interactor.execute(&handle).await?;
    Ok((StatusCode::OK, Json(profile)))
}

pub async fn get_profile_by_user(
    Path(user_id): Path<String>,
    interactor: GetProfileByUserInteractor,
) -> AppResult<impl IntoResponse> {
    let profile = interactor.execute(IdDTO { id: user_id }).await?;
    Ok((StatusCode::OK, Json(profile)))
}

pub async fn list_profiles(interactor: ListProfilesInteractor) -> AppResult<impl IntoResponse> {
    let profiles = interactor.execute().await?;
    Ok((StatusCode::OK, Json(profiles)))
}

pub async fn add_experience(
    auth_user: AuthUser,
    interactor: AddExperienceInteractor,
    Json(payload): Json<ExperienceBody>,
) -> AppResult<impl IntoResponse> {
    let dto = AddExperienceDTO {
        user: auth_user.user_id,
        draft: payload.into_draft(),
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(profile)))
}

pub async fn add_education(
    auth_user: AuthUser,
    interactor: AddEducationInteractor,
    Json(payload): Json<EducationBody>,
) -> AppResult<impl IntoResponse> {
    let dto = AddEducationDTO {
        user: auth_user.user_id,
        draft: payload.into_draft(),
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(profile)))
}

pub async fn remove_experience(
    auth_user: AuthUser,
    Path(exp_id): Path<String>,
    interactor: RemoveExperienceInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveExperienceDTO {
        user: auth_user.user_id,
        experience_id: exp_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(profile)))
}

pub async fn remove_education(
    auth_user: AuthUser,
    Path(edu_id): Path<String>,
    interactor: RemoveEducationInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveEducationDTO {
        user: auth_user.user_id,
        education_id: edu_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(profile)))
}

pub async fn delete_profile(
    auth_user: AuthUser,
    interactor: DeleteProfileInteractor,
) -> AppResult<impl IntoResponse> {
    interactor
        .execute(IdDTO {
            id: auth_user.user_id,
        })
        .await?;
    Ok((StatusCode::OK, Json(SuccessResponse::ok())))
}
