use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use mongodb::Database;

use crate::adapter::db::gateway::post::PostGateway;
use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::posts::{
    AddCommentInteractor, CreatePostInteractor, DeletePostInteractor, GetPostInteractor,
    LikePostInteractor, ListPostsInteractor, RemoveCommentInteractor, UnlikePostInteractor,
};
use crate::application::interactors::profile::{
    AddEducationInteractor, AddExperienceInteractor, DeleteProfileInteractor,
    GetMyProfileInteractor, GetProfileByHandleInteractor, GetProfileByUserInteractor,
    ListProfilesInteractor, RemoveEducationInteractor, RemoveExperienceInteractor,
    UpsertProfileInteractor,
};
use crate::application::interactors::users::{
    GetCurrentUserInteractor, LoginInteractor, RegisterUserInteractor,
};
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::token::TokenCodec;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub hasher: Arc<dyn CredentialsHasher>,
    pub tokens: Arc<dyn TokenCodec>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

// RegisterUserInteractor
#[async_trait]
impl FromAppState for RegisterUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let user_gateway = UserGateway::new(&state.db);

        Ok(RegisterUserInteractor::new(
            Arc::new(user_gateway.clone()),
            Arc::new(user_gateway),
            state.hasher.clone(),
        ))
    }
}

impl<S> FromRequestParts<S> for RegisterUserInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        RegisterUserInteractor::from_app_state(&app_state).await
    }
}

// LoginInteractor
#[async_trait]
impl FromAppState for LoginInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let user_gateway = UserGateway::new(&state.db);

        Ok(LoginInteractor::new(
            Arc::new(user_gateway),
            state.hasher.clone(),
            state.tokens.clone(),
        ))
    }
}

impl<S> FromRequestParts<S> for LoginInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        LoginInteractor::from_app_state(&app_state).await
    }
}

// GetCurrentUserInteractor
#[async_trait]
impl FromAppState for GetCurrentUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let user_gateway = UserGateway::new(&state.db);
        Ok(GetCurrentUserInteractor::new(Arc::new(user_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetCurrentUserInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetCurrentUserInteractor::from_app_state(&app_state).await
    }
}

// GetMyProfileInteractor
#[async_trait]
impl FromAppState for GetMyProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let profile_gateway = ProfileGateway::new(&state.db);
        Ok(GetMyProfileInteractor::new(Arc::new(profile_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetMyProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetMyProfileInteractor::from_app_state(&app_state).await
    }
}

// UpsertProfileInteractor
#[async_trait]
impl FromAppState for UpsertProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let profile_gateway = ProfileGateway::new(&state.db);

        Ok(UpsertProfileInteractor::new(
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for UpsertProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        UpsertProfileInteractor::from_app_state(&app_state).await
    }
}

// GetProfileByHandleInteractor
#[async_trait]
impl FromAppState for GetProfileByHandleInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let profile_gateway = ProfileGateway::new(&state.db);
        Ok(GetProfileByHandleInteractor::new(Arc::new(profile_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetProfileByHandleInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetProfileByHandleInteractor::from_app_state(&app_state).await
    }
}

// GetProfileByUserInteractor
#[async_trait]
impl FromAppState for GetProfileByUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let profile_gateway = ProfileGateway::new(&state.db);
        Ok(GetProfileByUserInteractor::new(Arc::new(profile_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetProfileByUserInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetProfileByUserInteractor::from_app_state(&app_state).await
    }
}

// ListProfilesInteractor
#[async_trait]
impl FromAppState for ListProfilesInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let profile_gateway = ProfileGateway::new(&state.db);
        Ok(ListProfilesInteractor::new(Arc::new(profile_gateway)))
    }
}

impl<S> FromRequestParts<S> for ListProfilesInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        ListProfilesInteractor::from_app_state(&app_state).await
    }
}

// AddExperienceInteractor
#[async_trait]
impl FromAppState for AddExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let profile_gateway = ProfileGateway::new(&state.db);

        Ok(AddExperienceInteractor::new(
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for AddExperienceInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        AddExperienceInteractor::from_app_state(&app_state).await
    }
}

// AddEducationInteractor
#[async_trait]
impl FromAppState for AddEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let profile_gateway = ProfileGateway::new(&state.db);

        Ok(AddEducationInteractor::new(
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for AddEducationInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        AddEducationInteractor::from_app_state(&app_state).await
    }
}

// RemoveExperienceInteractor
#[async_trait]
impl FromAppState for RemoveExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let profile_gateway = ProfileGateway::new(&state.db);

        Ok(RemoveExperienceInteractor::new(
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for RemoveExperienceInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        RemoveExperienceInteractor::from_app_state(&app_state).await
    }
}

// RemoveEducationInteractor
#[async_trait]
impl FromAppState for RemoveEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let profile_gateway = ProfileGateway::new(&state.db);

        Ok(RemoveEducationInteractor::new(
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for RemoveEducationInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        RemoveEducationInteractor::from_app_state(&app_state).await
    }
}

// DeleteProfileInteractor
#[async_trait]
impl FromAppState for DeleteProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let profile_gateway = ProfileGateway::new(&state.db);
        let user_gateway = UserGateway::new(&state.db);

        Ok(DeleteProfileInteractor::new(
            Arc::new(profile_gateway),
            Arc::new(user_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for DeleteProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        DeleteProfileInteractor::from_app_state(&app_state).await
    }
}

// CreatePostInteractor
#[async_trait]
impl FromAppState for CreatePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let post_gateway = PostGateway::new(&state.db);
        Ok(CreatePostInteractor::new(Arc::new(post_gateway)))
    }
}

impl<S> FromRequestParts<S> for CreatePostInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        CreatePostInteractor::from_app_state(&app_state).await
    }
}

// ListPostsInteractor
#[async_trait]
impl FromAppState for ListPostsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let post_gateway = PostGateway::new(&state.db);
        Ok(ListPostsInteractor::new(Arc::new(post_gateway)))
    }
}

impl<S> FromRequestParts<S> for ListPostsInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        ListPostsInteractor::from_app_state(&app_state).await
    }
}

// GetPostInteractor
#[async_trait]
impl FromAppState for GetPostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let post_gateway = PostGateway::new(&state.db);
        Ok(GetPostInteractor::new(Arc::new(post_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetPostInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetPostInteractor::from_app_state(&app_state).await
    }
}

// DeletePostInteractor
#[async_trait]
impl FromAppState for DeletePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let post_gateway = PostGateway::new(&state.db);

        Ok(DeletePostInteractor::new(
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for DeletePostInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        DeletePostInteractor::from_app_state(&app_state).await
    }
}

// LikePostInteractor
#[async_trait]
impl FromAppState for LikePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let post_gateway = PostGateway::new(&state.db);

        Ok(LikePostInteractor::new(
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for LikePostInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        LikePostInteractor::from_app_state(&app_state).await
    }
}

// UnlikePostInteractor
#[async_trait]
impl FromAppState for UnlikePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let post_gateway = PostGateway::new(&state.db);

        Ok(UnlikePostInteractor::new(
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for UnlikePostInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        UnlikePostInteractor::from_app_state(&app_state).await
    }
}

// AddCommentInteractor
#[async_trait]
impl FromAppState for AddCommentInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let post_gateway = PostGateway::new(&state.db);

        Ok(AddCommentInteractor::new(
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for AddCommentInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        AddCommentInteractor::from_app_state(&app_state).await
    }
}

// RemoveCommentInteractor
#[async_trait]
impl FromAppState for RemoveCommentInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let post_gateway = PostGateway::new(&state.db);

        Ok(RemoveCommentInteractor::new(
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for RemoveCommentInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        RemoveCommentInteractor::from_app_state(&app_state).await
    }
}
