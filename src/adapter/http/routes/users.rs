use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::user::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::{LoginDTO, RegisterUserDTO};
use crate::application::interactors::users::{
    GetCurrentUserInteractor, LoginInteractor, RegisterUserInteractor,
};

pub async fn register(
    interactor: RegisterUserInteractor,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = RegisterUserDTO {
        name: payload.name,
        email: payload.email,
        password: payload.password,
    };
    let user = interactor.execute(dto).await?;
    let response = UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        avatar: user.avatar,
    };
    Ok((StatusCode::OK, Json(response)))
}

pub async fn login(
    interactor: LoginInteractor,
    Json(payload): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = LoginDTO {
        email: payload.email,
        password: payload.password,
    };
    let token = interactor.execute(dto).await?;
    let response = LoginResponse {
        success: true,
        token: format!("Bearer {}", token),
    };
    Ok((StatusCode::OK, Json(response)))
}

pub async fn current_user(
    auth_user: AuthUser,
    interactor: GetCurrentUserInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = IdDTO {
        id: auth_user.user_id,
    };
    let user = interactor.execute(dto).await?;
    let response = UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        avatar: user.avatar,
    };
    Ok((StatusCode::OK, Json(response)))
}
