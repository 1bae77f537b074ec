use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::post::PostBody;
use crate::adapter::http::schema::SuccessResponse;
use crate::application::app_error::AppResult;
use crate::application::dto::post::{
    AddCommentDTO, CreatePostDTO, DeletePostDTO, LikePostDTO, RemoveCommentDTO,
};
use crate::application::interactors::posts::{
    AddCommentInteractor, CreatePostInteractor, DeletePostInteractor, GetPostInteractor,
    LikePostInteractor, ListPostsInteractor, RemoveCommentInteractor, UnlikePostInteractor,
};

pub async fn create_post(
    auth_user: AuthUser,
    interactor: CreatePostInteractor,
    Json(payload): Json<PostBody>,
) -> AppResult<impl IntoResponse> {
    let (draft, name, avatar) = payload.into_draft();
    let dto = CreatePostDTO {
        user: auth_user.user_id,
        draft,
        name,
        avatar,
    };
    let post = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(post)))
}

pub async fn list_posts(interactor: ListPostsInteractor) -> AppResult<impl IntoResponse> {
    let posts = interactor.execute().await?;
    Ok((StatusCode::OK, Json(posts)))
}

pub async fn get_post(
    Path(id): Path<String>,
    interactor: GetPostInteractor,
) -> AppResult<impl IntoResponse> {
    let post = interactor.execute(id).await?;
    Ok((StatusCode::OK, Json(post)))
}

pub async fn delete_post(
    auth_user: AuthUser,
    Path(id): Path<String>,
    interactor: DeletePostInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = DeletePostDTO {
        user: auth_user.user_id,
        post: id,
    };
    interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(SuccessResponse::ok())))
}

pub async fn like_post(
    auth_user: AuthUser,
    Path(id): Path<String>,
    interactor: LikePostInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = LikePostDTO {
        user: auth_user.user_id,
        post: id,
    };
    let post = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(post)))
}

pub async fn unlike_post(
    auth_user: AuthUser,
    Path(id): Path<String>,
    interactor: UnlikePostInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = LikePostDTO {
        user: auth_user.user_id,
        post: id,
    };
    let post = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(post)))
}

pub async fn add_comment(
    auth_user: AuthUser,
    Path(id): Path<String>,
    interactor: AddCommentInteractor,
    Json(payload): Json<PostBody>,
) -> AppResult<impl IntoResponse> {
    let (draft, name, avatar) = payload.into_draft();
    let dto = AddCommentDTO {
        user: auth_user.user_id,
        post: id,
        draft,
        name,
        avatar,
    };
    let post = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(post)))
}

pub async fn remove_comment(
    _auth_user: AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
    interactor: RemoveCommentInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveCommentDTO {
        post: id,
        comment: comment_id,
    };
    let post = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(post)))
}
