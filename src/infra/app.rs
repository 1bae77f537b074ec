use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{self};
use axum::routing::{delete, get, post};
use axum::{middleware, Router};
use mongodb::bson::oid::ObjectId;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::adapter::http::middleware::auth::auth_middleware;
use crate::adapter::http::routes::posts::{
    add_comment, create_post, delete_post, get_post, like_post, list_posts, remove_comment,
    unlike_post,
};
use crate::adapter::http::routes::profile::{
    add_education, add_experience, delete_profile, get_my_profile, get_profile_by_handle,
    get_profile_by_user, list_profiles, remove_education, remove_experience, upsert_profile,
};
use crate::adapter::http::routes::users::{current_user, login, register};
use crate::infra::config::AppConfig;
use crate::infra::state::AppState;

fn build_cors(config: &AppConfig) -> CorsLayer {
    let has_wildcard = config.application.allow_origins.iter().any(|s| s == "*");

    if has_wildcard {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([http::Method::POST, http::Method::GET, http::Method::DELETE])
            .allow_headers([CONTENT_TYPE, AUTHORIZATION]);
    }
    let origins: Vec<http::HeaderValue> = config
        .application
        .allow_origins
        .iter()
        .filter_map(|s| {
            s.parse::<http::HeaderValue>()
                .map_err(|e| {
                    tracing::warn!("Failed to parse origin '{}': {}", s, e);
                })
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([http::Method::POST, http::Method::GET, http::Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

pub fn users_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/current", get(current_user))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}

pub fn profile_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/handle/{handle}", get(get_profile_by_handle))
        .route("/user/{user_id}", get(get_profile_by_user))
        .route("/all", get(list_profiles));

    let protected_routes = Router::new()
        .route(
            "/",
            get(get_my_profile).post(upsert_profile).delete(delete_profile),
        )
        .route("/experience", post(add_experience))
        .route("/education", post(add_education))
        .route("/experience/{exp_id}", delete(remove_experience))
        .route("/education/{edu_id}", delete(remove_education))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}

pub fn posts_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/", get(list_posts))
        .route("/{id}", get(get_post));

    let protected_routes = Router::new()
        .route("/", post(create_post))
        .route("/{id}", delete(delete_post))
        .route("/like/{id}", post(like_post))
        .route("/unlike/{id}", post(unlike_post))
        .route("/comment/{id}", post(add_comment))
        .route("/comment/{id}/{comment_id}", delete(remove_comment))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}

pub fn create_app(config: &AppConfig, state: AppState) -> Router {
    let cors = build_cors(config);
    Router::new()
        .nest("/users", users_router(state.clone()))
        .nest("/profile", profile_router(state.clone()))
        .nest("/posts", posts_router(state.clone()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &http::Request<_>| {
                    let request_id = ObjectId::new();
                    tracing::info_span!(
                        "http-request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request_id
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
