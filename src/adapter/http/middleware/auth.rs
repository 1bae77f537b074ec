use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::adapter::http::middleware::extractor::AuthUser;
use crate::application::app_error::{AppError, AppResult};
use crate::infra::state::AppState;

/// Rejects the request unless it carries a valid `Authorization: Bearer`
/// token; on success the resolved identity is attached to the request.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let token = extract_bearer_token(&request)?;
    let claims = state.tokens.verify(token)?;
    request.extensions_mut().insert(AuthUser { user_id: claims.id });
    Ok(next.run(request).await)
}

fn extract_bearer_token(request: &Request) -> AppResult<&str> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::InvalidCredentials)?;
    header
        .strip_prefix("Bearer ")
        .ok_or(AppError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    use super::*;

    fn request(header: Option<&str>) -> Request {
        let mut builder = HttpRequest::builder().uri("/profile");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_token_is_extracted() {
        let request = request(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer_token(&request).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header_is_rejected() {
        let request = request(None);
        assert!(matches!(
            extract_bearer_token(&request),
            Err(AppError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_non_bearer_scheme_is_rejected() {
        let request = request(Some("Basic dXNlcjpwYXNz"));
        assert!(matches!(
            extract_bearer_token(&request),
            Err(AppError::InvalidCredentials)
        ));
    }
}
