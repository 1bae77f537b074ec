use crate::application::app_error::AppResult;

/// Claims carried by a bearer token. Expiry is handled by the codec.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    pub id: String,
    pub name: String,
}

pub trait TokenCodec: Send + Sync {
    fn sign(&self, claims: TokenClaims) -> AppResult<String>;
    fn verify(&self, token: &str) -> AppResult<TokenClaims>;
}
