use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::token::{TokenClaims, TokenCodec};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,
    name: String,
    exp: i64,
}

/// HS256 bearer tokens. The TTL is fixed at construction from config.
pub struct JwtTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: i64,
}

impl JwtTokenCodec {
    pub fn new(secret: &str, ttl: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }
}

impl TokenCodec for JwtTokenCodec {
    fn sign(&self, claims: TokenClaims) -> AppResult<String> {
        let claims = Claims {
            id: claims.id,
            name: claims.name,
            exp: Utc::now().timestamp() + self.ttl,
        };
        encode(&Header::default(), &claims, &self.encoding_key).map_err(|_| AppError::TokenSign)
    }

    fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| AppError::InvalidCredentials)?;
        Ok(TokenClaims {
            id: data.claims.id,
            name: data.claims.name,
        })
    }
}
