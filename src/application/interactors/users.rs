use std::sync::Arc;

use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::{LoginDTO, RegisterUserDTO, UserDTO};
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::application::interface::token::{TokenClaims, TokenCodec};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct RegisterUserInteractor {
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    hasher: Arc<dyn CredentialsHasher>,
}

impl RegisterUserInteractor {
    pub fn new(
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        hasher: Arc<dyn CredentialsHasher>,
    ) -> Self {
        Self {
            user_reader,
            user_writer,
            hasher,
        }
    }

    pub async fn execute(&self, dto: RegisterUserDTO) -> AppResult<UserDTO> {
        if self.user_reader.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::Conflict {
                key: "email",
                message: "Email is already registered",
            });
        }
        let hashed = self.hasher.hash_password(&dto.password).await?;
        let user = self
            .user_writer
            .insert(User::new(dto.name, dto.email, hashed))
            .await?;
        info!("Registered user {}", user.name);
        Ok(UserDTO {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
        })
    }
}

#[derive(Clone)]
pub struct LoginInteractor {
    user_reader: Arc<dyn UserReader>,
    hasher: Arc<dyn CredentialsHasher>,
    tokens: Arc<dyn TokenCodec>,
}

impl LoginInteractor {
    pub fn new(
        user_reader: Arc<dyn UserReader>,
        hasher: Arc<dyn CredentialsHasher>,
        tokens: Arc<dyn TokenCodec>,
    ) -> Self {
        Self {
            user_reader,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, dto: LoginDTO) -> AppResult<String> {
        let user = self.user_reader.find_by_email(&dto.email).await?.ok_or_else(|| {
            warn!("Login attempt with non-existent email: {}", dto.email);
            AppError::InvalidCredentials
        })?;
        let is_valid = self.hasher.verify_password(&dto.password, &user.password).await?;
        if !is_valid {
            warn!("Invalid password for user: {}", user.name);
            return Err(AppError::InvalidCredentials);
        }
        let token = self.tokens.sign(TokenClaims {
            id: user.id.to_hex(),
            name: user.name.clone(),
        })?;
        info!("User {} logged in", user.name);
        Ok(token)
    }
}

#[derive(Clone)]
pub struct GetCurrentUserInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl GetCurrentUserInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<UserDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        Ok(UserDTO {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use rstest::{fixture, rstest};

    use super::*;

    mock! {
        pub UserReaderMock {}

        #[async_trait]
        impl UserReader for UserReaderMock {
            async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
            async fn find_by_id(&self, id: &Id<User>) -> AppResult<Option<User>>;
        }
    }

    mock! {
        pub UserWriterMock {}

        #[async_trait]
        impl UserWriter for UserWriterMock {
            async fn insert(&self, user: User) -> AppResult<User>;
            async fn delete(&self, id: &Id<User>) -> AppResult<()>;
        }
    }

    mock! {
        pub HasherMock {}

        #[async_trait]
        impl CredentialsHasher for HasherMock {
            async fn hash_password(&self, password: &str) -> AppResult<String>;
            async fn verify_password(&self, password: &str, hashed: &str) -> AppResult<bool>;
        }
    }

    mock! {
        pub TokenCodecMock {}

        impl TokenCodec for TokenCodecMock {
            fn sign(&self, claims: TokenClaims) -> AppResult<String>;
            fn verify(&self, token: &str) -> AppResult<TokenClaims>;
        }
    }

    const EMAIL: &str = "john@example.com";
    const PASSWORD: &str = "plaintext-password";
    const HASH: &str = "$argon2id$v=19$m=16384,t=2,p=1$testsalt$testhash";

    fn existing_user() -> User {
        User::new("john".to_string(), EMAIL.to_string(), HASH.to_string())
    }

    #[fixture]
    fn register_dto() -> RegisterUserDTO {
        RegisterUserDTO {
            name: "john".to_string(),
            email: EMAIL.to_string(),
            password: PASSWORD.to_string(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_register_hashes_password_before_insert(register_dto: RegisterUserDTO) {
        let mut user_reader = MockUserReaderMock::new();
        let mut user_writer = MockUserWriterMock::new();
        let mut hasher = MockHasherMock::new();

        user_reader.expect_find_by_email().returning(|_| Ok(None));
        hasher
            .expect_hash_password()
            .returning(|_| Ok(HASH.to_string()));
        user_writer.expect_insert().returning(|user| {
            assert_ne!(user.password, PASSWORD);
            assert_eq!(user.password, HASH);
            Ok(user)
        });

        let interactor = RegisterUserInteractor::new(
            Arc::new(user_reader),
            Arc::new(user_writer),
            Arc::new(hasher),
        );
        let user = interactor.execute(register_dto).await.unwrap();

        assert_eq!(user.email, EMAIL);
        assert!(!user.avatar.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_register_duplicate_email_is_conflict(register_dto: RegisterUserDTO) {
        let mut user_reader = MockUserReaderMock::new();
        let user_writer = MockUserWriterMock::new();
        let hasher = MockHasherMock::new();

        user_reader
            .expect_find_by_email()
            .returning(|_| Ok(Some(existing_user())));

        let interactor = RegisterUserInteractor::new(
            Arc::new(user_reader),
            Arc::new(user_writer),
            Arc::new(hasher),
        );
        let result = interactor.execute(register_dto).await;

        assert!(matches!(result, Err(AppError::Conflict { key: "email", .. })));
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_success_returns_signed_token() {
        let mut user_reader = MockUserReaderMock::new();
        let mut hasher = MockHasherMock::new();
        let mut tokens = MockTokenCodecMock::new();

        user_reader
            .expect_find_by_email()
            .returning(|_| Ok(Some(existing_user())));
        hasher.expect_verify_password().returning(|_, _| Ok(true));
        tokens.expect_sign().returning(|claims| {
            assert_eq!(claims.name, "john");
            Ok("signed-token".to_string())
        });

        let interactor =
            LoginInteractor::new(Arc::new(user_reader), Arc::new(hasher), Arc::new(tokens));
        let token = interactor
            .execute(LoginDTO {
                email: EMAIL.to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(token, "signed-token");
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_wrong_password_is_rejected() {
        let mut user_reader = MockUserReaderMock::new();
        let mut hasher = MockHasherMock::new();
        let tokens = MockTokenCodecMock::new();

        user_reader
            .expect_find_by_email()
            .returning(|_| Ok(Some(existing_user())));
        hasher.expect_verify_password().returning(|_, _| Ok(false));

        let interactor =
            LoginInteractor::new(Arc::new(user_reader), Arc::new(hasher), Arc::new(tokens));
        let result = interactor
            .execute(LoginDTO {
                email: EMAIL.to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_unknown_email_is_rejected() {
        let mut user_reader = MockUserReaderMock::new();
        let hasher = MockHasherMock::new();
        let tokens = MockTokenCodecMock::new();

        user_reader.expect_find_by_email().returning(|_| Ok(None));

        let interactor =
            LoginInteractor::new(Arc::new(user_reader), Arc::new(hasher), Arc::new(tokens));
        let result = interactor
            .execute(LoginDTO {
                email: "nobody@example.com".to_string(),
                password: PASSWORD.to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_current_user_round_trip() {
        let user = existing_user();
        let user_id = user.id;
        let mut user_reader = MockUserReaderMock::new();
        let returned = user.clone();
        user_reader
            .expect_find_by_id()
            .returning(move |_| Ok(Some(returned.clone())));

        let interactor = GetCurrentUserInteractor::new(Arc::new(user_reader));
        let dto = interactor.execute(IdDTO { id: user_id.to_hex() }).await.unwrap();

        assert_eq!(dto.id, user_id.to_hex());
        assert_eq!(dto.email, EMAIL);
    }
}
