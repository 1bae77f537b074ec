use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::post::{
    AddCommentDTO, CreatePostDTO, DeletePostDTO, LikePostDTO, RemoveCommentDTO,
};
use crate::application::interface::gateway::post::{PostReader, PostWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::post::{Comment, Post};
use crate::domain::entities::user::User;
use crate::domain::validation::validate_post_input;

const NO_POST: AppError = AppError::NotFound {
    key: "nopost",
    message: "No post found with that id",
};

#[derive(Clone)]
pub struct CreatePostInteractor {
    post_writer: Arc<dyn PostWriter>,
}

impl CreatePostInteractor {
    pub fn new(post_writer: Arc<dyn PostWriter>) -> Self {
        Self { post_writer }
    }

    pub async fn execute(&self, dto: CreatePostDTO) -> AppResult<Post> {
        let outcome = validate_post_input(&dto.draft);
        if !outcome.is_valid {
            return Err(AppError::Validation(outcome.errors));
        }
        let user_id: Id<User> = dto.user.try_into()?;
        let text = dto.draft.text.unwrap_or_default();
        let post = self
            .post_writer
            .insert(Post::new(user_id, text, dto.name, dto.avatar))
            .await?;
        info!("User {} created post {}", user_id, post.id);
        Ok(post)
    }
}

#[derive(Clone)]
pub struct ListPostsInteractor {
    post_reader: Arc<dyn PostReader>,
}

impl ListPostsInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>) -> Self {
        Self { post_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<Post>> {
        self.post_reader.list().await
    }
}

#[derive(Clone)]
pub struct GetPostInteractor {
    post_reader: Arc<dyn PostReader>,
}

impl GetPostInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>) -> Self {
        Self { post_reader }
    }

    pub async fn execute(&self, post_id: String) -> AppResult<Post> {
        let post_id: Id<Post> = post_id.try_into()?;
        self.post_reader.find_by_id(&post_id).await?.ok_or(NO_POST)
    }
}

#[derive(Clone)]
pub struct DeletePostInteractor {
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl DeletePostInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>, post_writer: Arc<dyn PostWriter>) -> Self {
        Self {
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: DeletePostDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.user.try_into()?;
        let post_id: Id<Post> = dto.post.try_into()?;
        let post = self.post_reader.find_by_id(&post_id).await?.ok_or(NO_POST)?;
        // The ownership check runs before any mutating store call.
        if post.user != user_id {
            return Err(AppError::Forbidden {
                key: "notauthorized",
                message: "User not authorized",
            });
        }
        self.post_writer.delete(&post_id).await?;
        info!("User {} deleted post {}", user_id, post_id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct LikePostInteractor {
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl LikePostInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>, post_writer: Arc<dyn PostWriter>) -> Self {
        Self {
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: LikePostDTO) -> AppResult<Post> {
        let user_id: Id<User> = dto.user.try_into()?;
        let post_id: Id<Post> = dto.post.try_into()?;
        let mut post = self.post_reader.find_by_id(&post_id).await?.ok_or(NO_POST)?;
        if !post.like(user_id) {
            return Err(AppError::Conflict {
                key: "alreadyliked",
                message: "User already liked this post",
            });
        }
        self.post_writer.replace(post).await
    }
}

#[derive(Clone)]
pub struct UnlikePostInteractor {
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl UnlikePostInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>, post_writer: Arc<dyn PostWriter>) -> Self {
        Self {
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: LikePostDTO) -> AppResult<Post> {
        let user_id: Id<User> = dto.user.try_into()?;
        let post_id: Id<Post> = dto.post.try_into()?;
        let mut post = self.post_reader.find_by_id(&post_id).await?.ok_or(NO_POST)?;
        if !post.unlike(user_id) {
            return Err(AppError::Conflict {
                key: "notliked",
                message: "User has not yet liked this post",
            });
        }
        self.post_writer.replace(post).await
    }
}

#[derive(Clone)]
pub struct AddCommentInteractor {
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl AddCommentInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>, post_writer: Arc<dyn PostWriter>) -> Self {
        Self {
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: AddCommentDTO) -> AppResult<Post> {
        let outcome = validate_post_input(&dto.draft);
        if !outcome.is_valid {
            return Err(AppError::Validation(outcome.errors));
        }
        let user_id: Id<User> = dto.user.try_into()?;
        let post_id: Id<Post> = dto.post.try_into()?;
        let mut post = self.post_reader.find_by_id(&post_id).await?.ok_or(NO_POST)?;
        let text = dto.draft.text.unwrap_or_default();
        post.add_comment(Comment::new(user_id, text, dto.name, dto.avatar));
        self.post_writer.replace(post).await
    }
}

#[derive(Clone)]
pub struct RemoveCommentInteractor {
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl RemoveCommentInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>, post_writer: Arc<dyn PostWriter>) -> Self {
        Self {
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveCommentDTO) -> AppResult<Post> {
        let post_id: Id<Post> = dto.post.try_into()?;
        let comment_id: Id<Comment> = dto.comment.try_into()?;
        let mut post = self.post_reader.find_by_id(&post_id).await?.ok_or(NO_POST)?;
        if !post.remove_comment(comment_id) {
            return Err(AppError::NotFound {
                key: "commentnotexists",
                message: "Comment does not exist",
            });
        }
        self.post_writer.replace(post).await
    }
}
