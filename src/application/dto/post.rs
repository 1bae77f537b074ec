use crate::domain::validation::PostDraft;

#[derive(Debug)]
pub struct CreatePostDTO {
    pub user: String,
    pub draft: PostDraft,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug)]
pub struct DeletePostDTO {
    pub user: String,
    pub post: String,
}

#[derive(Debug)]
pub struct LikePostDTO {
    pub user: String,
    pub post: String,
}

#[derive(Debug)]
pub struct AddCommentDTO {
    pub user: String,
    pub post: String,
    pub draft: PostDraft,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug)]
pub struct RemoveCommentDTO {
    pub post: String,
    pub comment: String,
}
