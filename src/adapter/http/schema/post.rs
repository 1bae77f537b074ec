use serde::Deserialize;

use crate::domain::validation::PostDraft;

/// Shared by post creation and commenting; both validate the same way.
#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub text: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl PostBody {
    pub fn into_draft(self) -> (PostDraft, Option<String>, Option<String>) {
        (PostDraft { text: self.text }, self.name, self.avatar)
    }
}
