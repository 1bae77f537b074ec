use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub user: Id<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: Id<Comment>,
    pub user: Id<User>,
    pub text: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(user: Id<User>, text: String, name: Option<String>, avatar: Option<String>) -> Self {
        Self {
            id: Id::generate(),
            user,
            text,
            name,
            avatar,
            date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: Id<Post>,
    pub user: Id<User>,
    pub text: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

impl Post {
    pub fn new(user: Id<User>, text: String, name: Option<String>, avatar: Option<String>) -> Self {
        Self {
            id: Id::generate(),
            user,
            text,
            name,
            avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    /// Prepends a like for the user. Returns false when the user already
    /// liked this post; the list is not modified in that case.
    pub fn like(&mut self, user: Id<User>) -> bool {
        if self.likes.iter().any(|like| like.user == user) {
            return false;
        }
        self.likes.insert(0, Like { user });
        true
    }

    /// Removes the user's like. Returns false when there is none.
    pub fn unlike(&mut self, user: Id<User>) -> bool {
        match self.likes.iter().position(|like| like.user == user) {
            Some(index) => {
                self.likes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Newest comment goes to the front.
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// Removes the comment with the given id. Returns false when no comment
    /// matches; the list is left untouched in that case.
    pub fn remove_comment(&mut self, id: Id<Comment>) -> bool {
        match self.comments.iter().position(|c| c.id == id) {
            Some(index) => {
                self.comments.remove(index);
                true
            }
            None => false,
        }
    }
}
