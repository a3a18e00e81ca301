use serde::{Deserialize, Serialize};

/// A single blog entry. The date is display text and is never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: u32,
    author: String,
    title: String,
    content: String,
    date_posted: String,
}

impl Post {
    pub fn new(id: u32, author: &str, title: &str, content: &str, date_posted: &str) -> Post {
        Post {
            id,
            author: author.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            date_posted: date_posted.to_string(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn date_posted(&self) -> &str {
        &self.date_posted
    }
}
