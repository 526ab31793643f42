// src/modules/blog/domain/entities.rs
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::Resource;
use crate::shared::forms::{optional_url, require_all, trimmed, ValidationError};
use crate::shared::state::Record;
use crate::shared::view::widgets::NOT_FOUND_IMAGE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Blog {
    /// Only absolute http(s) thumbnails are trusted; anything else falls back
    /// to the bundled placeholder.
    pub fn thumbnail_src(&self) -> String {
        match self.thumbnail.as_deref().map(str::trim) {
            Some(src) if src.starts_with("http") => src.to_string(),
            _ => NOT_FOUND_IMAGE.to_string(),
        }
    }
}

impl Record for Blog {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl Resource for Blog {
    type Draft = BlogDraft;
    type Form = BlogForm;

    const PATH: &'static str = "blog";
    const LIST_KEYS: &'static [&'static str] = &["data", "blogs"];
    const ITEM_KEYS: &'static [&'static str] = &["data", "blog"];
    const LABEL: &'static str = "Blog";
    const FETCH_FAILED: &'static str = "Failed to fetch blogs";

    fn validate(form: BlogForm) -> Result<BlogDraft, ValidationError> {
        require_all(&[&form.title, &form.content], "Title and content are required")?;

        Ok(BlogDraft {
            title: trimmed(&form.title),
            content: form.content.trim().to_string(),
            thumbnail: optional_url("Thumbnail URL", &form.thumbnail)?,
        })
    }

    fn to_form(&self) -> BlogForm {
        BlogForm {
            title: self.title.clone(),
            content: self.content.clone(),
            thumbnail: self.thumbnail.clone().unwrap_or_default(),
        }
    }

    fn from_draft(id: Option<i64>, draft: &BlogDraft) -> Self {
        Blog {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            thumbnail: draft.thumbnail.clone(),
            created_at: None,
        }
    }
}
