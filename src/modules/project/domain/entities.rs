// src/modules/project/domain/entities.rs
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::Resource;
use crate::shared::forms::{join_csv, optional, optional_url, require_all, split_csv, trimmed, ValidationError};
use crate::shared::state::Record;

pub const DEFAULT_KIND: &str = "Project";
pub const NO_DESCRIPTION: &str = "No description available.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Project {
    pub fn kind_label(&self) -> &str {
        non_blank(&self.kind).unwrap_or(DEFAULT_KIND)
    }

    pub fn description_text(&self) -> &str {
        non_blank(&self.description).unwrap_or(NO_DESCRIPTION)
    }

    pub fn live_link(&self) -> Option<&str> {
        non_blank(&self.live_url)
    }

    pub fn github_link(&self) -> Option<&str> {
        non_blank(&self.github_url)
    }
}

impl Record for Project {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Project form as posted; `tech_stack` is comma separated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl Resource for Project {
    type Draft = ProjectDraft;
    type Form = ProjectForm;

    const PATH: &'static str = "project";
    const LIST_KEYS: &'static [&'static str] = &["projects", "data"];
    const ITEM_KEYS: &'static [&'static str] = &["project", "data"];
    const LABEL: &'static str = "Project";
    const FETCH_FAILED: &'static str = "Failed to fetch projects";

    fn validate(form: ProjectForm) -> Result<ProjectDraft, ValidationError> {
        require_all(&[&form.title], "Title is required")?;

        Ok(ProjectDraft {
            title: trimmed(&form.title),
            kind: trimmed(&form.kind),
            description: form.description.trim().to_string(),
            tech_stack: split_csv(&form.tech_stack),
            live_url: optional_url("Live URL", &form.live_url)?,
            github_url: optional_url("GitHub URL", &form.github_url)?,
            thumbnail: optional_url("Thumbnail URL", &form.thumbnail)?,
        })
    }

    fn to_form(&self) -> ProjectForm {
        ProjectForm {
            title: self.title.clone(),
            kind: self.kind.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            tech_stack: join_csv(&self.tech_stack),
            live_url: self.live_url.clone().unwrap_or_default(),
            github_url: self.github_url.clone().unwrap_or_default(),
            thumbnail: self.thumbnail.clone().unwrap_or_default(),
        }
    }

    fn from_draft(id: Option<i64>, draft: &ProjectDraft) -> Self {
        Project {
            id,
            title: draft.title.clone(),
            kind: optional(&draft.kind),
            description: optional(&draft.description),
            tech_stack: draft.tech_stack.clone(),
            live_url: draft.live_url.clone(),
            github_url: draft.github_url.clone(),
            thumbnail: draft.thumbnail.clone(),
        }
    }
}
