// src/modules/experience/domain/entities.rs
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::Resource;
use crate::shared::forms::{
    checkbox, date_input_value, join_csv, optional_date, optional_url, require_all, split_csv,
    trimmed, ValidationError,
};
use crate::shared::state::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Experience {
    /// Technologies as one line, `N/A` when none are listed.
    pub fn technologies_line(&self) -> String {
        if self.technologies.is_empty() {
            "N/A".to_string()
        } else {
            join_csv(&self.technologies)
        }
    }
}

impl Record for Experience {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Request body. Dates are ISO timestamps or `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDraft {
    pub title: String,
    pub company: String,
    pub position: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: String,
    pub technologies: Vec<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_img: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// Present only when the box is ticked.
    #[serde(default)]
    pub is_current: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub certificate_img: String,
}

impl Resource for Experience {
    type Draft = ExperienceDraft;
    type Form = ExperienceForm;

    const PATH: &'static str = "experience";
    const LIST_KEYS: &'static [&'static str] = &["data", "experiences"];
    const ITEM_KEYS: &'static [&'static str] = &["data", "experience"];
    const LABEL: &'static str = "Experience";
    const FETCH_FAILED: &'static str = "Failed to fetch experiences";

    fn validate(form: ExperienceForm) -> Result<ExperienceDraft, ValidationError> {
        require_all(&[&form.title, &form.company], "Title and company are required")?;

        let is_current = checkbox(&form.is_current);
        let start_date = optional_date("Start date", &form.start_date)?;
        // A current position has no end.
        let end_date = if is_current {
            None
        } else {
            optional_date("End date", &form.end_date)?
        };

        // Both are midnight-UTC ISO strings, so text order is date order.
        if let (Some(start), Some(end)) = (&start_date, &end_date) {
            if end < start {
                return Err(ValidationError::Invalid(
                    "End date cannot be before start date".to_string(),
                ));
            }
        }

        Ok(ExperienceDraft {
            title: trimmed(&form.title),
            company: trimmed(&form.company),
            position: trimmed(&form.position),
            start_date,
            end_date,
            is_current,
            description: form.description.trim().to_string(),
            technologies: split_csv(&form.technologies),
            location: trimmed(&form.location),
            certificate_img: optional_url("Certificate image", &form.certificate_img)?,
        })
    }

    fn to_form(&self) -> ExperienceForm {
        ExperienceForm {
            title: self.title.clone(),
            company: self.company.clone(),
            position: self.position.clone(),
            start_date: date_input_value(self.start_date.as_deref()),
            end_date: date_input_value(self.end_date.as_deref()),
            is_current: self.is_current.then(|| "on".to_string()),
            description: self.description.clone(),
            technologies: join_csv(&self.technologies),
            location: self.location.clone(),
            certificate_img: self.certificate_img.clone().unwrap_or_default(),
        }
    }

    fn from_draft(id: Option<i64>, draft: &ExperienceDraft) -> Self {
        Experience {
            id,
            title: draft.title.clone(),
            company: draft.company.clone(),
            position: draft.position.clone(),
            start_date: draft.start_date.clone(),
            end_date: draft.end_date.clone(),
            is_current: draft.is_current,
            description: draft.description.clone(),
            technologies: draft.technologies.clone(),
            location: draft.location.clone(),
            certificate_img: draft.certificate_img.clone(),
            created_at: None,
            updated_at: None,
        }
    }
}
