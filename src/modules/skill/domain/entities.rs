// src/modules/skill/domain/entities.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::modules::content::domain::Resource;
use crate::shared::forms::{require_all, trimmed, ValidationError};
use crate::shared::state::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    /// Anything the server sends outside the known groups. Never displayed.
    #[serde(other)]
    Other,
}

impl SkillCategory {
    /// Display order on the home page.
    pub const GROUPS: [SkillCategory; 3] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools",
            SkillCategory::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "fa-solid fa-code",
            SkillCategory::Backend => "fa-solid fa-server",
            SkillCategory::Tools => "fa-solid fa-toolbox",
            SkillCategory::Other => "fa-solid fa-circle-question",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::GROUPS
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::Invalid("Category must be Frontend, Backend or Tools".to_string())
            })
    }
}

/// Icon class and brand colour for a skill name.
pub struct Brand {
    pub icon: &'static str,
    pub color: &'static str,
}

const FALLBACK_BRAND: Brand = Brand {
    icon: "fa-solid fa-code",
    color: "#FFFFFF",
};

const BRANDS: &[(&str, Brand)] = &[
    ("React.js", Brand { icon: "devicon-react-original", color: "#61DBFB" }),
    ("Next.js", Brand { icon: "devicon-nextjs-plain", color: "#FFFFFF" }),
    ("Tailwind CSS", Brand { icon: "devicon-tailwindcss-original", color: "#06B6D4" }),
    ("TypeScript", Brand { icon: "devicon-typescript-plain", color: "#3178C6" }),
    ("shadcn", Brand { icon: "fa-solid fa-layer-group", color: "#FFFFFF" }),
    ("Node.js", Brand { icon: "devicon-nodejs-plain", color: "#68A063" }),
    ("Express.js", Brand { icon: "devicon-express-original", color: "#000000" }),
    ("MongoDB", Brand { icon: "devicon-mongodb-plain", color: "#47A248" }),
    ("PostgreSQL", Brand { icon: "devicon-postgresql-plain", color: "#336791" }),
    ("Prisma", Brand { icon: "devicon-prisma-original", color: "#0C344B" }),
    ("Git", Brand { icon: "devicon-git-plain", color: "#F05032" }),
    ("GitHub", Brand { icon: "devicon-github-original", color: "#FFFFFF" }),
    ("VS Code", Brand { icon: "devicon-vscode-plain", color: "#007ACC" }),
    ("Firebase", Brand { icon: "devicon-firebase-plain", color: "#FFCA28" }),
    ("Linux", Brand { icon: "devicon-linux-plain", color: "#FCC624" }),
    ("Vercel", Brand { icon: "devicon-vercel-original", color: "#FFFFFF" }),
    ("Netlify", Brand { icon: "devicon-netlify-plain", color: "#00C7B7" }),
];

pub fn brand_for(name: &str) -> &'static Brand {
    let name = name.trim();
    BRANDS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, brand)| brand)
        .unwrap_or(&FALLBACK_BRAND)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    pub category: SkillCategory,
}

impl Skill {
    pub fn brand(&self) -> &'static Brand {
        brand_for(&self.name)
    }
}

impl Record for Skill {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillDraft {
    pub name: String,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
}

impl Resource for Skill {
    type Draft = SkillDraft;
    type Form = SkillForm;

    const PATH: &'static str = "skill";
    const LIST_KEYS: &'static [&'static str] = &["skills", "data"];
    const ITEM_KEYS: &'static [&'static str] = &["skill", "data"];
    const LABEL: &'static str = "Skill";
    const FETCH_FAILED: &'static str = "Failed to fetch skills";

    fn validate(form: SkillForm) -> Result<SkillDraft, ValidationError> {
        require_all(&[&form.name, &form.category], "Name and category are required")?;

        Ok(SkillDraft {
            name: trimmed(&form.name),
            category: form.category.parse()?,
        })
    }

    fn to_form(&self) -> SkillForm {
        SkillForm {
            name: self.name.clone(),
            category: match self.category {
                SkillCategory::Other => String::new(),
                known => known.to_string(),
            },
        }
    }

    fn from_draft(id: Option<i64>, draft: &SkillDraft) -> Self {
        Skill {
            id,
            name: draft.name.clone(),
            category: draft.category,
        }
    }
}
