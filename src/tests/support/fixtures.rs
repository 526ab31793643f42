use crate::modules::blog::domain::entities::Blog;
use crate::modules::experience::domain::entities::Experience;
use crate::modules::message::domain::entities::Message;
use crate::modules::project::domain::entities::Project;
use crate::modules::skill::domain::entities::{Skill, SkillCategory};

pub fn blog(id: i64, title: &str) -> Blog {
    Blog {
        id: Some(id),
        title: title.to_string(),
        content: format!("Body of {}", title),
        thumbnail: None,
        created_at: Some("2024-03-01T00:00:00.000Z".to_string()),
    }
}

pub fn project(id: i64, title: &str) -> Project {
    Project {
        id: Some(id),
        title: title.to_string(),
        kind: Some("Web App".to_string()),
        description: Some(format!("About {}", title)),
        tech_stack: vec!["React".to_string(), "Node.js".to_string()],
        live_url: Some("https://example.com".to_string()),
        github_url: None,
        thumbnail: None,
    }
}

pub fn experience(id: i64, title: &str) -> Experience {
    Experience {
        id: Some(id),
        title: title.to_string(),
        company: "Acme Corp".to_string(),
        position: "Engineer".to_string(),
        start_date: Some("2023-01-01T00:00:00.000Z".to_string()),
        end_date: None,
        is_current: true,
        description: "Built things".to_string(),
        technologies: vec!["Rust".to_string()],
        location: "Remote".to_string(),
        certificate_img: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn message(id: i64, name: &str) -> Message {
    Message {
        id: Some(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        message: format!("Hello from {}", name),
        created_at: Some("2024-05-01T10:00:00.000Z".to_string()),
    }
}

pub fn skill(id: i64, name: &str, category: SkillCategory) -> Skill {
    Skill {
        id: Some(id),
        name: name.to_string(),
        category,
    }
}
