// src/modules/content/application/dashboard.rs
use super::services::SectionService;
use crate::modules::blog::domain::entities::Blog;
use crate::modules::content::domain::Resource;
use crate::modules::experience::domain::entities::Experience;
use crate::modules::message::domain::entities::Message;
use crate::modules::project::domain::entities::Project;
use crate::modules::skill::domain::entities::Skill;
use crate::shared::state::SectionList;
use crate::AppState;

/// Lists an admin session has loaded, patched in place by its mutations.
#[derive(Debug, Default)]
pub struct Dashboard {
    pub blogs: SectionList<Blog>,
    pub projects: SectionList<Project>,
    pub skills: SectionList<Skill>,
    pub experiences: SectionList<Experience>,
    pub messages: SectionList<Message>,
}

/// Wires a resource to its slot in [`Dashboard`] and its service in [`AppState`].
pub trait Sectioned: Resource {
    fn section_mut(dashboard: &mut Dashboard) -> &mut SectionList<Self>;

    fn service(state: &AppState) -> &SectionService<Self>;
}

impl Sectioned for Blog {
    fn section_mut(dashboard: &mut Dashboard) -> &mut SectionList<Self> {
        &mut dashboard.blogs
    }

    fn service(state: &AppState) -> &SectionService<Self> {
        &state.blogs
    }
}

impl Sectioned for Project {
    fn section_mut(dashboard: &mut Dashboard) -> &mut SectionList<Self> {
        &mut dashboard.projects
    }

    fn service(state: &AppState) -> &SectionService<Self> {
        &state.projects
    }
}

impl Sectioned for Skill {
    fn section_mut(dashboard: &mut Dashboard) -> &mut SectionList<Self> {
        &mut dashboard.skills
    }

    fn service(state: &AppState) -> &SectionService<Self> {
        &state.skills
    }
}

impl Sectioned for Experience {
    fn section_mut(dashboard: &mut Dashboard) -> &mut SectionList<Self> {
        &mut dashboard.experiences
    }

    fn service(state: &AppState) -> &SectionService<Self> {
        &state.experiences
    }
}

impl Sectioned for Message {
    fn section_mut(dashboard: &mut Dashboard) -> &mut SectionList<Self> {
        &mut dashboard.messages
    }

    fn service(state: &AppState) -> &SectionService<Self> {
        &state.messages
    }
}
