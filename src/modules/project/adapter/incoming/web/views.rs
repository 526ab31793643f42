// src/modules/project/adapter/incoming/web/views.rs
use leptos::prelude::*;

use crate::modules::content::adapter::incoming::web::dashboard_routes::DashboardSection;
use crate::modules::content::adapter::incoming::web::views::{
    area_field, entry_controls, text_field, typed_field,
};
use crate::modules::project::domain::entities::{Project, ProjectForm};
use crate::shared::state::{Keyed, LoadState, SectionList, Visibility};
use crate::shared::view::widgets::{empty_state, image_or_fallback, reveal, show_toggle, TitleSection};
use crate::shared::view::DashboardTab;

fn project_card(project: &Project, controls: Option<AnyView>) -> impl IntoView {
    let src = image_or_fallback(project.thumbnail.as_deref());
    let alt = project.title.clone();
    let kind = project.kind_label().to_string();
    let title = project.title.clone();
    let description = project.description_text().to_string();
    let tags = project
        .tech_stack
        .iter()
        .cloned()
        .map(|tech| view! { <span class="badge">{tech}</span> })
        .collect_view();
    let live = project.live_link().map(|href| {
        let href = href.to_string();
        view! {
            <a class="btn btn-small" href=href target="_blank" rel="noopener noreferrer">
                <i class="fa-solid fa-arrow-up-right-from-square"></i>
                " Live"
            </a>
        }
    });
    let github = project.github_link().map(|href| {
        let href = href.to_string();
        view! {
            <a class="btn btn-small btn-muted" href=href target="_blank" rel="noopener noreferrer">
                <i class="fa-brands fa-github"></i>
                " Code"
            </a>
        }
    });

    view! {
        <article class="card project-card">
            <img class="card-image" src=src alt=alt/>
            <div class="card-body">
                <span class="card-kind">{kind}</span>
                <h3 class="card-title">{title}</h3>
                <p class="card-text">{description}</p>
                <div class="tags">{tags}</div>
                <div class="card-links">{live}{github}</div>
                {controls}
            </div>
        </article>
    }
}

/// Home page projects section with its show-all toggle.
pub fn project_listing(list: &SectionList<Project>, limit: usize, expanded: bool) -> AnyView {
    let content = match list.state() {
        LoadState::Failed(reason) => empty_state(reason.clone()).into_any(),
        _ if list.is_empty() => empty_state("No projects to show yet.".to_string()).into_any(),
        _ => {
            let cards = list
                .visible(Visibility::from_toggle(limit, expanded))
                .iter()
                .map(|entry| project_card(&entry.item, None))
                .collect_view();
            view! { <div class="grid">{cards}</div> }.into_any()
        }
    };
    let toggle = show_toggle(
        list.has_more_than(limit),
        expanded,
        ("Show All Projects", "/?projects=all#projects".to_string()),
        ("Show Less", "/#projects".to_string()),
    );

    view! {
        <section id="projects" class="section">
            <div class="container">
                <TitleSection heading="Projects" sub_heading="My Recent Work"/>
                {reveal(content)}
                {toggle}
            </div>
        </section>
    }
    .into_any()
}

impl DashboardSection for Project {
    const SLUG: &'static str = "projects";
    const TITLE: &'static str = "Projects";
    const TAB: DashboardTab = DashboardTab::Projects;

    fn render_entries(entries: &[Keyed<Self>]) -> AnyView {
        let cards = entries
            .iter()
            .map(|entry| project_card(&entry.item, Some(entry_controls(Self::SLUG, entry.key))))
            .collect_view();
        view! { <div class="grid">{cards}</div> }.into_any()
    }

    fn render_fields(form: &ProjectForm) -> AnyView {
        view! {
            {text_field("Title", "title", form.title.clone(), true)}
            {text_field("Type", "type", form.kind.clone(), false)}
            {area_field("Description", "description", form.description.clone(), false)}
            {text_field("Tech stack (comma separated)", "tech_stack", form.tech_stack.clone(), false)}
            {typed_field("Live URL", "live_url", "url", form.live_url.clone())}
            {typed_field("GitHub URL", "github_url", "url", form.github_url.clone())}
            {typed_field("Thumbnail URL", "thumbnail", "url", form.thumbnail.clone())}
        }
        .into_any()
    }

    fn summary(&self) -> String {
        format!("\"{}\" will be removed permanently.", self.title)
    }
}
