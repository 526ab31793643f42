use actix_web::{get, web, HttpRequest, HttpResponse};
use leptos::prelude::*;
use serde::Deserialize;

use super::views::{about, hero};
use crate::modules::auth::adapter::incoming::web::extractors::admin::Admin;
use crate::modules::blog::adapter::incoming::web::views::blog_listing;
use crate::modules::contact::adapter::incoming::web::views::contact_section;
use crate::modules::experience::adapter::incoming::web::views::experience_listing;
use crate::modules::project::adapter::incoming::web::views::project_listing;
use crate::modules::skill::adapter::incoming::web::views::skills_section;
use crate::shared::view::{Chrome, Page};
use crate::AppState;

/// `?projects=all`, `?experience=all` and `?blogs=all` expand the previews.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    projects: Option<String>,
    experience: Option<String>,
    blogs: Option<String>,
}

fn wants_all(value: &Option<String>) -> bool {
    value.as_deref() == Some("all")
}

#[get("/")]
pub async fn home(
    req: HttpRequest,
    admin: Option<Admin>,
    data: web::Data<AppState>,
    query: web::Query<HomeQuery>,
) -> HttpResponse {
    let credentials = admin.as_ref().map(|a| &a.credentials);

    // Each section loads on its own; one failing leaves the others intact.
    let (
        (projects, projects_notice),
        (experiences, experiences_notice),
        (skills, skills_notice),
        (blogs, blogs_notice),
    ) = futures::join!(
        data.projects.fetch(credentials),
        data.experiences.fetch(credentials),
        data.skills.fetch(credentials),
        data.blogs.fetch(credentials),
    );

    let limits = &data.config.limits;
    let body = view! {
        {hero()}
        {about()}
        {skills_section(&skills)}
        {experience_listing(&experiences, limits.experience, wants_all(&query.experience))}
        {project_listing(&projects, limits.projects, wants_all(&query.projects))}
        {blog_listing(
            &blogs,
            limits.home_blogs,
            wants_all(&query.blogs),
            "/?blogs=all#blog".to_string(),
            "/#blog".to_string(),
        )}
        {contact_section()}
    };

    let notices = [projects_notice, experiences_notice, skills_notice, blogs_notice]
        .into_iter()
        .flatten();

    Page::new(
        "Arman Mia | Portfolio",
        Chrome::Public {
            active: "#home",
            admin: admin.is_some(),
        },
    )
    .with_notices(notices)
    .render(&req, body)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
}
