// src/modules/blog/adapter/incoming/web/routes.rs
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::warn;

use super::views::{blog_detail, blog_listing, blog_missing};
use crate::modules::auth::adapter::incoming::web::extractors::admin::Admin;
use crate::modules::blog::domain::entities::{Blog, BlogForm};
use crate::modules::content::adapter::incoming::web::dashboard_routes::{render_form, FormMode};
use crate::shared::notice::Notice;
use crate::shared::view::{Chrome, DashboardTab, Page};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    all: Option<String>,
}

impl IndexQuery {
    fn expanded(&self) -> bool {
        matches!(self.all.as_deref(), Some("true" | "1"))
    }
}

#[get("/blogs")]
pub async fn blog_index(
    req: HttpRequest,
    admin: Option<Admin>,
    data: web::Data<AppState>,
    query: web::Query<IndexQuery>,
) -> HttpResponse {
    let credentials = admin.as_ref().map(|a| &a.credentials);
    let (list, notice) = data.blogs.fetch(credentials).await;
    let listing = blog_listing(
        &list,
        data.config.limits.blog_index,
        query.expanded(),
        "/blogs?all=true".to_string(),
        "/blogs".to_string(),
    );

    Page::new(
        "Blogs",
        Chrome::Public {
            active: "#blog",
            admin: admin.is_some(),
        },
    )
    .with_notices(notice)
    .render(&req, listing)
}

#[get("/blogs/{id}")]
pub async fn blog_page(
    req: HttpRequest,
    admin: Option<Admin>,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();
    let credentials = admin.as_ref().map(|a| &a.credentials);
    let chrome = Chrome::Public {
        active: "#blog",
        admin: admin.is_some(),
    };

    match data.blogs.gateway().find(id, credentials).await {
        Ok(blog) => Page::new(blog.title.clone(), chrome).render(&req, blog_detail(&blog)),
        Err(e) => {
            warn!("Blog {} could not be loaded: {}", id, e);
            let message = e.user_message("Blog not found");
            let status = if e.is_not_found() {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::BAD_GATEWAY
            };
            Page::new("Blog not found", chrome)
                .with_status(status)
                .with_notices([Notice::error(message.clone())])
                .render(&req, blog_missing(message))
        }
    }
}

/// Standalone entry point for writing a post; submits to the blog section.
#[get("/dashboard/create-blog")]
pub async fn create_blog_page(req: HttpRequest, _admin: Admin) -> HttpResponse {
    render_form::<Blog>(
        &req,
        FormMode::Create,
        &BlogForm::default(),
        DashboardTab::CreateBlog,
        None,
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(blog_index)
        .service(blog_page)
        .service(create_blog_page);
}
