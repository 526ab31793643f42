// src/modules/content/adapter/incoming/web/dashboard_routes.rs
//
// One set of handlers serves every dashboard section; each section plugs in
// its slug, labels and views through `DashboardSection`.

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use leptos::prelude::AnyView;
use serde::Deserialize;

use super::views::{confirm_page, form_page, list_url, section_page};
use crate::modules::auth::adapter::incoming::web::extractors::admin::Admin;
use crate::modules::content::application::dashboard::Sectioned;
use crate::modules::content::application::services::SaveError;
use crate::shared::notice::{redirect_with, Notice};
use crate::shared::state::Keyed;
use crate::shared::view::{Chrome, DashboardTab, Page};
use crate::AppState;

pub trait DashboardSection: Sectioned {
    /// Path segment under `/dashboard`.
    const SLUG: &'static str;
    /// Section heading, plural.
    const TITLE: &'static str;
    const TAB: DashboardTab;
    /// Whether the dashboard offers create and edit forms.
    const EDITABLE: bool = true;

    fn render_entries(entries: &[Keyed<Self>]) -> AnyView;

    fn render_fields(form: &Self::Form) -> AnyView;

    /// One-line description used by the delete confirmation.
    fn summary(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Default, Deserialize)]
pub struct RefreshQuery {
    refresh: Option<String>,
}

impl RefreshQuery {
    pub fn requested(&self) -> bool {
        matches!(self.refresh.as_deref(), Some("1" | "true"))
    }
}

fn not_found<R: DashboardSection>() -> HttpResponse {
    redirect_with(
        &list_url(R::SLUG),
        &[Notice::error(format!("{} not found", R::LABEL))],
    )
}

fn save_failure_status(err: &SaveError) -> StatusCode {
    match err {
        SaveError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SaveError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Renders the create/edit form, optionally with the error that sent the
/// user back to it.
pub fn render_form<R: DashboardSection>(
    req: &HttpRequest,
    mode: FormMode,
    form: &R::Form,
    tab: DashboardTab,
    failure: Option<&SaveError>,
) -> HttpResponse {
    let title = match mode {
        FormMode::Create => format!("Create {}", R::LABEL),
        FormMode::Edit(_) => format!("Edit {}", R::LABEL),
    };

    let mut page = Page::new(title, Chrome::Dashboard { tab });
    if let Some(err) = failure {
        page = page
            .with_status(save_failure_status(err))
            .with_notices([err.notice()]);
    }
    page.render(req, form_page::<R>(mode, form))
}

pub async fn list_page<R: DashboardSection>(
    req: HttpRequest,
    admin: Admin,
    data: web::Data<AppState>,
    query: web::Query<RefreshQuery>,
) -> HttpResponse {
    let mut dashboard = admin.dashboard.lock().await;
    let list = R::section_mut(&mut dashboard);
    let notice = R::service(&data)
        .ensure_loaded(list, Some(&admin.credentials), query.requested())
        .await;

    Page::new(format!("{} | Dashboard", R::TITLE), Chrome::Dashboard { tab: R::TAB })
        .with_notices(notice)
        .render(&req, section_page::<R>(list))
}

pub async fn new_page<R: DashboardSection>(req: HttpRequest, _admin: Admin) -> HttpResponse {
    render_form::<R>(&req, FormMode::Create, &R::Form::default(), R::TAB, None)
}

pub async fn edit_page<R: DashboardSection>(
    req: HttpRequest,
    admin: Admin,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut dashboard = admin.dashboard.lock().await;
    let list = R::section_mut(&mut dashboard);

    if let Some(notice) = R::service(&data)
        .ensure_loaded(list, Some(&admin.credentials), false)
        .await
    {
        return redirect_with(&list_url(R::SLUG), &[notice]);
    }

    match list.get(id) {
        Some(item) => render_form::<R>(&req, FormMode::Edit(id), &item.to_form(), R::TAB, None),
        None => not_found::<R>(),
    }
}

async fn save<R: DashboardSection>(
    req: &HttpRequest,
    admin: &Admin,
    data: &AppState,
    mode: FormMode,
    form: R::Form,
) -> HttpResponse {
    let id = match mode {
        FormMode::Create => None,
        FormMode::Edit(id) => Some(id),
    };

    let mut dashboard = admin.dashboard.lock().await;
    let list = R::section_mut(&mut dashboard);

    match R::service(data)
        .submit(list, id, form.clone(), Some(&admin.credentials))
        .await
    {
        Ok(notice) => redirect_with(&list_url(R::SLUG), &[notice]),
        Err(err) => render_form::<R>(req, mode, &form, R::TAB, Some(&err)),
    }
}

pub async fn create<R: DashboardSection>(
    req: HttpRequest,
    admin: Admin,
    data: web::Data<AppState>,
    form: web::Form<R::Form>,
) -> HttpResponse {
    save::<R>(&req, &admin, &data, FormMode::Create, form.into_inner()).await
}

pub async fn update<R: DashboardSection>(
    req: HttpRequest,
    admin: Admin,
    data: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<R::Form>,
) -> HttpResponse {
    let mode = FormMode::Edit(path.into_inner());
    save::<R>(&req, &admin, &data, mode, form.into_inner()).await
}

pub async fn confirm_delete_page<R: DashboardSection>(
    req: HttpRequest,
    admin: Admin,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut dashboard = admin.dashboard.lock().await;
    let list = R::section_mut(&mut dashboard);

    if let Some(notice) = R::service(&data)
        .ensure_loaded(list, Some(&admin.credentials), false)
        .await
    {
        return redirect_with(&list_url(R::SLUG), &[notice]);
    }

    match list.get(id) {
        Some(item) => Page::new(
            format!("Delete {}", R::LABEL),
            Chrome::Dashboard { tab: R::TAB },
        )
        .render(&req, confirm_page::<R>(id, item.summary())),
        None => not_found::<R>(),
    }
}

pub async fn delete<R: DashboardSection>(
    admin: Admin,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut dashboard = admin.dashboard.lock().await;
    let list = R::section_mut(&mut dashboard);

    let notice = match R::service(&data)
        .remove(list, id, Some(&admin.credentials))
        .await
    {
        Ok(notice) | Err(notice) => notice,
    };
    redirect_with(&list_url(R::SLUG), &[notice])
}

/// Registers a section's routes under `/dashboard/<slug>`.
///
/// Create and edit routes are only added for editable sections. `new` is
/// registered ahead of `{id}` so it is not taken for an id.
pub fn configure_section<R: DashboardSection>(cfg: &mut web::ServiceConfig) {
    let base = list_url(R::SLUG);
    let mut collection = web::resource(base.clone()).route(web::get().to(list_page::<R>));

    if R::EDITABLE {
        collection = collection.route(web::post().to(create::<R>));
        cfg.service(web::resource(format!("{}/new", base)).route(web::get().to(new_page::<R>)));
        cfg.service(
            web::resource(format!("{}/{{id}}/edit", base)).route(web::get().to(edit_page::<R>)),
        );
        cfg.service(web::resource(format!("{}/{{id}}", base)).route(web::post().to(update::<R>)));
    }

    cfg.service(collection);
    cfg.service(
        web::resource(format!("{}/{{id}}/delete", base))
            .route(web::get().to(confirm_delete_page::<R>))
            .route(web::post().to(delete::<R>)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::LOCATION;
    use actix_web::{test, App};

    use crate::modules::blog::domain::entities::Blog;
    use crate::shared::http::GatewayError;
    use crate::shared::notice::{decode_notices, NOTICE_COOKIE};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::blog;
    use crate::tests::support::session_helper::open_admin_session;
    use crate::tests::support::stubs::StubGateway;

    fn flashed(resp: &actix_web::dev::ServiceResponse) -> Vec<Notice> {
        resp.response()
            .cookies()
            .find(|c| c.name() == NOTICE_COOKIE)
            .map(|c| decode_notices(c.value()))
            .unwrap_or_default()
    }

    fn location(resp: &actix_web::dev::ServiceResponse) -> String {
        resp.headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn test_refresh_query() {
        let q = |v: Option<&str>| RefreshQuery {
            refresh: v.map(str::to_string),
        };
        assert!(q(Some("1")).requested());
        assert!(q(Some("true")).requested());
        assert!(!q(Some("0")).requested());
        assert!(!q(None).requested());
    }

    #[actix_web::test]
    async fn test_list_requires_admin_session() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_section::<Blog>),
        )
        .await;

        let req = test::TestRequest::get().uri("/dashboard/blogs").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login");
    }

    #[actix_web::test]
    async fn test_list_renders_every_fetched_blog_once_per_session() {
        let gateway = StubGateway::with_items(vec![blog(1, "First"), blog(2, "Second")]);
        let state = TestAppStateBuilder::default()
            .with_blogs(gateway.clone())
            .build();
        let cookie = open_admin_session(&state);
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_section::<Blog>),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::get()
                .uri("/dashboard/blogs")
                .cookie(cookie.clone())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
            assert!(body.contains("First"));
            assert!(body.contains("Second"));
            assert_eq!(body.matches("blog-card").count(), 2);
        }
        assert_eq!(gateway.list_calls(), 1);

        let req = test::TestRequest::get()
            .uri("/dashboard/blogs?refresh=1")
            .cookie(cookie)
            .to_request();
        test::call_service(&app, req).await;
        assert_eq!(gateway.list_calls(), 2);
    }

    #[actix_web::test]
    async fn test_list_failure_renders_error_state() {
        let gateway = StubGateway::<Blog>::empty();
        gateway.fail_with(GatewayError::Network("down".to_string()));
        let state = TestAppStateBuilder::default()
            .with_blogs(gateway.clone())
            .build();
        let cookie = open_admin_session(&state);
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_section::<Blog>),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/dashboard/blogs")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Failed to fetch blogs"));
        assert!(!body.contains("blog-card"));
    }

    #[actix_web::test]
    async fn test_create_with_blank_title_is_rejected_before_api() {
        let gateway = StubGateway::<Blog>::empty();
        let state = TestAppStateBuilder::default()
            .with_blogs(gateway.clone())
            .build();
        let cookie = open_admin_session(&state);
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_section::<Blog>),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/dashboard/blogs")
            .cookie(cookie)
            .set_form([("title", ""), ("content", "Body"), ("thumbnail", "")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(gateway.write_calls(), 0);

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Title and content are required"));
        assert!(body.contains("Body"));
    }

    #[actix_web::test]
    async fn test_update_redirects_with_success_and_patches_cache() {
        let gateway = StubGateway::with_items(vec![blog(4, "four"), blog(5, "five")]);
        let state = TestAppStateBuilder::default()
            .with_blogs(gateway.clone())
            .build();
        let cookie = open_admin_session(&state);
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_section::<Blog>),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/dashboard/blogs")
            .cookie(cookie.clone())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/dashboard/blogs/5")
            .cookie(cookie.clone())
            .set_form([("title", "five edited"), ("content", "Body"), ("thumbnail", "")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/dashboard/blogs");
        assert_eq!(flashed(&resp), vec![Notice::success("Blog updated successfully")]);

        let req = test::TestRequest::get()
            .uri("/dashboard/blogs")
            .cookie(cookie)
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(body.contains("five edited"));
        assert_eq!(body.matches("blog-card").count(), 2);
        assert_eq!(gateway.list_calls(), 1);
    }

    #[actix_web::test]
    async fn test_edit_unknown_id_redirects_with_not_found() {
        let gateway = StubGateway::with_items(vec![blog(1, "a")]);
        let state = TestAppStateBuilder::default()
            .with_blogs(gateway.clone())
            .build();
        let cookie = open_admin_session(&state);
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_section::<Blog>),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/dashboard/blogs/99/edit")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(flashed(&resp), vec![Notice::error("Blog not found")]);
    }

    #[actix_web::test]
    async fn test_confirm_then_delete() {
        let gateway = StubGateway::with_items(vec![blog(1, "keep"), blog(2, "drop")]);
        let state = TestAppStateBuilder::default()
            .with_blogs(gateway.clone())
            .build();
        let cookie = open_admin_session(&state);
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_section::<Blog>),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/dashboard/blogs/2/delete")
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Are you sure you want to delete this blog?"));
        assert!(body.contains(r#"action="/dashboard/blogs/2/delete""#));

        let req = test::TestRequest::post()
            .uri("/dashboard/blogs/2/delete")
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(flashed(&resp), vec![Notice::success("Blog deleted successfully")]);

        let req = test::TestRequest::get()
            .uri("/dashboard/blogs")
            .cookie(cookie)
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("keep"));
        assert!(!body.contains("drop"));
    }

    #[actix_web::test]
    async fn test_delete_failure_flashes_error() {
        let gateway = StubGateway::with_items(vec![blog(1, "a")]);
        let state = TestAppStateBuilder::default()
            .with_blogs(gateway.clone())
            .build();
        let cookie = open_admin_session(&state);
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(configure_section::<Blog>),
        )
        .await;

        gateway.fail_with(GatewayError::Network("down".to_string()));
        let req = test::TestRequest::post()
            .uri("/dashboard/blogs/1/delete")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(flashed(&resp), vec![Notice::error("Failed to delete blog")]);
    }
}
