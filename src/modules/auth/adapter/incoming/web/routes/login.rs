use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::admin::{session_cookie, Admin};
use crate::modules::auth::adapter::incoming::web::views::login_page as login_view;
use crate::modules::auth::application::use_cases::login_admin::LoginRequest;
use crate::shared::notice::{redirect_with, Notice};
use crate::shared::view::{Chrome, Page};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

fn render_login(req: &HttpRequest, status: StatusCode, email: String, notice: Option<Notice>) -> HttpResponse {
    Page::new("Admin Login", Chrome::Plain)
        .with_status(status)
        .with_notices(notice)
        .render(req, login_view(email))
}

#[get("/login")]
pub async fn login_page(req: HttpRequest, admin: Option<Admin>) -> HttpResponse {
    if admin.is_some() {
        return HttpResponse::SeeOther()
            .insert_header((LOCATION, "/dashboard"))
            .finish();
    }
    render_login(&req, StatusCode::OK, String::new(), None)
}

#[post("/login")]
pub async fn login_submit(
    req: HttpRequest,
    data: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> HttpResponse {
    let form = form.into_inner();

    let request = match LoginRequest::new(&form.email, &form.password) {
        Ok(request) => request,
        Err(e) => {
            return render_login(
                &req,
                StatusCode::UNPROCESSABLE_ENTITY,
                form.email,
                Some(Notice::error(e.to_string())),
            )
        }
    };

    match data.login_admin_use_case.execute(request).await {
        Ok(session) => {
            info!(session = %session.id, "Admin logged in");
            let mut response = redirect_with(
                "/dashboard",
                &[Notice::success("Login successful! Welcome Admin 👑")],
            );
            let cookie = session_cookie(session.id, data.config.is_production());
            if let Err(e) = response.add_cookie(&cookie) {
                error!("Could not set session cookie: {}", e);
            }
            response
        }
        Err(e) => render_login(
            &req,
            StatusCode::UNAUTHORIZED,
            form.email,
            Some(Notice::error(e.to_string())),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{test, App};
    use async_trait::async_trait;
    use mockall::mock;

    use crate::modules::auth::adapter::incoming::web::extractors::admin::SESSION_COOKIE;
    use crate::modules::auth::application::services::AdminSession;
    use crate::modules::auth::application::use_cases::login_admin::{ILoginAdminUseCase, LoginError};
    use crate::shared::http::Credentials;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::session_helper::open_admin_session;

    mock! {
        pub LoginUseCaseMock {}
        #[async_trait]
        impl ILoginAdminUseCase for LoginUseCaseMock {
            async fn execute(&self, request: LoginRequest) -> Result<Arc<AdminSession>, LoginError>;
        }
    }

    #[actix_web::test]
    async fn test_blank_fields_never_reach_the_api() {
        let mut use_case = MockLoginUseCaseMock::new();
        use_case.expect_execute().times(0);
        let state = TestAppStateBuilder::default()
            .with_login_admin(Arc::new(use_case))
            .build();
        let app = test::init_service(App::new().app_data(state).service(login_submit)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "admin@example.com"), ("password", "")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Please enter both email and password"));
        assert!(body.contains(r#"value="admin@example.com""#));
    }

    #[actix_web::test]
    async fn test_successful_login_sets_cookie_and_redirects() {
        let builder = TestAppStateBuilder::default();
        let session = builder
            .sessions()
            .open("admin@example.com", Credentials::from_header_value("t=1"));
        let session_id = session.id;

        let mut use_case = MockLoginUseCaseMock::new();
        use_case
            .expect_execute()
            .times(1)
            .returning(move |_| Ok(Arc::clone(&session)));
        let state = builder.with_login_admin(Arc::new(use_case)).build();
        let app = test::init_service(App::new().app_data(state).service(login_submit)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "admin@example.com"), ("password", "secret")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/dashboard");
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .unwrap();
        assert_eq!(cookie.value(), session_id.to_string());
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[actix_web::test]
    async fn test_rejected_login_shows_message() {
        let mut use_case = MockLoginUseCaseMock::new();
        use_case
            .expect_execute()
            .returning(|_| Err(LoginError::Rejected("Invalid email or password".to_string())));
        let state = TestAppStateBuilder::default()
            .with_login_admin(Arc::new(use_case))
            .build();
        let app = test::init_service(App::new().app_data(state).service(login_submit)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "admin@example.com"), ("password", "wrong")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Invalid email or password"));
    }

    #[actix_web::test]
    async fn test_login_page_redirects_logged_in_admin() {
        let state = TestAppStateBuilder::default().build();
        let cookie = open_admin_session(&state);
        let app = test::init_service(App::new().app_data(state).service(login_page)).await;

        let req = test::TestRequest::get().uri("/login").cookie(cookie).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let req = test::TestRequest::get().uri("/login").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
