use actix_web::{post, web, HttpResponse};
use tracing::warn;

use crate::modules::auth::adapter::incoming::web::extractors::admin::{expired_session_cookie, Admin};
use crate::shared::notice::{redirect_with, Notice};
use crate::AppState;

/// Ends the admin session. The local session is dropped even when the API
/// refuses the logout.
#[post("/logout")]
pub async fn logout(admin: Option<Admin>, data: web::Data<AppState>) -> HttpResponse {
    let notices = match admin {
        Some(admin) => match data.logout_admin_use_case.execute(admin.id).await {
            Ok(()) => vec![Notice::success("Logged out successfully!")],
            Err(e) => vec![Notice::error(e.to_string())],
        },
        None => Vec::new(),
    };

    let mut response = redirect_with("/login", &notices);
    if let Err(e) = response.add_cookie(&expired_session_cookie()) {
        warn!("Could not clear session cookie: {}", e);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use mockall::mock;
    use uuid::Uuid;

    use crate::modules::auth::adapter::incoming::web::extractors::admin::SESSION_COOKIE;
    use crate::modules::auth::application::use_cases::logout_admin::{ILogoutAdminUseCase, LogoutError};
    use crate::shared::notice::{decode_notices, NOTICE_COOKIE};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::session_helper::open_admin_session;

    mock! {
        pub LogoutUseCaseMock {}
        #[async_trait]
        impl ILogoutAdminUseCase for LogoutUseCaseMock {
            async fn execute(&self, session_id: Uuid) -> Result<(), LogoutError>;
        }
    }

    fn flashed(resp: &actix_web::dev::ServiceResponse) -> Vec<Notice> {
        resp.response()
            .cookies()
            .find(|c| c.name() == NOTICE_COOKIE)
            .map(|c| decode_notices(c.value()))
            .unwrap_or_default()
    }

    #[actix_web::test]
    async fn test_logout_flashes_success_and_clears_cookie() {
        let mut use_case = MockLogoutUseCaseMock::new();
        use_case.expect_execute().times(1).returning(|_| Ok(()));
        let state = TestAppStateBuilder::default()
            .with_logout_admin(Arc::new(use_case))
            .build();
        let cookie = open_admin_session(&state);
        let app = test::init_service(App::new().app_data(state).service(logout)).await;

        let req = test::TestRequest::post().uri("/logout").cookie(cookie).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(flashed(&resp), vec![Notice::success("Logged out successfully!")]);
        let cleared = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .unwrap();
        assert_eq!(cleared.value(), "");
    }

    #[actix_web::test]
    async fn test_logout_failure_shows_server_message() {
        let mut use_case = MockLogoutUseCaseMock::new();
        use_case
            .expect_execute()
            .returning(|_| Err(LogoutError::Rejected("Session already ended".to_string())));
        let state = TestAppStateBuilder::default()
            .with_logout_admin(Arc::new(use_case))
            .build();
        let cookie = open_admin_session(&state);
        let app = test::init_service(App::new().app_data(state).service(logout)).await;

        let req = test::TestRequest::post().uri("/logout").cookie(cookie).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(flashed(&resp), vec![Notice::error("Session already ended")]);
    }

    #[actix_web::test]
    async fn test_logout_without_session_just_redirects() {
        let mut use_case = MockLogoutUseCaseMock::new();
        use_case.expect_execute().times(0);
        let state = TestAppStateBuilder::default()
            .with_logout_admin(Arc::new(use_case))
            .build();
        let app = test::init_service(App::new().app_data(state).service(logout)).await;

        let req = test::TestRequest::post().uri("/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert!(flashed(&resp).is_empty());
    }
}
