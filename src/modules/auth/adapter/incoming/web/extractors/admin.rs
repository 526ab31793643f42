use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::Arc;

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::application::services::AdminSession;
use crate::shared::notice::{redirect_with, Notice};
use crate::AppState;

pub const SESSION_COOKIE: &str = "portfolio_session";

/// A request made by a logged-in admin.
///
/// Extraction fails with a redirect to `/login`. Use `Option<Admin>` on
/// pages that also serve visitors.
#[derive(Debug, Clone)]
pub struct Admin(pub Arc<AdminSession>);

impl Deref for Admin {
    type Target = AdminSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn create_redirect_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn login_required() -> ActixError {
    create_redirect_error(redirect_with(
        "/login",
        &[Notice::error("Please log in to access the dashboard")],
    ))
}

impl FromRequest for Admin {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            error!("AppState is not registered");
            return ready(Err(actix_web::error::ErrorInternalServerError(
                "application state missing",
            )));
        };

        let session = req
            .cookie(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
            .and_then(|id| state.sessions.get(id));

        match session {
            Some(session) => ready(Ok(Admin(session))),
            None => ready(Err(login_required())),
        }
    }
}

pub fn session_cookie(id: Uuid, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn expired_session_cookie() -> Cookie<'static> {
    let mut removal = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    removal.make_removal();
    removal
}
