use actix_web::cookie::Cookie;
use actix_web::web;

use crate::modules::auth::adapter::incoming::web::extractors::admin::session_cookie;
use crate::shared::http::Credentials;
use crate::AppState;

pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";
pub const TEST_CREDENTIALS: &str = "accessToken=test-token";

/// Opens an admin session in `state` and returns the browser cookie for it.
pub fn open_admin_session(state: &web::Data<AppState>) -> Cookie<'static> {
    let session = state.sessions.open(
        TEST_ADMIN_EMAIL,
        Credentials::from_header_value(TEST_CREDENTIALS),
    );
    session_cookie(session.id, false)
}
