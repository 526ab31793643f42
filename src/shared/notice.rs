// src/shared/notice.rs
//
// Notices are the server-rendered counterpart of toast notifications. A
// handler that redirects stores them in a short-lived cookie; the next page
// render shows them once and clears the cookie.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse};

pub const NOTICE_COOKIE: &str = "portfolio_notice";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "success" => Some(NoticeLevel::Success),
            "error" => Some(NoticeLevel::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    pub fn css_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "notice notice-success",
            NoticeLevel::Error => "notice notice-error",
        }
    }
}

/// Serialises notices into a cookie-safe string: `level.hex(message)` pairs
/// joined by `_`. Hex keeps the value free of characters that cookie
/// percent-encoding would touch.
pub fn encode_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|n| format!("{}.{}", n.level.as_str(), hex::encode(n.message.as_bytes())))
        .collect::<Vec<_>>()
        .join("_")
}

pub fn decode_notices(raw: &str) -> Vec<Notice> {
    raw.split('_')
        .filter_map(|part| {
            let (level, encoded) = part.split_once('.')?;
            let level = NoticeLevel::parse(level)?;
            let bytes = hex::decode(encoded).ok()?;
            Some(Notice {
                level,
                message: String::from_utf8(bytes).ok()?,
            })
        })
        .collect()
}

/// Notices flashed by the previous response, if any.
pub fn pending_notices(req: &HttpRequest) -> Vec<Notice> {
    req.cookie(NOTICE_COOKIE)
        .map(|cookie| decode_notices(cookie.value()))
        .unwrap_or_default()
}

/// `303 See Other` to `location`, flashing `notices` for the next page.
pub fn redirect_with(location: &str, notices: &[Notice]) -> HttpResponse {
    let mut response = HttpResponse::SeeOther();
    response.insert_header((LOCATION, location));

    if !notices.is_empty() {
        response.cookie(
            Cookie::build(NOTICE_COOKIE, encode_notices(notices))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .max_age(CookieDuration::seconds(60))
                .finish(),
        );
    }

    response.finish()
}

/// Clears the flash cookie once its notices have been rendered.
pub fn clear_notices(response: &mut HttpResponse) {
    let mut removal = Cookie::build(NOTICE_COOKIE, "").path("/").finish();
    removal.make_removal();
    if let Err(e) = response.add_cookie(&removal) {
        tracing::warn!("Could not clear notice cookie: {}", e);
    }
}
