// src/shared/view/document.rs
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use leptos::prelude::*;

use super::chrome::{dashboard_sidebar, footer, navbar, Chrome};
use super::widgets::notice_banner;
use crate::shared::notice::{clear_notices, pending_notices, Notice, NOTICE_COOKIE};

#[component]
pub fn Document(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/static/not-found.svg"/>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"/>
                <link rel="stylesheet" href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"/>
                <link rel="stylesheet" href="/static/site.css"/>
                <title>{title}</title>
            </head>
            <body>{children()}</body>
        </html>
    }
}

fn frame(chrome: Chrome, notices: Vec<Notice>, body: AnyView) -> AnyView {
    match chrome {
        Chrome::Public { active, admin } => view! {
            {navbar(active, admin)}
            <main class="site-main">
                {notice_banner(notices)}
                {body}
            </main>
            {footer()}
        }
        .into_any(),
        Chrome::Dashboard { tab } => view! {
            <div class="dashboard">
                {dashboard_sidebar(tab)}
                <main class="dashboard-main">
                    {notice_banner(notices)}
                    {body}
                </main>
            </div>
        }
        .into_any(),
        Chrome::Plain => view! {
            <main class="plain-main">
                {notice_banner(notices)}
                {body}
            </main>
        }
        .into_any(),
    }
}

/// Renders a full HTML document to a string.
pub fn render_document(title: String, chrome: Chrome, notices: Vec<Notice>, body: AnyView) -> String {
    let owner = Owner::new_root(None);
    owner.with(|| {
        view! {
            <Document title=title>
                {frame(chrome, notices, body)}
            </Document>
        }
        .to_html()
    })
}

/// A rendered HTML response: title, layout, status and the notices raised
/// while handling the request.
///
/// Notices flashed by the previous redirect are shown first and their cookie
/// is cleared.
pub struct Page {
    title: String,
    chrome: Chrome,
    status: StatusCode,
    notices: Vec<Notice>,
}

impl Page {
    pub fn new(title: impl Into<String>, chrome: Chrome) -> Self {
        Self {
            title: title.into(),
            chrome,
            status: StatusCode::OK,
            notices: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_notices(mut self, notices: impl IntoIterator<Item = Notice>) -> Self {
        self.notices.extend(notices);
        self
    }

    pub fn render(self, req: &HttpRequest, body: impl IntoView + 'static) -> HttpResponse {
        let had_flash_cookie = req.cookie(NOTICE_COOKIE).is_some();
        let mut notices = pending_notices(req);
        notices.extend(self.notices);

        let html = render_document(self.title, self.chrome, notices, body.into_any());

        let mut response = HttpResponse::build(self.status)
            .content_type("text/html; charset=utf-8")
            .body(html);

        if had_flash_cookie {
            clear_notices(&mut response);
        }
        response
    }
}
