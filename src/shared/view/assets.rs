// src/shared/view/assets.rs
use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{get, HttpResponse, Responder};

const SITE_CSS: &str = include_str!("../../../static/site.css");
const NOT_FOUND_SVG: &str = include_str!("../../../static/not-found.svg");

fn asset(content_type: &'static str, body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(CacheControl(vec![
            CacheDirective::Public,
            CacheDirective::MaxAge(86_400),
        ]))
        .body(body)
}

#[get("/static/site.css")]
pub async fn site_css() -> impl Responder {
    asset("text/css; charset=utf-8", SITE_CSS)
}

#[get("/static/not-found.svg")]
pub async fn not_found_image() -> impl Responder {
    asset("image/svg+xml", NOT_FOUND_SVG)
}
