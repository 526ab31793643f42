pub mod login;
pub mod logout;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login::login_page)
        .service(login::login_submit)
        .service(logout::logout);
}
