use actix_web::{post, web, HttpResponse};
use tracing::info;

use crate::modules::message::domain::entities::MessageForm;
use crate::shared::notice::redirect_with;
use crate::AppState;

/// Contact form target. The outcome is flashed and the visitor lands back on
/// the contact section.
#[post("/contact")]
pub async fn submit_contact(data: web::Data<AppState>, form: web::Form<MessageForm>) -> HttpResponse {
    let outcome = data.contact.send(form.into_inner()).await;
    info!(?outcome, "Contact form handled");
    redirect_with("/#contact", &outcome.notices())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_contact);
}
