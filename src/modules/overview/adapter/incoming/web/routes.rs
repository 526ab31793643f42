use actix_web::{get, web, HttpRequest, HttpResponse};
use tracing::error;

use super::views::overview_page;
use crate::modules::auth::adapter::incoming::web::extractors::admin::Admin;
use crate::shared::http::GatewayError;
use crate::shared::notice::Notice;
use crate::shared::view::{Chrome, DashboardTab, Page};
use crate::AppState;

const FETCH_FAILED: &str = "Failed to fetch overview";
const UNREACHABLE: &str = "Something went wrong!";

fn failure_message(err: &GatewayError) -> String {
    match err {
        GatewayError::Status { .. } => err.user_message(FETCH_FAILED),
        _ => UNREACHABLE.to_string(),
    }
}

#[get("/dashboard")]
pub async fn dashboard_home(req: HttpRequest, admin: Admin, data: web::Data<AppState>) -> HttpResponse {
    let (overview, notice) = match data.overview.fetch(&admin.credentials).await {
        Ok(overview) => (Some(overview), None),
        Err(e) => {
            error!("Overview fetch failed: {}", e);
            (None, Some(Notice::error(failure_message(&e))))
        }
    };

    Page::new("Dashboard", Chrome::Dashboard { tab: DashboardTab::Overview })
        .with_notices(notice)
        .render(&req, overview_page(overview))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard_home);
}
