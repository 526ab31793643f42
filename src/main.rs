#![recursion_limit = "512"]

mod config;
mod health;
mod modules;
mod shared;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{EmailSettings, SiteConfig};
use crate::health::UpstreamProbe;
use crate::modules::auth::adapter::outgoing::HttpAuthGateway;
use crate::modules::auth::application::ports::outgoing::AuthGateway;
use crate::modules::auth::application::services::SessionStore;
use crate::modules::auth::application::use_cases::{
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    logout_admin::{ILogoutAdminUseCase, LogoutAdminUseCase},
};
use crate::modules::blog::domain::entities::Blog;
use crate::modules::contact::adapter::outgoing::{EmailJsDelivery, LogDelivery, SmtpDelivery};
use crate::modules::contact::application::ports::outgoing::EmailDelivery;
use crate::modules::contact::application::services::ContactService;
use crate::modules::content::adapter::incoming::web::dashboard_routes::configure_section;
use crate::modules::content::adapter::outgoing::HttpResourceGateway;
use crate::modules::content::application::services::SectionService;
use crate::modules::content::domain::Resource;
use crate::modules::experience::domain::entities::Experience;
use crate::modules::message::domain::entities::Message;
use crate::modules::overview::adapter::outgoing::HttpOverviewGateway;
use crate::modules::overview::application::ports::outgoing::OverviewGateway;
use crate::modules::project::domain::entities::Project;
use crate::modules::skill::domain::entities::Skill;
use crate::shared::http::ApiClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub sessions: SessionStore,
    pub blogs: SectionService<Blog>,
    pub projects: SectionService<Project>,
    pub skills: SectionService<Skill>,
    pub experiences: SectionService<Experience>,
    pub messages: SectionService<Message>,
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub logout_admin_use_case: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
    pub overview: Arc<dyn OverviewGateway + Send + Sync>,
    pub contact: ContactService,
    pub upstream: Arc<dyn UpstreamProbe + Send + Sync>,
}

fn section<R: Resource>(api: &ApiClient) -> SectionService<R> {
    SectionService::new(Arc::new(HttpResourceGateway::<R>::new(api.clone())))
}

fn email_delivery(settings: &EmailSettings) -> anyhow::Result<Arc<dyn EmailDelivery>> {
    let delivery: Arc<dyn EmailDelivery> = match settings {
        EmailSettings::EmailJs {
            endpoint,
            service_id,
            template_id,
            public_key,
        } => Arc::new(EmailJsDelivery::new(endpoint, service_id, template_id, public_key)),
        EmailSettings::Smtp {
            server,
            username,
            password,
            from,
            to,
        } => Arc::new(
            SmtpDelivery::new(server, username, password, from, to)
                .with_context(|| format!("SMTP transport for {}", server))?,
        ),
        EmailSettings::Log => {
            warn!("No email provider configured; contact messages are only logged");
            Arc::new(LogDelivery)
        }
    };
    Ok(delivery)
}

fn build_state(config: SiteConfig) -> anyhow::Result<AppState> {
    let api = ApiClient::new(&config.api_base_url).context("API_BASE_URL")?;
    let sessions = SessionStore::new(config.session_ttl);
    let auth_gateway: Arc<dyn AuthGateway> = Arc::new(HttpAuthGateway::new(api.clone()));

    let messages = section::<Message>(&api);
    let delivery = email_delivery(&config.email).context("email delivery")?;
    let contact = ContactService::new(delivery, messages.clone());

    Ok(AppState {
        login_admin_use_case: Arc::new(LoginAdminUseCase::new(
            Arc::clone(&auth_gateway),
            sessions.clone(),
        )),
        logout_admin_use_case: Arc::new(LogoutAdminUseCase::new(auth_gateway, sessions.clone())),
        blogs: section(&api),
        projects: section(&api),
        skills: section(&api),
        experiences: section(&api),
        messages,
        overview: Arc::new(HttpOverviewGateway::new(api.clone())),
        contact,
        upstream: Arc::new(api),
        sessions,
        config: Arc::new(config),
    })
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let server_url = config.server_url();
    info!("Server run on: {} (API at {})", server_url, config.api_base_url);

    let state = build_state(config).map_err(|e| {
        error!("Failed to build application state: {:#}", e);
        std::io::Error::other(format!("{:#}", e))
    })?;

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(crate::shared::api::custom_form_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Static assets
    cfg.service(crate::shared::view::assets::site_css);
    cfg.service(crate::shared::view::assets::not_found_image);
    // Public site
    cfg.configure(crate::modules::home::adapter::incoming::web::routes::configure);
    cfg.configure(crate::modules::blog::adapter::incoming::web::routes::configure);
    cfg.configure(crate::modules::contact::adapter::incoming::web::routes::configure);
    // Auth
    cfg.configure(crate::modules::auth::adapter::incoming::web::routes::configure);
    // Dashboard
    cfg.configure(crate::modules::overview::adapter::incoming::web::routes::configure);
    cfg.configure(configure_section::<Blog>);
    cfg.configure(configure_section::<Project>);
    cfg.configure(configure_section::<Skill>);
    cfg.configure(configure_section::<Experience>);
    cfg.configure(configure_section::<Message>);
    // Health
    cfg.configure(crate::health::configure);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
