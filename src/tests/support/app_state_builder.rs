use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use crate::config::SiteConfig;
use crate::health::UpstreamProbe;
use crate::modules::auth::application::ports::outgoing::AuthGateway;
use crate::modules::auth::application::services::SessionStore;
use crate::modules::auth::application::use_cases::{
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    logout_admin::{ILogoutAdminUseCase, LogoutAdminUseCase},
};
use crate::modules::blog::domain::entities::Blog;
use crate::modules::contact::application::ports::outgoing::EmailDelivery;
use crate::modules::contact::application::services::ContactService;
use crate::modules::content::application::ports::outgoing::ResourceGateway;
use crate::modules::content::application::services::SectionService;
use crate::modules::experience::domain::entities::Experience;
use crate::modules::message::domain::entities::Message;
use crate::modules::overview::application::ports::outgoing::OverviewGateway;
use crate::modules::project::domain::entities::Project;
use crate::modules::skill::domain::entities::Skill;
use crate::tests::support::stubs::*;
use crate::AppState;

pub const TEST_API_BASE_URL: &str = "http://127.0.0.1:9/api";

pub struct TestAppStateBuilder {
    sessions: SessionStore,
    blogs: Arc<dyn ResourceGateway<Blog>>,
    projects: Arc<dyn ResourceGateway<Project>>,
    skills: Arc<dyn ResourceGateway<Skill>>,
    experiences: Arc<dyn ResourceGateway<Experience>>,
    messages: Arc<dyn ResourceGateway<Message>>,
    login_admin: Option<Arc<dyn ILoginAdminUseCase + Send + Sync>>,
    logout_admin: Option<Arc<dyn ILogoutAdminUseCase + Send + Sync>>,
    overview: Arc<dyn OverviewGateway + Send + Sync>,
    delivery: Arc<dyn EmailDelivery>,
    upstream: Arc<dyn UpstreamProbe + Send + Sync>,
}

pub fn test_config() -> SiteConfig {
    SiteConfig::from_lookup(|key| match key {
        "API_BASE_URL" => Some(TEST_API_BASE_URL.to_string()),
        "RUST_ENV" => Some("test".to_string()),
        _ => None,
    })
    .expect("test configuration is valid")
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            sessions: SessionStore::new(Duration::from_secs(3600)),
            blogs: StubGateway::<Blog>::empty(),
            projects: StubGateway::<Project>::empty(),
            skills: StubGateway::<Skill>::empty(),
            experiences: StubGateway::<Experience>::empty(),
            messages: StubGateway::<Message>::empty(),
            login_admin: None,
            logout_admin: None,
            overview: Arc::new(StubOverviewGateway),
            delivery: RecordingDelivery::working(),
            upstream: Arc::new(StubUpstream(true)),
        }
    }
}

impl TestAppStateBuilder {
    /// The store the built state will use, for opening sessions up front.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn with_blogs(mut self, gateway: Arc<dyn ResourceGateway<Blog>>) -> Self {
        self.blogs = gateway;
        self
    }

    pub fn with_projects(mut self, gateway: Arc<dyn ResourceGateway<Project>>) -> Self {
        self.projects = gateway;
        self
    }

    pub fn with_skills(mut self, gateway: Arc<dyn ResourceGateway<Skill>>) -> Self {
        self.skills = gateway;
        self
    }

    pub fn with_experiences(mut self, gateway: Arc<dyn ResourceGateway<Experience>>) -> Self {
        self.experiences = gateway;
        self
    }

    pub fn with_messages(mut self, gateway: Arc<dyn ResourceGateway<Message>>) -> Self {
        self.messages = gateway;
        self
    }

    pub fn with_login_admin(mut self, uc: Arc<dyn ILoginAdminUseCase + Send + Sync>) -> Self {
        self.login_admin = Some(uc);
        self
    }

    pub fn with_logout_admin(mut self, uc: Arc<dyn ILogoutAdminUseCase + Send + Sync>) -> Self {
        self.logout_admin = Some(uc);
        self
    }

    pub fn with_overview(mut self, gateway: Arc<dyn OverviewGateway + Send + Sync>) -> Self {
        self.overview = gateway;
        self
    }

    pub fn with_delivery(mut self, delivery: Arc<dyn EmailDelivery>) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn with_upstream(mut self, probe: Arc<dyn UpstreamProbe + Send + Sync>) -> Self {
        self.upstream = probe;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let auth: Arc<dyn AuthGateway> = Arc::new(StubAuthGateway);
        let messages = SectionService::new(self.messages);

        let login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync> = match self.login_admin {
            Some(uc) => uc,
            None => Arc::new(LoginAdminUseCase::new(Arc::clone(&auth), self.sessions.clone())),
        };
        let logout_admin_use_case: Arc<dyn ILogoutAdminUseCase + Send + Sync> = match self.logout_admin {
            Some(uc) => uc,
            None => Arc::new(LogoutAdminUseCase::new(auth, self.sessions.clone())),
        };

        web::Data::new(AppState {
            config: Arc::new(test_config()),
            sessions: self.sessions,
            blogs: SectionService::new(self.blogs),
            projects: SectionService::new(self.projects),
            skills: SectionService::new(self.skills),
            experiences: SectionService::new(self.experiences),
            contact: ContactService::new(self.delivery, messages.clone()),
            messages,
            login_admin_use_case,
            logout_admin_use_case,
            overview: self.overview,
            upstream: self.upstream,
        })
    }
}
