// src/config.rs
use std::str::FromStr;
use std::time::Duration;

use url::Url;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// How many entries each public section shows before "show all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLimits {
    pub projects: usize,
    pub experience: usize,
    pub home_blogs: usize,
    pub blog_index: usize,
}

impl Default for SectionLimits {
    fn default() -> Self {
        Self {
            projects: 3,
            experience: 3,
            home_blogs: 3,
            blog_index: 6,
        }
    }
}

/// Where contact-form emails go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailSettings {
    EmailJs {
        endpoint: String,
        service_id: String,
        template_id: String,
        public_key: String,
    },
    Smtp {
        server: String,
        username: String,
        password: String,
        from: String,
        to: String,
    },
    /// Only logs the message. Default outside production.
    Log,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub environment: String,
    pub session_ttl: Duration,
    pub limits: SectionLimits,
    pub email: EmailSettings,
}

impl SiteConfig {
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration out of any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = get("API_BASE_URL").ok_or(ConfigError::Missing("API_BASE_URL"))?;
        if let Err(e) = Url::parse(&api_base_url) {
            return Err(ConfigError::Invalid {
                key: "API_BASE_URL",
                value: api_base_url,
                reason: e.to_string(),
            });
        }

        let defaults = SectionLimits::default();
        let limits = SectionLimits {
            projects: parse_or(&get, "PREVIEW_PROJECTS", defaults.projects)?,
            experience: parse_or(&get, "PREVIEW_EXPERIENCE", defaults.experience)?,
            home_blogs: parse_or(&get, "PREVIEW_HOME_BLOGS", defaults.home_blogs)?,
            blog_index: parse_or(&get, "PREVIEW_BLOG_INDEX", defaults.blog_index)?,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&get, "PORT", 8080)?,
            api_base_url,
            environment: get("RUST_ENV").unwrap_or_else(|| "development".to_string()),
            session_ttl: Duration::from_secs(parse_or(&get, "SESSION_TTL_SECS", 86_400)?),
            limits,
            email: email_settings(&get)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn email_settings<G>(get: &G) -> Result<EmailSettings, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

    let provider = get("EMAIL_PROVIDER").unwrap_or_else(|| "log".to_string());
    match provider.trim().to_ascii_lowercase().as_str() {
        "emailjs" => Ok(EmailSettings::EmailJs {
            endpoint: get("EMAILJS_ENDPOINT").unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_string()),
            service_id: require("EMAILJS_SERVICE")?,
            template_id: require("EMAILJS_TEMPLATE")?,
            public_key: require("EMAILJS_PUBLIC")?,
        }),
        "smtp" => Ok(EmailSettings::Smtp {
            server: require("SMTP_SERVER")?,
            username: require("SMTP_USERNAME")?,
            password: require("SMTP_PASSWORD")?,
            from: require("EMAIL_FROM")?,
            to: require("EMAIL_TO")?,
        }),
        "log" => Ok(EmailSettings::Log),
        other => Err(ConfigError::Invalid {
            key: "EMAIL_PROVIDER",
            value: other.to_string(),
            reason: "expected emailjs, smtp or log".to_string(),
        }),
    }
}
