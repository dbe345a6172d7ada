use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use url::Url;

pub const DEFAULT_RECRUITEE_API_BASE: &str = "https://api.recruitee.com";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the adapter, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub recruitee: RecruiteeConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let api_base = env::var("RECRUITEE_API_BASE")
            .unwrap_or_else(|_| DEFAULT_RECRUITEE_API_BASE.to_string());
        let recruitee = RecruiteeConfig::new(
            &api_base,
            env::var("RECRUITEE_COMPANY_ID").unwrap_or_default(),
            env::var("RECRUITEE_API_TOKEN").unwrap_or_default(),
        )?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            recruitee,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Tenant credentials for the Recruitee API.
///
/// Neither the company id nor the token is validated here: an empty value
/// simply produces requests the vendor rejects, which surface as vendor errors.
#[derive(Clone)]
pub struct RecruiteeConfig {
    pub api_base: Url,
    pub company_id: String,
    pub api_token: String,
}

impl RecruiteeConfig {
    pub fn new(
        api_base: &str,
        company_id: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let parsed = Url::parse(api_base.trim()).map_err(|source| ConfigError::InvalidApiBase {
            value: api_base.to_string(),
            source: Some(source),
        })?;

        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiBase {
                value: api_base.to_string(),
                source: None,
            });
        }

        Ok(Self {
            api_base: parsed,
            company_id: company_id.into(),
            api_token: api_token.into(),
        })
    }

    /// Tenant-scoped root every vendor endpoint hangs off: `{api_base}/c/{company_id}`.
    pub fn tenant_base_url(&self) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("c").push(&self.company_id);
        }
        url
    }

    pub fn has_credentials(&self) -> bool {
        !self.company_id.trim().is_empty() && !self.api_token.trim().is_empty()
    }
}

impl fmt::Debug for RecruiteeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecruiteeConfig")
            .field("api_base", &self.api_base.as_str())
            .field("company_id", &self.company_id)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidApiBase {
        value: String,
        source: Option<url::ParseError>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidApiBase { value, .. } => {
                write!(f, "RECRUITEE_API_BASE must be an absolute URL, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidApiBase { source, .. } => source.as_ref().map(|err| err as _),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("RECRUITEE_API_BASE");
        env::remove_var("RECRUITEE_COMPANY_ID");
        env::remove_var("RECRUITEE_API_TOKEN");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.recruitee.api_base.as_str(), "https://api.recruitee.com/");
        assert!(config.recruitee.company_id.is_empty());
        assert!(!config.recruitee.has_credentials());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn reads_recruitee_credentials() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RECRUITEE_COMPANY_ID", "acme");
        env::set_var("RECRUITEE_API_TOKEN", "secret-token");
        let config = AppConfig::load().expect("config loads");
        assert!(config.recruitee.has_credentials());
        assert_eq!(
            config.recruitee.tenant_base_url().as_str(),
            "https://api.recruitee.com/c/acme"
        );
        assert!(!format!("{:?}", config.recruitee).contains("secret-token"));
        reset_env();
    }

    #[test]
    fn rejects_relative_api_base() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RECRUITEE_API_BASE", "api.recruitee.com");
        let err = AppConfig::load().expect_err("relative base is rejected");
        assert!(matches!(err, ConfigError::InvalidApiBase { .. }));
        reset_env();
    }

    #[test]
    fn tenant_base_url_keeps_api_base_path() {
        let config =
            RecruiteeConfig::new("http://127.0.0.1:9000/proxy/", "acme", "t").expect("valid");
        assert_eq!(
            config.tenant_base_url().as_str(),
            "http://127.0.0.1:9000/proxy/c/acme"
        );
    }
}
