use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Toml {
        path: String,
        source: basic_toml::Error,
    },
    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DobbieSettings {
    pub application: ApplicationSettings,
    pub mobile_app: MobileAppSettings,
    pub linkedin: LinkedInSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub cors_origins: String,
}

/// Where the mobile app listens for the OAuth result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileAppSettings {
    /// Custom URI scheme registered by the app (e.g. `dobbie`)
    pub scheme: String,
    /// Authority and path after `://`
    pub callback_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedInSettings {
    // Direct values (can be overridden by environment variables)
    pub client_id: Option<String>,
    pub client_secret: Option<String>,

    // Environment variable names for overrides
    pub client_id_env: Option<String>,
    pub client_secret_env: Option<String>,

    pub token_endpoint: String,
    pub userinfo_endpoint: String,

    /// Upper bound for each provider call
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: "http://localhost:3000,http://localhost:8080".to_string(),
        }
    }
}

impl Default for MobileAppSettings {
    fn default() -> Self {
        Self {
            scheme: "dobbie".to_string(),
            callback_path: "linkedin/callback".to_string(),
        }
    }
}

impl Default for LinkedInSettings {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            client_id_env: Some("LINKEDIN_CLIENT_ID".to_string()),
            client_secret_env: Some("LINKEDIN_CLIENT_SECRET".to_string()),
            token_endpoint: "https://www.linkedin.com/oauth/v2/accessToken".to_string(),
            userinfo_endpoint: "https://api.linkedin.com/v2/userinfo".to_string(),
            request_timeout_seconds: 10,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl DobbieSettings {
    /// Load settings from configuration files and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A settings file cannot be read or parsed
    /// - Logger initialization fails
    pub fn load() -> Result<Self, SettingsError> {
        dotenv::dotenv().ok();

        let mut settings = Self::load_base_settings()?;
        Self::apply_env_overrides(&mut settings);

        settings.init_logging()?;
        Ok(settings)
    }

    /// Initialize `env_logger`, preferring `RUST_LOG` over the configured level
    fn init_logging(&self) -> Result<(), SettingsError> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.logging.level.as_str()),
        )
        .try_init()?;
        Ok(())
    }

    /// Load base settings from TOML file(s) or use defaults
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables (applied separately after loading base settings)
    /// 2. Settings.toml in `DOBBIE_SECRETS_DIR` (if specified and exists)
    /// 3. Settings.toml in current directory (if exists)
    /// 4. Default settings
    fn load_base_settings() -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        let default_config_path = Path::new("Settings.toml");
        if default_config_path.exists() {
            settings = Self::from_file(default_config_path)?;
            println!(
                "✓ Loaded base settings from {}",
                default_config_path.display()
            );
        }

        if let Ok(secrets_dir) = std::env::var("DOBBIE_SECRETS_DIR") {
            let secrets_path = Path::new(&secrets_dir).join("Settings.toml");
            if secrets_path.exists() {
                settings = Self::from_file(&secrets_path)?;
                println!("✓ Overriding settings from {}", secrets_path.display());
            } else {
                println!(
                    "ℹ DOBBIE_SECRETS_DIR set but no Settings.toml found at: {}",
                    secrets_path.display()
                );
            }
        }

        Ok(settings)
    }

    /// Parse a single TOML settings file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        basic_toml::from_str(&content).map_err(|source| SettingsError::Toml {
            path: path.display().to_string(),
            source,
        })
    }

    /// Apply environment variable overrides to settings
    pub fn apply_env_overrides(settings: &mut Self) {
        Self::apply_application_env_overrides(&mut settings.application);
        Self::apply_mobile_app_env_overrides(&mut settings.mobile_app);
        Self::apply_linkedin_env_overrides(&mut settings.linkedin);
        Self::apply_logging_env_overrides(&mut settings.logging);
    }

    fn apply_application_env_overrides(app_settings: &mut ApplicationSettings) {
        if let Ok(host) = std::env::var("HOST") {
            app_settings.host = host;
        }
        if let Ok(port_str) = std::env::var("PORT") {
            if let Ok(port) = port_str.parse::<u16>() {
                app_settings.port = port;
            }
        }
        if let Ok(cors_origins) = std::env::var("CORS_ORIGINS") {
            app_settings.cors_origins = cors_origins;
        }
    }

    fn apply_mobile_app_env_overrides(mobile_settings: &mut MobileAppSettings) {
        if let Ok(scheme) = std::env::var("MOBILE_APP_SCHEME") {
            mobile_settings.scheme = scheme;
        }
    }

    /// Client credentials are resolved later through [`LinkedInSettings::get_client_id`]
    /// and [`LinkedInSettings::get_client_secret`].
    pub fn apply_linkedin_env_overrides(linkedin_settings: &mut LinkedInSettings) {
        if let Ok(token_endpoint) = std::env::var("LINKEDIN_TOKEN_ENDPOINT") {
            linkedin_settings.token_endpoint = token_endpoint;
        }
        if let Ok(userinfo_endpoint) = std::env::var("LINKEDIN_USERINFO_ENDPOINT") {
            linkedin_settings.userinfo_endpoint = userinfo_endpoint;
        }
        if let Ok(timeout_str) = std::env::var("LINKEDIN_TIMEOUT_SECONDS") {
            if let Ok(timeout) = timeout_str.parse::<u64>() {
                linkedin_settings.request_timeout_seconds = timeout;
            }
        }
    }

    fn apply_logging_env_overrides(logging_settings: &mut LoggingSettings) {
        if let Ok(log_level) = std::env::var("RUST_LOG") {
            logging_settings.level = log_level;
        }
    }

    /// Get the bind address for the server
    #[must_use]
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }

    /// Get CORS origins as a vector of strings
    #[must_use]
    pub fn get_cors_origins(&self) -> Vec<String> {
        self.application
            .cors_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl MobileAppSettings {
    /// Base URL the callback redirects to, without query
    #[must_use]
    pub fn callback_base_url(&self) -> String {
        format!(
            "{}://{}",
            self.scheme,
            self.callback_path.trim_start_matches('/')
        )
    }
}

impl LinkedInSettings {
    /// Get the client ID, checking environment variable first, then falling back to direct value
    #[must_use]
    pub fn get_client_id(&self) -> Option<String> {
        Self::resolve(self.client_id_env.as_deref(), self.client_id.as_ref())
    }

    /// Get the client secret, checking environment variable first, then falling back to direct value
    #[must_use]
    pub fn get_client_secret(&self) -> Option<String> {
        Self::resolve(self.client_secret_env.as_deref(), self.client_secret.as_ref())
    }

    fn resolve(env_var: Option<&str>, direct: Option<&String>) -> Option<String> {
        if let Some(env_var) = env_var {
            if let Ok(value) = std::env::var(env_var) {
                if !value.trim().is_empty() {
                    return Some(value);
                }
            }
        }
        direct.filter(|v| !v.trim().is_empty()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clean_env_vars() {
        for var in [
            "HOST",
            "PORT",
            "CORS_ORIGINS",
            "MOBILE_APP_SCHEME",
            "LINKEDIN_CLIENT_ID",
            "LINKEDIN_CLIENT_SECRET",
            "LINKEDIN_TOKEN_ENDPOINT",
            "LINKEDIN_USERINFO_ENDPOINT",
            "LINKEDIN_TIMEOUT_SECONDS",
            "DOBBIE_SECRETS_DIR",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults() {
        let settings = DobbieSettings::default();
        assert_eq!(settings.get_bind_address(), "0.0.0.0:8080");
        assert_eq!(
            settings.mobile_app.callback_base_url(),
            "dobbie://linkedin/callback"
        );
        assert_eq!(
            settings.linkedin.token_endpoint,
            "https://www.linkedin.com/oauth/v2/accessToken"
        );
        assert_eq!(
            settings.linkedin.userinfo_endpoint,
            "https://api.linkedin.com/v2/userinfo"
        );
        assert_eq!(settings.linkedin.request_timeout_seconds, 10);
    }

    #[test]
    #[serial]
    fn test_client_credentials_env_override() {
        clean_env_vars();

        let linkedin = LinkedInSettings {
            client_id: Some("toml-id".to_string()),
            client_secret: Some("toml-secret".to_string()),
            ..Default::default()
        };
        assert_eq!(linkedin.get_client_id(), Some("toml-id".to_string()));

        std::env::set_var("LINKEDIN_CLIENT_ID", "env-id");
        std::env::set_var("LINKEDIN_CLIENT_SECRET", "env-secret");
        assert_eq!(linkedin.get_client_id(), Some("env-id".to_string()));
        assert_eq!(linkedin.get_client_secret(), Some("env-secret".to_string()));

        clean_env_vars();
    }

    #[test]
    #[serial]
    fn test_blank_credentials_are_missing() {
        clean_env_vars();

        let linkedin = LinkedInSettings {
            client_id: Some("   ".to_string()),
            client_secret: None,
            ..Default::default()
        };
        assert_eq!(linkedin.get_client_id(), None);
        assert_eq!(linkedin.get_client_secret(), None);
    }

    #[test]
    #[serial]
    fn test_linkedin_env_overrides() {
        clean_env_vars();

        let mut linkedin = LinkedInSettings::default();
        std::env::set_var("LINKEDIN_TOKEN_ENDPOINT", "http://127.0.0.1:9000/token");
        std::env::set_var("LINKEDIN_TIMEOUT_SECONDS", "3");
        DobbieSettings::apply_linkedin_env_overrides(&mut linkedin);

        assert_eq!(linkedin.token_endpoint, "http://127.0.0.1:9000/token");
        assert_eq!(linkedin.request_timeout_seconds, 3);
        // Untouched
        assert_eq!(
            linkedin.userinfo_endpoint,
            "https://api.linkedin.com/v2/userinfo"
        );

        clean_env_vars();
    }

    #[test]
    #[serial]
    fn test_application_env_overrides() {
        clean_env_vars();

        let mut settings = DobbieSettings::default();
        std::env::set_var("PORT", "9090");
        std::env::set_var("MOBILE_APP_SCHEME", "dobbie-dev");
        DobbieSettings::apply_env_overrides(&mut settings);

        assert_eq!(settings.application.port, 9090);
        assert_eq!(
            settings.mobile_app.callback_base_url(),
            "dobbie-dev://linkedin/callback"
        );

        std::env::set_var("PORT", "not-a-port");
        DobbieSettings::apply_env_overrides(&mut settings);
        assert_eq!(settings.application.port, 9090);

        clean_env_vars();
    }

    #[test]
    fn test_partial_toml_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[linkedin]\nclient_id = \"abc\"\nclient_secret = \"shh\"\n\n[mobile_app]\nscheme = \"myapp\""
        )
        .unwrap();

        let settings = DobbieSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.linkedin.client_id, Some("abc".to_string()));
        assert_eq!(settings.mobile_app.scheme, "myapp");
        assert_eq!(settings.mobile_app.callback_path, "linkedin/callback");
        assert_eq!(settings.application.port, 8080);
        assert_eq!(settings.linkedin.request_timeout_seconds, 10);
    }

    #[test]
    fn test_invalid_toml_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[linkedin\nclient_id = ").unwrap();

        let err = DobbieSettings::from_file(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Toml { .. }));
    }

    #[test]
    fn test_cors_origins_split() {
        let mut settings = DobbieSettings::default();
        settings.application.cors_origins = " https://a.example , https://b.example,".to_string();
        assert_eq!(
            settings.get_cors_origins(),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }
}
