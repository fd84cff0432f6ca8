use crate::error::ConfigError;

/// Application configuration for the classifier client and batch runner.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub model: String,
    /// Timeout for URL-subject analysis calls (the responder renders the
    /// page, so these are slow).
    pub url_timeout_secs: u64,
    /// Timeout for text-subject analysis and lookup calls.
    pub text_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .field("url_timeout_secs", &self.url_timeout_secs)
            .field("text_timeout_secs", &self.text_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// The parsing/validation logic is decoupled from the actual environment
/// so tests can drive it with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    Ok(AppConfig {
        api_key: require("LEADQUAL_API_KEY")?,
        api_base_url: or_default(
            "LEADQUAL_API_BASE_URL",
            "https://generativelanguage.googleapis.com",
        ),
        model: or_default("LEADQUAL_MODEL", "gemini-1.5-flash-latest"),
        url_timeout_secs: parse_u64("LEADQUAL_URL_TIMEOUT_SECS", "90")?,
        text_timeout_secs: parse_u64("LEADQUAL_TEXT_TIMEOUT_SECS", "30")?,
        user_agent: or_default("LEADQUAL_USER_AGENT", "leadqual/0.1"),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
