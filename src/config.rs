use std::env;
use std::str::FromStr;

/// Shared service configuration, collected once at startup and passed to
/// every component instead of being read from ambient globals.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub allowed_domain: String,
    pub short_code_length: usize,
    pub max_code_attempts: u32,
    pub max_url_length: usize,
    pub earnings_per_valid_click: f64,
    pub validation_delay_ms: u64,
    pub default_page_limit: i64,
    pub max_page_limit: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            allowed_domain: "fiverr.com".into(),
            short_code_length: 6,
            max_code_attempts: 5,
            max_url_length: 2048,
            earnings_per_valid_click: 0.05,
            validation_delay_ms: 500,
            default_page_limit: 10,
            max_page_limit: 100,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            allowed_domain: env::var("ALLOWED_DOMAIN").unwrap_or(defaults.allowed_domain),
            short_code_length: parse_env("SHORT_CODE_LENGTH", defaults.short_code_length),
            max_code_attempts: parse_env("MAX_CODE_ATTEMPTS", defaults.max_code_attempts),
            max_url_length: parse_env("MAX_URL_LENGTH", defaults.max_url_length),
            earnings_per_valid_click: parse_env(
                "EARNINGS_PER_VALID_CLICK",
                defaults.earnings_per_valid_click,
            ),
            validation_delay_ms: parse_env("VALIDATION_DELAY_MS", defaults.validation_delay_ms),
            default_page_limit: parse_env("DEFAULT_PAGE_LIMIT", defaults.default_page_limit),
            max_page_limit: parse_env("MAX_PAGE_LIMIT", defaults.max_page_limit),
        }
    }
}

pub fn get_env(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("Environment variable {} is required", name))
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
