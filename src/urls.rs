use crate::config::AppConfig;
use crate::errors::ApiError;
use url::Url;

/// Checks that the submitted destination is a well-formed http(s) URL on the
/// allowed domain (or one of its subdomains) and returns it in normalized
/// form.
pub fn validate_url(text: &str, config: &AppConfig) -> Result<String, ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::InvalidUrl("url must not be empty".into()));
    }
    if text.len() > config.max_url_length {
        return Err(ApiError::InvalidUrl(format!(
            "url exceeds {} characters",
            config.max_url_length
        )));
    }
    let url = Url::parse(text).map_err(|_| ApiError::InvalidUrl("malformed url".into()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidUrl(
            "only http and https urls are supported".into(),
        ));
    }
    let host = url
        .host_str()
        .ok_or_else(|| ApiError::InvalidUrl("url has no host".into()))?;
    if !is_allowed_host(host, &config.allowed_domain) {
        return Err(ApiError::InvalidUrl(format!(
            "url must point to {}",
            config.allowed_domain
        )));
    }
    Ok(url.to_string())
}

fn is_allowed_host(host: &str, domain: &str) -> bool {
    host == domain || host.ends_with(&format!(".{}", domain))
}
