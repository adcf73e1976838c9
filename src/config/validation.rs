use crate::ConfigError;
use url::Url;

/// Parses and validates an article base URL
///
/// The base must be absolute, http(s), carry a host, and end with a slash
/// so titles can be appended to it directly.
pub(crate) fn parse_article_base(base: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(base).map_err(|e| ConfigError::InvalidArticleBase {
        url: base.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "article base must be http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::Validation(
            "article base has no host".to_string(),
        ));
    }

    if !url.path().ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "article base must end with '/', got '{}'",
            base
        )));
    }

    Ok(url)
}
