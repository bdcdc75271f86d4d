use url::Url;

/// Static inclusion rule for the pages the overlay attaches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationRule {
    host: Option<String>,
    path_prefix: String,
}

impl ActivationRule {
    /// Builds a rule matching pages under `path_prefix`, optionally pinned
    /// to a single host.
    pub fn new(host: Option<&str>, path_prefix: &str) -> Self {
        Self {
            host: host.map(ToOwned::to_owned),
            path_prefix: path_prefix.to_owned(),
        }
    }

    /// Returns true when `page_url` is a page the overlay should attach to.
    /// URLs that do not parse never match.
    pub fn matches(&self, page_url: &str) -> bool {
        let Ok(parsed) = Url::parse(page_url) else {
            return false;
        };
        if let Some(host) = &self.host {
            if parsed.host_str() != Some(host.as_str()) {
                return false;
            }
        }
        parsed.path().starts_with(&self.path_prefix)
    }
}
