// Demonstration settings.
// Holds the API base URL, client identity, and the literal demo arguments.

/// Public GitHub REST endpoint.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Placeholder token; the gist walkthrough is skipped while this is in place.
pub const TOKEN_PLACEHOLDER: &str = "YOUR_GITHUB_TOKEN";

/// Settings for one demonstration run.
#[derive(Debug, Clone)]
pub struct Config {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Sent as `User-Agent`; GitHub rejects requests without one.
    pub user_agent: String,
    pub demo_user: String,
    pub demo_language: String,
    /// Page size for the listing and search calls.
    pub repo_limit: u32,
    /// Personal access token with the `gist` scope.
    pub token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: GITHUB_API_BASE.to_string(),
            user_agent: concat!("github-verbs/", env!("CARGO_PKG_VERSION")).to_string(),
            demo_user: "octocat".to_string(),
            demo_language: "rust".to_string(),
            repo_limit: crate::facade::DEFAULT_LIMIT,
            token: TOKEN_PLACEHOLDER.to_string(),
        }
    }
}

impl Config {
    /// Whether a real token has been filled in.
    pub fn has_token(&self) -> bool {
        !self.token.is_empty() && self.token != TOKEN_PLACEHOLDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_github() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://api.github.com");
        assert!(config.user_agent.starts_with("github-verbs/"));
        assert_eq!(config.repo_limit, 5);
    }

    #[test]
    fn test_placeholder_token_is_not_a_token() {
        let mut config = Config::default();
        assert!(!config.has_token());

        config.token = String::new();
        assert!(!config.has_token());

        config.token = "ghp_example".to_string();
        assert!(config.has_token());
    }
}
