// GitHub API response types.
// Raw response shapes and the smaller summaries projected from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User resource from `/users/{username}`, limited to the fields we project.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: DateTime<Utc>,
    pub html_url: String,
}

/// Profile summary printed and returned by `fetch_user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: DateTime<Utc>,
    pub url: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            login: user.login,
            name: user.name,
            bio: user.bio,
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
            created_at: user.created_at,
            url: user.html_url,
        }
    }
}

/// Repository resource as returned by listing and search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub html_url: String,
}

/// Repository entry in a per-user listing. `name` is the bare repo name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub url: String,
}

impl From<Repository> for RepoSummary {
    fn from(repo: Repository) -> Self {
        Self {
            name: repo.name,
            description: repo.description,
            language: repo.language,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            url: repo.html_url,
        }
    }
}

/// Repository entry in search results. `name` is `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub language: Option<String>,
    pub url: String,
}

impl From<Repository> for SearchRepoSummary {
    fn from(repo: Repository) -> Self {
        Self {
            name: repo.full_name,
            description: repo.description,
            stars: repo.stargazers_count,
            language: repo.language,
            url: repo.html_url,
        }
    }
}

/// Response wrapper for `/search/repositories`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub total_count: u64,
    pub items: Vec<Repository>,
}

/// Search output as printed: the count alongside the projected list.
#[derive(Debug, Serialize)]
pub struct SearchLog<'a> {
    pub total_count: u64,
    pub repositories: &'a [SearchRepoSummary],
}

/// Single file entry in a gist request body.
#[derive(Debug, Serialize)]
pub struct GistFile<'a> {
    pub content: &'a str,
}

/// Body for `POST /gists`. Only one file per gist.
#[derive(Debug, Serialize)]
pub struct NewGist<'a> {
    pub description: &'a str,
    pub public: bool,
    pub files: std::collections::BTreeMap<&'a str, GistFile<'a>>,
}

impl<'a> NewGist<'a> {
    /// A private gist holding a single file.
    pub fn private(description: &'a str, filename: &'a str, content: &'a str) -> Self {
        Self {
            description,
            public: false,
            files: [(filename, GistFile { content })].into_iter().collect(),
        }
    }
}

/// Body for `PATCH /gists/{id}`. Only the description is editable.
#[derive(Debug, Serialize)]
pub struct GistDescription<'a> {
    pub description: &'a str,
}

/// Printed summary of a newly created gist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistCreated {
    pub id: String,
    pub description: Option<String>,
    #[serde(rename(deserialize = "html_url"))]
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Printed summary of an updated gist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistUpdated {
    pub id: String,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}
