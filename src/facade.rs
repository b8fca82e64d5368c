// Demonstration operations, one per HTTP verb walkthrough.
// Each call prints its result and turns any failure into None or false.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::github::{
    GistCreated, GistUpdated, GitHubClient, RepoSummary, SearchLog, SearchRepoSummary, UserSummary,
};
use crate::output;

/// Default page size for listing and search.
pub const DEFAULT_LIMIT: u32 = 5;

/// Report a failure and swallow it.
fn settle<T>(context: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(operation = context, status = ?e.status(), error = ?e, "request failed");
            output::failure(context, &e);
            None
        }
    }
}

/// Print a typed summary of a raw body. A body that does not fit the
/// summary is reported, but the write it describes has already happened.
fn show_summary<S: DeserializeOwned + Serialize>(title: &str, context: &str, raw: &Value) {
    let summary: Result<S> = serde_json::from_value(raw.clone()).map_err(Into::into);
    if let Some(summary) = settle(context, summary) {
        output::section(title, &summary);
    }
}

/// GET a user's profile summary.
pub async fn fetch_user(client: &GitHubClient, username: &str) -> Option<UserSummary> {
    let user = settle(
        &format!("fetching user {}", username),
        client.get_user(username).await,
    )?;
    output::section(&format!("GET /users/{}", username), &user);
    Some(user)
}

/// GET one page of a user's repositories in the server's `updated` order.
pub async fn list_user_repos(
    client: &GitHubClient,
    username: &str,
    limit: u32,
) -> Option<Vec<RepoSummary>> {
    let repos = settle(
        &format!("listing repositories for {}", username),
        client.get_user_repos(username, limit).await,
    )?;
    output::section(&format!("GET /users/{}/repos", username), &repos);
    Some(repos)
}

/// GET the most starred repositories for a language.
///
/// The printed block carries `total_count`, but only the repository list is
/// returned. Callers that need the count should use
/// [`GitHubClient::search_repositories`] directly.
pub async fn search_repos_by_language(
    client: &GitHubClient,
    language: &str,
    limit: u32,
) -> Option<Vec<SearchRepoSummary>> {
    let (repositories, total_count) = settle(
        &format!("searching {} repositories", language),
        client.search_repositories(language, limit).await,
    )?;
    let log = SearchLog {
        total_count,
        repositories: &repositories,
    };
    output::section(&format!("GET /search/repositories (language:{})", language), &log);
    Some(repositories)
}

/// POST a private single-file gist. Returns the full server response, even
/// when the printed summary cannot be built from it.
pub async fn create_gist(
    client: &GitHubClient,
    token: &str,
    description: &str,
    filename: &str,
    content: &str,
) -> Option<Value> {
    let raw = settle(
        "creating gist",
        client.create_gist(token, description, filename, content).await,
    )?;
    show_summary::<GistCreated>("POST /gists", "reading created gist", &raw);
    Some(raw)
}

/// PATCH a gist's description. Returns the full server response.
pub async fn update_gist(
    client: &GitHubClient,
    token: &str,
    gist_id: &str,
    new_description: &str,
) -> Option<Value> {
    let raw = settle(
        &format!("updating gist {}", gist_id),
        client.update_gist(token, gist_id, new_description).await,
    )?;
    show_summary::<GistUpdated>(
        &format!("PATCH /gists/{}", gist_id),
        "reading updated gist",
        &raw,
    );
    Some(raw)
}

/// DELETE a gist. True only when the server answers 204 No Content.
pub async fn delete_gist(client: &GitHubClient, token: &str, gist_id: &str) -> bool {
    let deleted = settle(
        &format!("deleting gist {}", gist_id),
        client.delete_gist(token, gist_id).await,
    )
    .is_some();
    if deleted {
        output::status(&format!("DELETE /gists/{}: deleted", gist_id));
    }
    deleted
}
