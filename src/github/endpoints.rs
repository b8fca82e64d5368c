// GitHub API endpoint functions.
// Typed methods for the user, repository, search, and gist REST calls.

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::Result;

use super::client::{Expect, GitHubClient, read_json};
use super::types::{
    GistDescription, NewGist, RepoSummary, Repository, SearchRepoSummary, SearchResponse, User,
    UserSummary,
};

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&self, username: &str) -> Result<UserSummary> {
        let response = self.get(&format!("/users/{}", username)).await?;
        let user: User = read_json(response).await?;
        Ok(user.into())
    }

    /// Get one page of a user's repositories, most recently updated first.
    pub async fn get_user_repos(&self, username: &str, per_page: u32) -> Result<Vec<RepoSummary>> {
        let params = [("per_page", per_page.to_string()), ("sort", "updated".to_string())];
        let response = self
            .get_with_params(&format!("/users/{}/repos", username), &params)
            .await?;
        let repos: Vec<Repository> = read_json(response).await?;
        Ok(repos.into_iter().map(RepoSummary::from).collect())
    }

    /// Search repositories written in `language`, most starred first.
    pub async fn search_repositories(
        &self,
        language: &str,
        per_page: u32,
    ) -> Result<(Vec<SearchRepoSummary>, u64)> {
        let params = [
            ("q", format!("language:{}", language)),
            ("sort", "stars".to_string()),
            ("per_page", per_page.to_string()),
        ];
        let response = self
            .get_with_params("/search/repositories", &params)
            .await?;
        let wrapper: SearchResponse = read_json(response).await?;
        let items = wrapper
            .items
            .into_iter()
            .map(SearchRepoSummary::from)
            .collect();
        Ok((items, wrapper.total_count))
    }

    /// Create a private single-file gist. Returns the raw response body.
    pub async fn create_gist(
        &self,
        token: &str,
        description: &str,
        filename: &str,
        content: &str,
    ) -> Result<Value> {
        let body = NewGist::private(description, filename, content);
        let response = self.post_json("/gists", token, &body).await?;
        read_json(response).await
    }

    /// Replace a gist's description. Returns the raw response body.
    pub async fn update_gist(&self, token: &str, gist_id: &str, description: &str) -> Result<Value> {
        let body = GistDescription { description };
        let response = self
            .patch_json(&format!("/gists/{}", gist_id), token, &body)
            .await?;
        read_json(response).await
    }

    /// Delete a gist. Only 204 No Content counts as deleted.
    pub async fn delete_gist(&self, token: &str, gist_id: &str) -> Result<()> {
        self.delete(
            &format!("/gists/{}", gist_id),
            token,
            Expect::Exactly(StatusCode::NO_CONTENT),
        )
        .await?;
        Ok(())
    }
}
