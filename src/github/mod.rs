// GitHub API module.
// Provides the HTTP client, typed endpoints, and response types.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use types::*;
