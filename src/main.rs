// github-verbs entry point.
// Runs GET, POST, PATCH and DELETE against the GitHub REST API, one call at a time.

mod config;
mod error;
mod facade;
mod github;
mod output;

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use github::GitHubClient;

/// Initialize tracing to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> error::Result<()> {
    init_tracing();

    let config = Config::default();
    let client = GitHubClient::new(&config)?;
    debug!(base_url = client.base_url(), "client ready");

    // Reads need no credentials.
    facade::fetch_user(&client, &config.demo_user).await;
    facade::list_user_repos(&client, &config.demo_user, config.repo_limit).await;
    facade::search_repos_by_language(&client, &config.demo_language, config.repo_limit).await;

    if !config.has_token() {
        output::note(&format!(
            "\nSkipping gist create/update/delete: replace {} with a token that has the gist scope.",
            config::TOKEN_PLACEHOLDER
        ));
        return Ok(());
    }

    let token = config.token.as_str();
    let Some(gist) = facade::create_gist(
        &client,
        token,
        "Created by github-verbs",
        "hello.txt",
        "Hello from a POST request.",
    )
    .await
    else {
        return Ok(());
    };

    if let Some(gist_id) = gist["id"].as_str() {
        facade::update_gist(&client, token, gist_id, "Updated by a PATCH request").await;
        facade::delete_gist(&client, token, gist_id).await;
    }

    Ok(())
}
