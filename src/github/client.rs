// GitHub API HTTP client.
// Handles default headers, per-request token auth, and status checking.

use reqwest::{
    Client, Method, RequestBuilder, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, VerbsError};

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Which response statuses count as success for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Any 2xx status.
    Success,
    /// Exactly this status; other 2xx codes are failures.
    Exactly(StatusCode),
}

impl Expect {
    fn accepts(self, status: StatusCode) -> bool {
        match self {
            Expect::Success => status.is_success(),
            Expect::Exactly(code) => status == code,
        }
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: Option<u64>,
    pub remaining: Option<u64>,
    pub reset: Option<u64>,
}

impl RateLimit {
    fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        Self {
            limit: read("x-ratelimit-limit"),
            remaining: read("x-ratelimit-remaining"),
            reset: read("x-ratelimit-reset"),
        }
    }

    fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    fn reset_at(&self) -> String {
        self.reset
            .and_then(|reset| chrono::DateTime::from_timestamp(reset as i64, 0))
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// GitHub API client. Reads are anonymous; writes carry a token per request.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client for the API root named in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| VerbsError::InvalidHeader(e.to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(VerbsError::Api)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request to the GitHub API.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let request = self.request(Method::GET, endpoint);
        self.send(Method::GET, endpoint, request, Expect::Success)
            .await
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let request = self.request(Method::GET, endpoint).query(params);
        self.send(Method::GET, endpoint, request, Expect::Success)
            .await
    }

    /// Make an authenticated POST with a JSON body.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        token: &str,
        body: &B,
    ) -> Result<Response> {
        let request = authorize(self.request(Method::POST, endpoint), token)?.json(body);
        self.send(Method::POST, endpoint, request, Expect::Success)
            .await
    }

    /// Make an authenticated PATCH with a JSON body.
    pub async fn patch_json<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        token: &str,
        body: &B,
    ) -> Result<Response> {
        let request = authorize(self.request(Method::PATCH, endpoint), token)?.json(body);
        self.send(Method::PATCH, endpoint, request, Expect::Success)
            .await
    }

    /// Make an authenticated DELETE without a body.
    pub async fn delete(&self, endpoint: &str, token: &str, expect: Expect) -> Result<Response> {
        let request = authorize(self.request(Method::DELETE, endpoint), token)?;
        self.send(Method::DELETE, endpoint, request, expect).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        self.client.request(method, self.url(endpoint))
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        request: RequestBuilder,
        expect: Expect,
    ) -> Result<Response> {
        debug!(%method, url = %self.url(endpoint), "sending request");
        let response = request.send().await.map_err(VerbsError::Api)?;

        let rate_limit = RateLimit::from_headers(response.headers());
        debug!(
            %method,
            url = %response.url(),
            status = %response.status(),
            limit = ?rate_limit.limit,
            remaining = ?rate_limit.remaining,
            "received response"
        );

        check_response(response, expect, &rate_limit).await
    }
}

/// Attach `Authorization: token <token>` to a request.
fn authorize(request: RequestBuilder, token: &str) -> Result<RequestBuilder> {
    let mut value = HeaderValue::from_str(&format!("token {}", token))
        .map_err(|e| VerbsError::InvalidHeader(e.to_string()))?;
    value.set_sensitive(true);
    Ok(request.header(AUTHORIZATION, value))
}

/// Check response status and convert errors.
async fn check_response(
    response: Response,
    expect: Expect,
    rate_limit: &RateLimit,
) -> Result<Response> {
    let status = response.status();
    if expect.accepts(status) {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(VerbsError::Unauthorized),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(VerbsError::NotFound(url))
        }
        StatusCode::FORBIDDEN if rate_limit.is_exhausted() => Err(VerbsError::RateLimited {
            reset_at: rate_limit.reset_at(),
        }),
        status => Err(VerbsError::UnexpectedStatus {
            status,
            body: response.text().await.unwrap_or_default(),
        }),
    }
}

/// Read the whole body and decode it as JSON.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};

    pub(crate) fn client_for(server: &ServerGuard) -> GitHubClient {
        let config = Config {
            base_url: server.url(),
            ..Config::default()
        };
        GitHubClient::new(&config).unwrap()
    }

    #[test]
    fn test_expect_accepts() {
        assert!(Expect::Success.accepts(StatusCode::OK));
        assert!(Expect::Success.accepts(StatusCode::NO_CONTENT));
        assert!(!Expect::Success.accepts(StatusCode::NOT_FOUND));

        let exact = Expect::Exactly(StatusCode::NO_CONTENT);
        assert!(exact.accepts(StatusCode::NO_CONTENT));
        assert!(!exact.accepts(StatusCode::OK));
        assert!(!exact.accepts(StatusCode::ACCEPTED));
    }

    #[test]
    fn test_rate_limit_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("60"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("0"));

        let rate_limit = RateLimit::from_headers(&headers);
        assert_eq!(rate_limit.limit, Some(60));
        assert!(rate_limit.is_exhausted());
        assert_eq!(rate_limit.reset_at(), "00:00:00");

        let empty = RateLimit::from_headers(&HeaderMap::new());
        assert!(!empty.is_exhausted());
        assert_eq!(empty.reset_at(), "unknown");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config {
            base_url: "http://localhost:9000/".to_string(),
            ..Config::default()
        };
        let client = GitHubClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(client.url("/users/octocat"), "http://localhost:9000/users/octocat");
    }

    #[tokio::test]
    async fn test_default_headers_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/rate_limit")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", GITHUB_API_VERSION)
            .match_header("user-agent", Matcher::Regex("^github-verbs/".to_string()))
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server);
        let response = client.get("/rate_limit").await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_token_header_on_writes() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/gists")
            .match_header("authorization", "token secret")
            .match_body(Matcher::Json(serde_json::json!({"k": "v"})))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server);
        let body = serde_json::json!({"k": "v"});
        client.post_json("/gists", "secret", &body).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_status_classification() {
        let mut server = Server::new_async().await;
        let _unauthorized = server
            .mock("GET", "/a")
            .with_status(401)
            .create_async()
            .await;
        let _missing = server
            .mock("GET", "/b")
            .with_status(404)
            .create_async()
            .await;
        let _limited = server
            .mock("GET", "/c")
            .with_status(403)
            .with_header("x-ratelimit-remaining", "0")
            .with_header("x-ratelimit-reset", "0")
            .create_async()
            .await;
        let _forbidden = server
            .mock("GET", "/d")
            .with_status(403)
            .with_body("nope")
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.get("/a").await,
            Err(VerbsError::Unauthorized)
        ));
        match client.get("/b").await {
            Err(VerbsError::NotFound(url)) => assert!(url.ends_with("/b")),
            other => panic!("expected NotFound, got {:?}", other),
        }
        match client.get("/c").await {
            Err(VerbsError::RateLimited { reset_at }) => assert_eq!(reset_at, "00:00:00"),
            other => panic!("expected RateLimited, got {:?}", other),
        }
        match client.get("/d").await {
            Err(VerbsError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(body, "nope");
            }
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_exact_expectation_rejects_other_success() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("DELETE", "/gists/1")
            .with_status(200)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client
            .delete("/gists/1", "t", Expect::Exactly(StatusCode::NO_CONTENT))
            .await;
        assert!(matches!(
            result,
            Err(VerbsError::UnexpectedStatus { status: StatusCode::OK, .. })
        ));
    }

    #[tokio::test]
    async fn test_read_json_rejects_malformed_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/broken")
            .with_status(200)
            .with_body("{not json")
            .create_async()
            .await;

        let client = client_for(&server);
        let response = client.get("/broken").await.unwrap();
        let result: Result<serde_json::Value> = read_json(response).await;
        assert!(matches!(result, Err(VerbsError::Json(_))));
    }
}
