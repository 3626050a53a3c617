//! The Reddit client and builder.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use crate::actions::{ListingActions, PostActions};
use crate::error::{Error, Result};
use crate::request::encode_form;

/// Default base URL for authenticated API requests.
const DEFAULT_URL: &str = "https://oauth.reddit.com/";

/// Default user agent sent with every request.
const DEFAULT_USER_AGENT: &str = concat!("snoo/", env!("CARGO_PKG_VERSION"));

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The main client for interacting with the Reddit API.
///
/// Cloning is cheap and clones share the underlying connection pool, so a
/// single client can serve many concurrent tasks.
///
/// # Example
///
/// ```no_run
/// use snoo::RedditClient;
///
/// # async fn example() -> snoo::Result<()> {
/// let client = RedditClient::builder()
///     .access_token("my-oauth-token")
///     .build()?;
///
/// let things = client.listings().get(&["t3_15bfi0", "t5_2qh1i"]).await?;
/// println!("{} links, {} subreddits", things.links.len(), things.subreddits.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RedditClient {
    http_client: Client,
    base_url: Url,
    access_token: Option<String>,
}

impl RedditClient {
    /// Create a builder for client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The base URL endpoint paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Access listing operations.
    pub fn listings(&self) -> ListingActions<'_> {
        ListingActions { client: self }
    }

    /// Access post submission and management operations.
    pub fn posts(&self) -> PostActions<'_> {
        PostActions { client: self }
    }

    /// Issue a GET request and decode the JSON response.
    pub(crate) async fn get<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.request(Method::GET, path)?.query(query);
        let response = self.send(request).await?;
        decode(response).await
    }

    /// Issue a form-encoded POST request and decode the JSON response.
    pub(crate) async fn post_form<F, R>(&self, path: &str, form: &F) -> Result<R>
    where
        F: Serialize,
        R: DeserializeOwned,
    {
        let request = self.form_request(path, form)?;
        let response = self.send(request).await?;
        decode(response).await
    }

    /// Issue a form-encoded POST request whose response body is not needed.
    pub(crate) async fn post_form_void<F>(&self, path: &str, form: &F) -> Result<()>
    where
        F: Serialize,
    {
        let request = self.form_request(path, form)?;
        self.send(request).await?;
        Ok(())
    }

    fn form_request<F>(&self, path: &str, form: &F) -> Result<RequestBuilder>
    where
        F: Serialize,
    {
        let body = encode_form(form)?;
        Ok(self
            .request(Method::POST, path)?
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::Config(format!("invalid endpoint path {path:?}: {e}")))?;

        debug!(%method, %url, "building request");

        let mut request = self
            .http_client
            .request(method, url)
            .query(&[("raw_json", "1")]);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        Ok(request)
    }

    /// Send a request, turning non-success statuses into [`Error::Api`].
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "received response");

        if status.is_success() {
            return Ok(response);
        }

        let message = match response.text().await {
            Ok(body) if !body.trim().is_empty() => body,
            Ok(_) => fallback_message(status),
            Err(e) => {
                debug!(error = %e, "could not read error response body");
                fallback_message(status)
            }
        };
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Message for an error response whose body is empty or unreadable.
fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown status")
        .to_string()
}

/// Decode a JSON body, reporting shape mismatches as [`Error::Json`].
async fn decode<R: DeserializeOwned>(response: Response) -> Result<R> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

impl fmt::Debug for RedditClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedditClient")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Builder for creating a configured [`RedditClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use snoo::RedditClient;
///
/// # fn example() -> snoo::Result<()> {
/// let client = RedditClient::builder()
///     .access_token("my-oauth-token")
///     .user_agent("linux:my-bot:v0.1 (by /u/me)")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    access_token: Option<String>,
    user_agent: String,
    timeout: Duration,
    http_client: Option<Client>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            access_token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
        }
    }

    /// Set the API base URL.
    ///
    /// Defaults to `https://oauth.reddit.com/`. A trailing slash is added if
    /// missing so endpoint paths resolve beneath it.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the OAuth access token, sent as a bearer token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the user agent.
    ///
    /// Reddit asks for a descriptive, unique agent such as
    /// `<platform>:<app ID>:<version> (by /u/<username>)`.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Use a preconfigured HTTP client.
    ///
    /// The user agent and timeout set on this builder are ignored; configure
    /// them on `client` instead.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<RedditClient> {
        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {base_url:?}: {e}")))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(self.user_agent)
                .timeout(self.timeout)
                .build()?,
        };

        Ok(RedditClient {
            http_client,
            base_url,
            access_token: self.access_token,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
