// NDFC HTTP client
//
// Wraps `reqwest::Client` with NDFC-specific URL construction and bearer
// token handling. Endpoint operations (networks, auth) are implemented as
// inherent methods via separate files to keep this module focused on
// transport mechanics.

use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Prefix of every LAN-fabric top-down endpoint.
const LAN_FABRIC_PREFIX: &str = "/appcenter/cisco/ndfc/api/v1/lan-fabric/rest/top-down";

/// Raw HTTP client for the NDFC REST API.
///
/// Owns one persistent session (connection pool, fixed JSON headers, cookie
/// store) for the process lifetime. The bearer token is captured once from
/// a successful login and attached to every later request; deployments
/// that answer login with only a session cookie work through the cookie
/// store instead.
pub struct NdfcClient {
    http: reqwest::Client,
    base_url: Url,
    domain: String,
    /// Bearer token from the login response, if the controller issued one.
    token: RwLock<Option<String>>,
}

impl NdfcClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the controller root, e.g. `https://10.107.70.70`.
    /// `domain` is the login domain (usually `local`).
    pub fn new(
        base_url: Url,
        domain: impl Into<String>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            domain: domain.into(),
            token: RwLock::new(None),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Use this when you need full control over the transport (tests mock
    /// the controller this way).
    pub fn with_client(http: reqwest::Client, base_url: Url, domain: impl Into<String>) -> Self {
        Self {
            http,
            base_url,
            domain: domain.into(),
            token: RwLock::new(None),
        }
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The login domain.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Whether a bearer token was captured from the login response.
    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    // ── Token management ─────────────────────────────────────────────

    /// Store the bearer token captured from the login response.
    pub(crate) fn set_token(&self, token: String) {
        debug!("storing bearer token");
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    /// Attach the stored bearer token to a request builder, if present.
    pub(crate) fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let guard = self.token.read().expect("token lock poisoned");
        match guard.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a controller-level path (e.g. `/login`).
    pub(crate) fn root_url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}")).expect("invalid controller URL")
    }

    /// Build a full URL for a LAN-fabric top-down path.
    ///
    /// `{base}/appcenter/cisco/ndfc/api/v1/lan-fabric/rest/top-down/{path}`
    pub(crate) fn lan_fabric_url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{LAN_FABRIC_PREFIX}/{path}")).expect("invalid API URL")
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and deserialize a 200 response body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .apply_auth(self.http.get(url))
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::parse_body(resp).await
    }

    /// Send a POST request with a JSON body, returning the raw response.
    pub(crate) async fn post_raw(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<reqwest::Response, Error> {
        debug!("POST {}", url);

        self.apply_auth(self.http.post(url).json(body))
            .send()
            .await
            .map_err(Error::Transport)
    }

    /// Send a PUT request with a JSON body, returning the raw response.
    ///
    /// Callers own the status-code policy (update accepts 200/201/202).
    pub(crate) async fn put_raw(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<reqwest::Response, Error> {
        debug!("PUT {}", url);

        self.apply_auth(self.http.put(url).json(body))
            .send()
            .await
            .map_err(Error::Transport)
    }

    /// Deserialize a response body, mapping non-success statuses to
    /// `Error::Api` with a body excerpt.
    async fn parse_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body: excerpt(&body).to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", excerpt(&body)),
            body,
        })
    }
}

/// First ~200 bytes of a body, cut on a char boundary.
pub(crate) fn excerpt(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
