// NDFC authentication
//
// Domain-based login. A 200 response is a successful authentication even
// when no token field is present: some deployments hand out only a session
// cookie, which the client's cookie store picks up automatically.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::{NdfcClient, excerpt};
use crate::error::Error;

impl NdfcClient {
    /// Authenticate with the controller using username/password.
    ///
    /// `POST /login` with `{userName, userPasswd, domain}`. On 200 the body
    /// is scanned for `token` (or the older `jwttoken`) and, if found, the
    /// value is attached as `Authorization: Bearer <token>` to all later
    /// requests. Any non-200 status is an authentication failure.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.root_url("/login");

        debug!(domain = self.domain(), "logging in at {}", url);

        let body = json!({
            "userName": username,
            "userPasswd": password.expose_secret(),
            "domain": self.domain(),
        });

        let resp = self.post_raw(url, &body).await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {}", excerpt(&body)),
            });
        }

        match resp.json::<serde_json::Value>().await {
            Ok(body) => {
                let token = body
                    .get("token")
                    .or_else(|| body.get("jwttoken"))
                    .and_then(serde_json::Value::as_str);
                if let Some(token) = token {
                    self.set_token(token.to_owned());
                } else {
                    debug!("no token in login response; relying on session cookies");
                }
            }
            // Status already decided the verdict; an unparseable body only
            // means we fall back to cookie-based session state.
            Err(e) => debug!("login response body not JSON ({e}); relying on session cookies"),
        }

        debug!("login successful");
        Ok(())
    }
}
