use crate::error::{AuthError, FetchError};
use crate::parse;
use caguard_types::Policy;
use serde::Deserialize;

const DEFAULT_LOGIN_BASE: &str = "https://login.microsoftonline.com";
const DEFAULT_GRAPH_BASE: &str = "https://graph.microsoft.com/v1.0";

/// App registration credentials for the client-credentials handshake.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Authenticated session handle, threaded explicitly through fetch calls.
///
/// Acquired once per run and released through [`GraphClient::sign_out`]
/// regardless of how the run ends. The token never appears in `Debug`
/// output.
pub struct Session {
    access_token: String,
}

impl Session {
    pub(crate) fn bearer(&self) -> &str {
        &self.access_token
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

/// Blocking client for the directory-service boundary.
pub struct GraphClient {
    http: reqwest::blocking::Client,
    login_base: String,
    graph_base: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct TokenErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    error_description: String,
}

impl Default for GraphClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphClient {
    pub fn new() -> Self {
        Self::with_base_urls(DEFAULT_LOGIN_BASE, DEFAULT_GRAPH_BASE)
    }

    /// Override endpoints; used by tests pointing at a local server.
    pub fn with_base_urls(login_base: &str, graph_base: &str) -> Self {
        GraphClient {
            http: reqwest::blocking::Client::new(),
            login_base: login_base.trim_end_matches('/').to_string(),
            graph_base: graph_base.trim_end_matches('/').to_string(),
        }
    }

    /// Client-credentials handshake: trade app credentials for a session.
    pub fn authenticate(
        &self,
        creds: &Credentials,
        scopes: &[String],
    ) -> Result<Session, AuthError> {
        let url = format!("{}/{}/oauth2/v2.0/token", self.login_base, creds.tenant_id);
        let form = [
            ("client_id", creds.client_id.as_str()),
            ("client_secret", creds.client_secret.as_str()),
            ("scope", &scopes.join(" ")),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !status.is_success() {
            let detail: TokenErrorBody = serde_json::from_str(&body).unwrap_or(TokenErrorBody {
                error: status.to_string(),
                error_description: String::new(),
            });
            if detail.error == "invalid_grant" || detail.error == "interaction_required" {
                return Err(AuthError::Expired);
            }
            let reason = if detail.error_description.is_empty() {
                detail.error
            } else {
                detail.error_description
            };
            return Err(AuthError::Denied(reason));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::Transport(format!("malformed token response: {e}")))?;

        Ok(Session {
            access_token: token.access_token,
        })
    }

    /// Fetch the full policy collection, draining pagination before
    /// returning. Callers never see a partial page set: any failure mid-way
    /// discards everything fetched so far.
    pub fn list_policies(&self, session: &Session) -> Result<Vec<Policy>, FetchError> {
        let mut url = format!("{}/identity/conditionalAccess/policies", self.graph_base);
        let mut policies: Vec<Policy> = Vec::new();

        loop {
            let response = self
                .http
                .get(&url)
                .bearer_auth(session.bearer())
                .send()
                .map_err(|e| FetchError::RemoteUnavailable(e.to_string()))?;

            let status = response.status();
            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
            {
                return Err(FetchError::AuthExpired);
            }
            if !status.is_success() {
                return Err(FetchError::RemoteUnavailable(format!(
                    "policy listing returned {status}"
                )));
            }

            let body = response
                .text()
                .map_err(|e| FetchError::RemoteUnavailable(e.to_string()))?;
            let page = parse::parse_policy_page(&body)
                .map_err(|e| FetchError::RemoteUnavailable(format!("malformed page: {e:#}")))?;

            policies.extend(page.policies);
            match page.next_link {
                Some(next) => url = next,
                None => break,
            }
        }

        Ok(policies)
    }

    /// Release the session. App-only tokens have no revocation endpoint;
    /// the release point exists so teardown is a single explicit action the
    /// orchestrator can guarantee on every path.
    pub fn sign_out(&self, session: Session) {
        drop(session);
    }
}
