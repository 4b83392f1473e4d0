//! The remote-source boundary and scoped session handling.

use anyhow::Context;
use caguard_graph::{AuthError, Credentials, FetchError, GraphClient};
use caguard_types::Policy;

/// Directory service as the orchestrator sees it. The concrete transport
/// lives in `caguard-graph`; tests substitute fakes.
pub trait Directory {
    type Session;

    fn authenticate(&self, scopes: &[String]) -> Result<Self::Session, AuthError>;
    fn list_policies(&self, session: &Self::Session) -> Result<Vec<Policy>, FetchError>;
    fn sign_out(&self, session: Self::Session);
}

/// Scoped session acquisition with guaranteed release.
///
/// `body` runs with an authenticated session; sign-out executes after it
/// returns, success or failure. Fetch and render errors therefore never
/// leak the session.
pub fn with_session<D: Directory, T>(
    directory: &D,
    scopes: &[String],
    body: impl FnOnce(&D::Session) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    let session = directory.authenticate(scopes).context("authenticate")?;
    let result = body(&session);
    directory.sign_out(session);
    result
}

/// [`Directory`] backed by a Graph client and app credentials.
pub struct GraphDirectory {
    client: GraphClient,
    credentials: Credentials,
}

impl GraphDirectory {
    pub fn new(client: GraphClient, credentials: Credentials) -> Self {
        GraphDirectory {
            client,
            credentials,
        }
    }
}

impl Directory for GraphDirectory {
    type Session = caguard_graph::Session;

    fn authenticate(&self, scopes: &[String]) -> Result<Self::Session, AuthError> {
        self.client.authenticate(&self.credentials, scopes)
    }

    fn list_policies(&self, session: &Self::Session) -> Result<Vec<Policy>, FetchError> {
        self.client.list_policies(session)
    }

    fn sign_out(&self, session: Self::Session) {
        self.client.sign_out(session);
    }
}
