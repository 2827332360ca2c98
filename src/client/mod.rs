//! Resource clients layered over a shared [`Connection`].

mod project;


use std::sync::Arc;

use reqwest::Method;
use secrecy::SecretString;
use tracing::instrument;

use crate::config::TrackerConfig;
use crate::connection::Connection;
use crate::error::{Error, Result};
use crate::model::Me;
use crate::query::QueryParams;

pub use project::ProjectClient;

/// Entry point for talking to the service with one API token.
///
/// Cloning is cheap: every clone, and every [`ProjectClient`] derived from
/// it, shares the same [`Connection`].
#[derive(Debug, Clone)]
pub struct Client {
    conn: Arc<Connection>,
}

impl Client {
    pub fn new(token: SecretString) -> Self {
        Self::from_connection(Connection::new(token))
    }

    pub fn with_base_url(token: SecretString, base_url: impl Into<String>) -> Self {
        Self::from_connection(Connection::with_base_url(token, base_url))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(conn),
        }
    }

    /// Builds a client from a loaded config file. Fails with
    /// [`Error::MissingToken`] when no token is set.
    pub fn from_config(config: &TrackerConfig) -> Result<Self> {
        let token = config.token().ok_or(Error::MissingToken)?;
        Ok(match config.base_url.as_deref() {
            Some(base_url) => Self::with_base_url(token, base_url),
            None => Self::new(token),
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// The person the token belongs to.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<Me> {
        let request = self
            .conn
            .create_request(Method::GET, "/me", &QueryParams::new())?;
        let (me, _) = self.conn.execute(request).await?;
        Ok(me)
    }

    /// Scopes further calls to one project.
    pub fn in_project(&self, project_id: u64) -> ProjectClient {
        ProjectClient::new(project_id, Arc::clone(&self.conn))
    }
}
