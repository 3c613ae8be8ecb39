// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitLab REST client for project variables.
//!
//! ```text
//! GET {base}/api/v4/projects/{project}/variables?per_page=100&page=N
//!     PRIVATE-TOKEN: {token}
//!
//! page 1 --> [..100]
//! page 2 --> [..100]
//! page 3 --> [..37]
//! page 4 --> []        stop, no page 5
//! ```

use futures_util::{Stream, TryStreamExt, stream};
use reqwest::{Client, StatusCode, Url};
use std::sync::OnceLock;
use tracing::{debug, info, trace};

use super::types::Variable;
use crate::error::{ConfigError, GlenvError, GlenvResult, NetworkError};

/// Number of variables requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Header carrying the personal/project access token.
pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Global HTTP client - initialized once, reused for every page.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("glenv/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Client for the project variables endpoint of one GitLab instance.
#[derive(Clone)]
pub struct GitlabClient {
    client: Client,
    base_url: Url,
    token: String,
}

impl std::fmt::Debug for GitlabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitlabClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GitlabClient {
    /// Creates a client for the instance at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` cannot carry a path
    /// (e.g. `mailto:` or `data:` URLs).
    pub fn new(base_url: Url, token: impl Into<String>) -> GlenvResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: base_url.to_string(),
                message: "url cannot be used as a base".to_string(),
            }
            .into());
        }

        Ok(Self {
            client: global_client().clone(),
            base_url,
            token: token.into(),
        })
    }

    /// Builds the URL for one page of a project's variables.
    ///
    /// The project is pushed as a single segment, so namespaced paths like
    /// `group/project` are sent as `group%2Fproject`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the base URL cannot carry a path.
    pub fn variables_url(&self, project: &str, page: u32) -> GlenvResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ConfigError::InvalidUrl {
                url: self.base_url.to_string(),
                message: "url cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(["api", "v4", "projects", project, "variables"]);
        url.query_pairs_mut()
            .clear()
            .append_pair("per_page", &PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    /// Fetches a single page of variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request cannot be sent.
    /// - The server answers 401/403 (`NetworkError::Unauthorized`).
    /// - The server answers any other non-success status.
    /// - The body is not a JSON array of variables.
    pub async fn fetch_page(&self, project: &str, page: u32) -> GlenvResult<Vec<Variable>> {
        let url = self.variables_url(project, page)?;

        trace!(%url, "requesting variables page");

        let response = self
            .client
            .get(url.clone())
            .header(TOKEN_HEADER, self.token.as_str())
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(NetworkError::Unauthorized {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }
        if !status.is_success() {
            return Err(NetworkError::HttpError {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let variables = response
            .json::<Vec<Variable>>()
            .await
            .map_err(|source| NetworkError::Decode {
                url: url.to_string(),
                source,
            })?;

        debug!(page, count = variables.len(), "fetched variables page");
        Ok(variables)
    }

    /// Lazily yields successive pages until the server returns an empty one.
    ///
    /// The first error ends the stream.
    pub fn variable_pages<'a>(
        &'a self,
        project: &'a str,
    ) -> impl Stream<Item = GlenvResult<Vec<Variable>>> + 'a {
        stream::try_unfold(1_u32, move |page| async move {
            let batch = self.fetch_page(project, page).await?;
            let next = if batch.is_empty() {
                trace!(page, "empty page, no more variables");
                None
            } else {
                Some((batch, page + 1))
            };
            Ok::<_, GlenvError>(next)
        })
    }

    /// Fetches every variable of `project`, in server order.
    ///
    /// # Errors
    ///
    /// Returns the first error from any page; nothing fetched so far is returned.
    pub async fn list_variables(&self, project: &str) -> GlenvResult<Vec<Variable>> {
        let variables: Vec<Variable> = self.variable_pages(project).try_concat().await?;
        info!(project, count = variables.len(), "fetched project variables");
        Ok(variables)
    }
}
