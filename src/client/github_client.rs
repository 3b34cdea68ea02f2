use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, error, info};

use crate::client::IssueSubmitter;
use crate::constants::{IMPORT_MEDIA_TYPE, USER_AGENT};
use crate::error::{MigrationError, MigrationResult};
use crate::models::{ImportPayload, ImportResponse};

/// Client for the GitHub issue import endpoint of one repository
pub struct GitHubImportClient {
    client: reqwest::Client,
    import_url: String,
}

pub fn import_url(api_url: &str, owner: &str, project: &str) -> String {
    format!(
        "{}/repos/{}/{}/import/issues",
        api_url.trim_end_matches('/'),
        owner,
        project
    )
}

impl GitHubImportClient {
    pub fn new(api_url: &str, owner: &str, project: &str, token: &str) -> MigrationResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("token {}", token)).map_err(|_| {
            MigrationError::Config("GitHub token contains invalid characters".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(IMPORT_MEDIA_TYPE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);

        // No timeout: a submission blocks until GitHub answers or the transport fails
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            import_url: import_url(api_url, owner, project),
        })
    }

    pub fn import_url(&self) -> &str {
        &self.import_url
    }
}

impl IssueSubmitter for GitHubImportClient {
    async fn submit(&self, issue_id: u64, payload: &ImportPayload) -> MigrationResult<()> {
        debug!("submitting issue {}", issue_id);

        let response = self
            .client
            .post(&self.import_url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("response code {}", status.as_u16());
            error!("response: {}", body);
            return Err(MigrationError::Submission {
                issue_id,
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        debug!("response: {}", body);
        if let Ok(import) = serde_json::from_str::<ImportResponse>(&body) {
            debug!(
                "import {} is {} ({})",
                import.id,
                import.status,
                import.url.as_deref().unwrap_or("no status url")
            );
        }

        info!("issue {} submitted: {}", issue_id, payload.issue.title);
        Ok(())
    }
}
