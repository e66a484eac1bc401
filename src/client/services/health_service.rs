use serde::Deserialize;

/// Body of the backend health endpoint. Extra fields are ignored; a
/// missing `message` is a decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[derive(Debug, Default)]
pub struct HealthService;

impl HealthService {
    /// GET {base_url}/api/health and return the `message` field.
    /// Non-2xx statuses and undecodable bodies are errors.
    pub async fn check(base_url: &str) -> anyhow::Result<String> {
        let url = format!("{}/api/health", base_url.trim_end_matches('/'));
        let response = reqwest::get(&url).await?.error_for_status()?;
        let health: HealthResponse = response.json().await?;
        Ok(health.message)
    }
}
