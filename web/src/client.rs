use crate::error::WebError;
use crate::models::Status;

/// Fetches the current Status from the api service. The body is read in
/// full before parsing so transport and parse failures stay distinct.
pub async fn fetch_status(http: &reqwest::Client, api_url: &str) -> Result<Status, WebError> {
    let body = http.get(api_url).send().await?.bytes().await?;
    let status = serde_json::from_slice(&body)?;
    Ok(status)
}
