use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

/// POSTs an already encoded JSON document and returns the response status.
///
/// The response body is dropped unread.
pub async fn send_json_body(
    client: &Client,
    url: &str,
    body: String,
) -> reqwest::Result<StatusCode> {
    let response = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    Ok(response.status())
}
