//! EC2 IMDSv2 instance-type fetch.

use crate::client::ImdsClient;
use crate::error::FactsError;

/// IMDSv2 token endpoint path.
const TOKEN_PATH: &str = "/latest/api/token";

/// Instance-type metadata path.
const INSTANCE_TYPE_PATH: &str = "/latest/meta-data/instance-type";

/// Token TTL header name.
const TOKEN_TTL_HEADER: &str = "X-aws-ec2-metadata-token-ttl-seconds";

/// Token header name for requests.
const TOKEN_HEADER: &str = "X-aws-ec2-metadata-token";

/// Get an IMDSv2 token.
async fn get_token(client: &ImdsClient) -> Result<String, FactsError> {
    let url = format!("{}{}", client.base_url(), TOKEN_PATH);

    let response = client
        .inner()
        .put(&url)
        .header(TOKEN_TTL_HEADER, "60")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FactsError::Http(response.status().as_u16()));
    }

    response.text().await.map_err(FactsError::from)
}

/// Fetch the instance type from IMDS.
///
/// The response body is the plain-text instance-type identifier, e.g.
/// `m7g.medium`. Trailing whitespace is stripped.
pub async fn fetch_instance_type(client: &ImdsClient) -> Result<String, FactsError> {
    let token = get_token(client).await?;
    let url = format!("{}{}", client.base_url(), INSTANCE_TYPE_PATH);

    let response = client
        .inner()
        .get(&url)
        .header(TOKEN_HEADER, &token)
        .send()
        .await?;

    let status = response.status();
    if status.as_u16() == 404 {
        return Err(FactsError::NotFound);
    }
    if !status.is_success() {
        return Err(FactsError::Http(status.as_u16()));
    }

    let body = response.bytes().await?.to_vec();
    let text = String::from_utf8(body).map_err(|_| FactsError::Utf8)?;
    Ok(text.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(TOKEN_PATH, "/latest/api/token");
        assert_eq!(INSTANCE_TYPE_PATH, "/latest/meta-data/instance-type");
    }
}
