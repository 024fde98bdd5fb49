use anyhow::Result;
use hyper::ext::ReasonPhrase;
use reqwest::Client;
use tokio::time::Duration;

use super::{GetRequest, StatusLine, Transport};

/// Issues the GET with reqwest. A fresh client per call, so nothing is
/// pooled between probes.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport;

impl Transport for ReqwestTransport {
    async fn get(&self, request: &GetRequest) -> Result<StatusLine> {
        let client = Client::builder()
            .timeout(Duration::from_secs(request.wait_timeout))
            .build()?;
        let mut builder = client.get(&request.uri);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        // headers only; the body is never read
        let resp = builder.send().await?;
        let status = resp.status();
        // hyper only records the phrase when it differs from the canonical one
        let reason = match resp.extensions().get::<ReasonPhrase>() {
            Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
            None => status.canonical_reason().unwrap_or_default().to_string(),
        };
        Ok(StatusLine {
            code: status.as_u16(),
            reason,
        })
    }
}
