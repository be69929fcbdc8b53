// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the image source port.
//!
//! Fetches the image list with a single GET and downloads image bytes for
//! display. No retries happen here; failures are returned to the caller.

use crate::application::port::{ImageSource, SourceError};
use crate::domain::gallery::ImageSet;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Deserialize;
use std::time::Duration;

/// Upper bound on redirects followed for any request.
const MAX_REDIRECTS: usize = 10;

/// Accepted shapes of the image list payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<serde_json::Value>),
    Wrapped { images: Vec<serde_json::Value> },
}

/// Parses an image list payload.
///
/// Accepts a bare JSON array of strings or an object with an `images`
/// array. Every element must be a string, and there must be exactly eight.
pub fn parse_image_list(body: &[u8]) -> Result<ImageSet, SourceError> {
    let payload: Payload =
        serde_json::from_slice(body).map_err(|e| SourceError::Parse(e.to_string()))?;
    let values = match payload {
        Payload::List(values) | Payload::Wrapped { images: values } => values,
    };

    let urls = values
        .into_iter()
        .enumerate()
        .map(|(position, value)| match value {
            serde_json::Value::String(url) => Ok(url),
            other => Err(SourceError::Parse(format!(
                "entry {position} is not a string: {other}"
            ))),
        })
        .collect::<Result<Vec<String>, SourceError>>()?;

    Ok(ImageSet::try_from(urls)?)
}

/// [`ImageSource`] backed by a remote JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpImageSource {
    /// Builds a source for `endpoint` with the given request timeout and
    /// user agent.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ImageSource for HttpImageSource {
    fn fetch(&self) -> BoxFuture<'static, Result<ImageSet, SourceError>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        async move {
            log::info!("fetching image list from {endpoint}");
            let body = get_bytes(&client, &endpoint).await?;
            parse_image_list(&body)
        }
        .boxed()
    }

    fn fetch_image(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>, SourceError>> {
        let client = self.client.clone();
        let url = url.to_owned();
        async move { get_bytes(&client, &url).await }.boxed()
    }
}

async fn get_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, SourceError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))?;
    Ok(bytes.to_vec())
}
