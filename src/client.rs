use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::models::{Champion, ErrorResponse, Round};
use crate::settings::Settings;

/// Status and fully read body of one GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One GET per call, relative to whatever base the implementation targets.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, path: &str) -> Result<RawResponse>;
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(settings: &Settings) -> HttpTransport {
        HttpTransport {
            client: Client::new(),
            base_url: settings.base_url.clone(),
        }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<RawResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Request)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(ApiError::Read)?;
        info!("{} answered {} ({} bytes)", url, status, body.len());

        Ok(RawResponse { status, body })
    }
}

pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> ApiClient<T> {
        ApiClient { transport }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn fetch_round(&self, year: &str, round: &str) -> Result<Round> {
        self.request(&format!("/jogos/{}/{}", year, round)).await
    }

    pub async fn fetch_champion(&self, year: &str) -> Result<Champion> {
        self.request(&format!("/campeao/{}", year)).await
    }

    async fn request<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self.transport.get(path).await?;
        classify(response)
    }
}

fn classify<R: DeserializeOwned>(response: RawResponse) -> Result<R> {
    if !response.is_success() {
        warn!("server returned status {}", response.status);

        return Err(match serde_json::from_str::<ErrorResponse>(&response.body) {
            Ok(error) => ApiError::Server(error.message),
            Err(_) => ApiError::UnknownServer,
        });
    }

    let data = serde_json::from_str(&response.body)?;
    Ok(data)
}
