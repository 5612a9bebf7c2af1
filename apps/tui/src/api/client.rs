use crate::api::error::ApiError;
use crate::api::source::{flatten_stats, DataSource, Prediction};
use crate::config::DashboardConfig;
use crate::domain::{StatEntry, WeatherRow};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

pub const WEATHER_PATH: &str = "/api/weather";
pub const STATS_PATH: &str = "/api/stats";
pub const PREDICT_PATH: &str = "/predict";

/// HTTP client for the weather origin and the prediction backend.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    weather_url: Url,
    stats_url: Url,
    predict_url: Url,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl DashboardClient {
    pub fn new(config: &DashboardConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::NetworkRequest("client setup".to_string(), e))?;

        Ok(Self {
            client,
            weather_url: join(&config.origin, WEATHER_PATH)?,
            stats_url: join(&config.backend, STATS_PATH)?,
            predict_url: join(&config.backend, PREDICT_PATH)?,
        })
    }

    pub const fn weather_url(&self) -> &Url {
        &self.weather_url
    }

    pub const fn stats_url(&self) -> &Url {
        &self.stats_url
    }

    async fn send(&self, url: Url) -> Result<Response, ApiError> {
        debug!("GET {url}");
        self.client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::NetworkRequest(url.to_string(), e))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ApiError> {
        let response = self.send(url.clone()).await?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {url}: {e:?}");
                return Err(if let Some(status) = e.status() {
                    ApiError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    ApiError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(url.to_string(), e))
    }
}

#[async_trait]
impl DataSource for DashboardClient {
    async fn fetch_weather(&self) -> Result<Vec<WeatherRow>, ApiError> {
        let rows: Vec<WeatherRow> = self.get_json(&self.weather_url).await?;
        info!("Fetched {} weather rows", rows.len());
        Ok(rows)
    }

    async fn fetch_stats(&self) -> Result<Vec<StatEntry>, ApiError> {
        let body: serde_json::Value = self.get_json(&self.stats_url).await?;
        let entries = flatten_stats(body)?;
        info!("Fetched {} stat categories", entries.len());
        Ok(entries)
    }

    async fn predict(&self, city: &str) -> Result<Prediction, ApiError> {
        let mut url = self.predict_url.clone();
        url.query_pairs_mut().append_pair("city", city);

        let response = self.send(url.clone()).await?;

        // The backend answers 400/404/500 with an `{"error": ...}` body.
        let failed = response.error_for_status_ref().err();
        if let Some(source) = failed {
            let status = response.status();
            warn!("Prediction for {city} returned {status}");
            return Err(match response.json::<ErrorBody>().await {
                Ok(body) => ApiError::Prediction {
                    city: city.to_string(),
                    message: body.error,
                },
                Err(_) => ApiError::HttpStatus {
                    url: url.to_string(),
                    status,
                    source,
                },
            });
        }

        response
            .json::<Prediction>()
            .await
            .map_err(|e| ApiError::Decode(url.to_string(), e))
    }
}

fn join(base: &Url, path: &str) -> Result<Url, ApiError> {
    base.join(path)
        .map_err(|e| ApiError::InvalidUrl(format!("{base}{path}"), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_resolve_against_their_origins() -> Result<(), Box<dyn std::error::Error>> {
        let config = DashboardConfig {
            origin: Url::parse("http://localhost:3000/dashboard/")?,
            backend: Url::parse("http://stats.example:5000")?,
            ..DashboardConfig::default()
        };

        let client = DashboardClient::new(&config)?;

        assert_eq!(client.weather_url().as_str(), "http://localhost:3000/api/weather");
        assert_eq!(client.stats_url().as_str(), "http://stats.example:5000/api/stats");

        Ok(())
    }
}
