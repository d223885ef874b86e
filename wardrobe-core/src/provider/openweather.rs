use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{Condition, WeatherReading};

use super::{ProviderError, WeatherProvider};

const API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Fixed per-request timeout; there is no retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    /// Fails if the HTTP client cannot be built; a client without the
    /// request timeout is not an acceptable substitute.
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self { api_key, http })
    }

    async fn fetch(&self, query: &[(&str, &str)]) -> Result<WeatherReading, ProviderError> {
        let res = self
            .http
            .get(API_URL)
            .query(query)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                code: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let primary = parsed
            .weather
            .first()
            .ok_or_else(|| ProviderError::Malformed("empty weather array".to_string()))?;

        Ok(WeatherReading {
            location_name: parsed.name,
            country: parsed.sys.country.unwrap_or_else(|| "XX".to_string()),
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            pressure_hpa: parsed.main.pressure,
            wind_speed_mps: parsed.wind.speed,
            condition: Condition::from(primary.main.as_str()),
            description: primary.description.clone(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_by_city(&self, city: &str) -> Result<WeatherReading, ProviderError> {
        tracing::debug!(city, "fetching current weather by city");
        self.fetch(&[("q", city)]).await
    }

    async fn fetch_by_coords(&self, lat: f64, lon: f64) -> Result<WeatherReading, ProviderError> {
        tracing::debug!(lat, lon, "fetching current weather by coordinates");
        let lat = lat.to_string();
        let lon = lon.to_string();
        self.fetch(&[("lat", lat.as_str()), ("lon", lon.as_str())]).await
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // Error bodies can echo user input, so the cut must land on a
        // char boundary rather than a fixed byte offset.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
