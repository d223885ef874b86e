use async_trait::async_trait;
use std::fmt::Debug;

use crate::model::WeatherReading;

pub mod fallback;
pub mod openweather;

/// Why a live weather fetch could not produce a usable reading.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("transport failure talking to weather API: {0}")]
    Transport(String),

    #[error("weather API returned status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("weather API returned a malformed payload: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_by_city(&self, city: &str) -> Result<WeatherReading, ProviderError>;
    async fn fetch_by_coords(&self, lat: f64, lon: f64) -> Result<WeatherReading, ProviderError>;
}

/// A reading plus whether it came from the live API or a substitute table.
#[derive(Debug, Clone)]
pub struct ResolvedWeather {
    pub reading: WeatherReading,
    /// True when the provider failed and a fixed sample reading was used.
    /// Callers surface this as a non-fatal advisory, never an error.
    pub substituted: bool,
}

/// Fetch by city, substituting a fixed fallback reading on any failure.
pub async fn fetch_city_or_fallback(
    provider: &dyn WeatherProvider,
    city: &str,
) -> ResolvedWeather {
    match provider.fetch_by_city(city).await {
        Ok(reading) => ResolvedWeather {
            reading,
            substituted: false,
        },
        Err(err) => {
            tracing::warn!(city, error = %err, "weather fetch failed, using fallback reading");
            ResolvedWeather {
                reading: fallback::reading_for_city(city),
                substituted: true,
            }
        }
    }
}

/// Fetch by coordinates, substituting the fixed fallback reading on any failure.
pub async fn fetch_coords_or_fallback(
    provider: &dyn WeatherProvider,
    lat: f64,
    lon: f64,
) -> ResolvedWeather {
    match provider.fetch_by_coords(lat, lon).await {
        Ok(reading) => ResolvedWeather {
            reading,
            substituted: false,
        },
        Err(err) => {
            tracing::warn!(lat, lon, error = %err, "weather fetch failed, using fallback reading");
            ResolvedWeather {
                reading: fallback::reading_for_coords(),
                substituted: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Condition;

    #[derive(Debug)]
    struct FailingProvider;

    #[async_trait]
    impl WeatherProvider for FailingProvider {
        async fn fetch_by_city(&self, _city: &str) -> Result<WeatherReading, ProviderError> {
            Err(ProviderError::Status {
                code: 502,
                body: "bad gateway".to_string(),
            })
        }

        async fn fetch_by_coords(
            &self,
            _lat: f64,
            _lon: f64,
        ) -> Result<WeatherReading, ProviderError> {
            Err(ProviderError::Transport("connection refused".to_string()))
        }
    }

    #[derive(Debug)]
    struct FixedProvider(WeatherReading);

    #[async_trait]
    impl WeatherProvider for FixedProvider {
        async fn fetch_by_city(&self, _city: &str) -> Result<WeatherReading, ProviderError> {
            Ok(self.0.clone())
        }

        async fn fetch_by_coords(
            &self,
            _lat: f64,
            _lon: f64,
        ) -> Result<WeatherReading, ProviderError> {
            Ok(self.0.clone())
        }
    }

    fn sample_reading() -> WeatherReading {
        WeatherReading {
            location_name: "Oslo".to_string(),
            country: "NO".to_string(),
            temperature_c: -3.0,
            feels_like_c: -8.0,
            humidity_pct: 80,
            pressure_hpa: 1021,
            wind_speed_mps: 4.5,
            condition: Condition::Snow,
            description: "light snow".to_string(),
        }
    }

    #[tokio::test]
    async fn live_reading_is_not_flagged_as_substituted() {
        let provider = FixedProvider(sample_reading());
        let resolved = fetch_city_or_fallback(&provider, "Oslo").await;
        assert!(!resolved.substituted);
        assert_eq!(resolved.reading.location_name, "Oslo");
    }

    #[tokio::test]
    async fn city_failure_substitutes_and_flags() {
        let resolved = fetch_city_or_fallback(&FailingProvider, "Ulaanbaatar").await;
        assert!(resolved.substituted);
        assert_eq!(resolved.reading.location_name, "Ulaanbaatar");
        assert_eq!(resolved.reading.temperature_c, 15.0);
        assert_eq!(resolved.reading.condition, Condition::Clouds);
    }

    #[tokio::test]
    async fn coords_failure_substitutes_london() {
        let resolved = fetch_coords_or_fallback(&FailingProvider, 51.5, -0.1).await;
        assert!(resolved.substituted);
        assert_eq!(resolved.reading.location_name, "London");
    }
}
