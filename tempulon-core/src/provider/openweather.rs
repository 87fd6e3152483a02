use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    Config, WeatherError,
    http::{HttpClient, get_json},
    model::{CurrentConditions, ForecastSample},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    http: Arc<dyn HttpClient>,
    api_key: String,
    current_url: String,
    forecast_url: String,
}

impl OpenWeatherProvider {
    pub fn new(http: Arc<dyn HttpClient>, config: &Config) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            current_url: config.endpoints.current.clone(),
            forecast_url: config.endpoints.forecast.clone(),
        }
    }

    fn params(&self, lat: f64, lon: f64) -> [(&'static str, String); 4] {
        [
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct OwCurrentMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwCurrentMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwForecastMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

fn first_description(weather: &[OwWeather]) -> String {
    weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(&self, lat: f64, lon: f64) -> Result<CurrentConditions, WeatherError> {
        let params = self.params(lat, lon);
        let parsed: OwCurrentResponse =
            get_json(self.http.as_ref(), &self.current_url, &params).await?;

        Ok(CurrentConditions {
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            condition: first_description(&parsed.weather),
        })
    }

    async fn fetch_forecast(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<Vec<ForecastSample>, WeatherError> {
        let params = self.params(lat, lon);
        let parsed: OwForecastResponse =
            get_json(self.http.as_ref(), &self.forecast_url, &params).await?;

        tracing::debug!(samples = parsed.list.len(), "forecast received");

        Ok(parsed
            .list
            .into_iter()
            .map(|entry| ForecastSample {
                condition: first_description(&entry.weather),
                timestamp: entry.dt_txt,
                temperature_c: entry.main.temp,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::CannedHttp;
    use serde_json::json;

    const CURRENT: &str = "http://ow.test/data/2.5/weather";
    const FORECAST: &str = "http://ow.test/data/2.5/forecast";

    fn provider(http: CannedHttp) -> (Arc<CannedHttp>, OpenWeatherProvider) {
        let http = Arc::new(http);
        let config = Config::new("KEY").with_base_url("http://ow.test");
        (http.clone(), OpenWeatherProvider::new(http, &config))
    }

    #[tokio::test]
    async fn current_conditions_are_parsed() {
        let (http, provider) = provider(CannedHttp::default().ok(
            CURRENT,
            json!({
                "main": { "temp": 20.5, "feels_like": 19.0, "humidity": 50 },
                "wind": { "speed": 5.0, "deg": 180 },
                "weather": [{ "description": "clear sky", "main": "Clear" }],
                "name": "Minneapolis"
            }),
        ));

        let current = provider.fetch_current(44.9778, -93.265).await.unwrap();

        assert_eq!(
            current,
            CurrentConditions {
                temperature_c: 20.5,
                humidity_pct: 50,
                wind_speed_mps: 5.0,
                condition: "clear sky".into(),
            }
        );

        let sent = http.query_for(CURRENT);
        assert!(sent.contains(&("units".into(), "metric".into())));
        assert!(sent.contains(&("lat".into(), "44.9778".into())));
        assert!(sent.contains(&("lon".into(), "-93.265".into())));
    }

    #[tokio::test]
    async fn missing_weather_entry_is_unknown() {
        let (_, provider) = provider(CannedHttp::default().ok(
            CURRENT,
            json!({
                "main": { "temp": 1.0, "humidity": 90 },
                "wind": { "speed": 0.0 },
                "weather": []
            }),
        ));

        let current = provider.fetch_current(0.0, 0.0).await.unwrap();
        assert_eq!(current.condition, "Unknown");
    }

    #[tokio::test]
    async fn current_without_humidity_is_decode_error() {
        let (_, provider) = provider(CannedHttp::default().ok(
            CURRENT,
            json!({
                "main": { "temp": 20.0 },
                "wind": { "speed": 5.0 },
                "weather": [{ "description": "clear sky" }]
            }),
        ));

        let err = provider.fetch_current(0.0, 0.0).await.unwrap_err();
        assert!(matches!(err, WeatherError::Decode { .. }));
    }

    #[tokio::test]
    async fn current_http_error_is_unavailable() {
        let (_, provider) = provider(CannedHttp::default().status(CURRENT, 401));

        let err = provider.fetch_current(0.0, 0.0).await.unwrap_err();
        assert!(matches!(err, WeatherError::Status { status: 401, .. }));
    }

    #[tokio::test]
    async fn forecast_keeps_provider_order() {
        let (_, provider) = provider(CannedHttp::default().ok(
            FORECAST,
            json!({
                "cnt": 2,
                "list": [
                    {
                        "dt_txt": "2024-05-01 12:00:00",
                        "main": { "temp": 14.2 },
                        "weather": [{ "description": "light rain" }]
                    },
                    {
                        "dt_txt": "2024-05-01 15:00:00",
                        "main": { "temp": 16.0 },
                        "weather": [{ "description": "overcast clouds" }]
                    }
                ]
            }),
        ));

        let samples = provider.fetch_forecast(1.0, 2.0).await.unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].timestamp, "2024-05-01 12:00:00");
        assert_eq!(samples[0].condition, "light rain");
        assert_eq!(samples[1].temperature_c, 16.0);
    }

    #[tokio::test]
    async fn malformed_forecast_is_decode_error() {
        let (_, provider) =
            provider(CannedHttp::default().ok(FORECAST, json!({ "message": "oops" })));

        let err = provider.fetch_forecast(1.0, 2.0).await.unwrap_err();
        assert!(matches!(err, WeatherError::Decode { .. }));
    }
}
