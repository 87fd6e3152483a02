//! Free-text place name to coordinates, via the OpenWeather geocoding endpoint.

use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::{
    Config, WeatherError,
    http::{HttpClient, get_json},
    model::{Coordinates, LocationQuery},
};

#[derive(Debug, Deserialize)]
struct GeoMatch {
    lat: f64,
    lon: f64,
    name: String,
}

#[derive(Debug, Clone)]
pub struct LocationResolver {
    http: Arc<dyn HttpClient>,
    url: String,
    api_key: String,
}

impl LocationResolver {
    pub fn new(http: Arc<dyn HttpClient>, config: &Config) -> Self {
        Self {
            http,
            url: config.endpoints.geocode.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// First geocoding match for `query`.
    ///
    /// A blank city is rejected without any request. An empty match list is
    /// `WeatherError::NotFound`; callers are expected to report it and carry on.
    pub async fn resolve(&self, query: &LocationQuery) -> Result<Coordinates, WeatherError> {
        if query.is_blank() {
            return Err(WeatherError::BlankCity);
        }

        let q = query.to_query_string();
        debug!(query = %q, "geocoding");

        let params = [
            ("q", q.clone()),
            ("limit", "1".to_string()),
            ("appid", self.api_key.clone()),
        ];
        let matches: Vec<GeoMatch> = get_json(self.http.as_ref(), &self.url, &params).await?;

        let first = matches
            .into_iter()
            .next()
            .ok_or(WeatherError::NotFound(q))?;

        debug!(lat = first.lat, lon = first.lon, name = %first.name, "resolved location");

        Ok(Coordinates {
            latitude: first.lat,
            longitude: first.lon,
            resolved_name: first.name,
        })
    }
}
