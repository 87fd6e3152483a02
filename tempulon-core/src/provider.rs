use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    WeatherError,
    model::{CurrentConditions, ForecastSample},
};

pub mod openweather;

/// Source of current conditions and the 5-day/3-hour forecast, always in metric units.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current(&self, lat: f64, lon: f64) -> Result<CurrentConditions, WeatherError>;

    /// Raw samples in provider order (chronological).
    async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<Vec<ForecastSample>, WeatherError>;
}
