//! Core library for the `tempulon` weather CLI.
//!
//! This crate defines:
//! - Configuration and the HTTP capability used for every remote call
//! - Geocoding and the OpenWeather provider
//! - Forecast aggregation, unit conversion and display formatting
//! - The single-slot last-search store
//!
//! It is used by `tempulon-cli`, but holds no terminal I/O of its own.

pub mod config;
pub mod error;
pub mod forecast;
pub mod format;
pub mod geocode;
pub mod http;
pub mod model;
pub mod provider;
pub mod report;
pub mod store;
pub mod units;

pub use config::{Config, Endpoints};
pub use error::WeatherError;
pub use forecast::aggregate;
pub use format::{CurrentSummary, format_current, format_forecast};
pub use geocode::LocationResolver;
pub use http::{HttpClient, ReqwestClient};
pub use model::{Coordinates, CurrentConditions, DailyAggregate, ForecastSample, LocationQuery};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use report::{Report, lookup};
pub use store::{LastSearchRecord, LastSearchStore, location_label};
pub use units::{SpeedUnit, TemperatureUnit, convert_temperature, convert_wind_speed};
