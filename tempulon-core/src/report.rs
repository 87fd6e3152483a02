//! One complete lookup: coordinates, current conditions, forecast.

use tracing::warn;

use crate::{
    WeatherError,
    forecast::aggregate,
    format::{CurrentSummary, format_forecast},
    geocode::LocationResolver,
    model::LocationQuery,
    provider::WeatherProvider,
    store::{LastSearchStore, location_label},
    units::TemperatureUnit,
};

/// Outcome of a lookup whose location was resolved.
///
/// Current conditions and forecast are independent; either may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub resolved_name: String,
    /// Upper-cased, empty when none was given.
    pub state: String,
    pub current: Option<CurrentSummary>,
    /// `None` when the forecast could not be fetched.
    pub forecast: Option<Vec<String>>,
}

impl Report {
    pub fn header(&self) -> String {
        format!("Location: {}, {}", self.resolved_name, self.state)
    }

    pub fn location_label(&self) -> String {
        location_label(&self.resolved_name, &self.state)
    }

    pub fn summary_line(&self) -> Option<String> {
        self.current.as_ref().map(CurrentSummary::line)
    }

    /// Save to `store` if there is a current summary. Returns whether anything was written.
    pub fn persist(&self, store: &LastSearchStore) -> anyhow::Result<bool> {
        match self.summary_line() {
            Some(summary) => {
                store.save(&self.location_label(), &summary)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Resolve `query`, then fetch current conditions and forecast one after the other.
///
/// Only geocoding failures (including a blank city) are returned as errors.
pub async fn lookup(
    resolver: &LocationResolver,
    provider: &dyn WeatherProvider,
    query: &LocationQuery,
    unit: TemperatureUnit,
) -> Result<Report, WeatherError> {
    let coords = resolver.resolve(query).await?;

    let current = match provider.fetch_current(coords.latitude, coords.longitude).await {
        Ok(conditions) => Some(CurrentSummary::new(&conditions, unit)),
        Err(err) => {
            warn!(%err, "current conditions unavailable");
            None
        }
    };

    let forecast = match provider.fetch_forecast(coords.latitude, coords.longitude).await {
        Ok(samples) => Some(format_forecast(&aggregate(&samples), unit)),
        Err(err) => {
            warn!(%err, "forecast unavailable");
            None
        }
    };

    Ok(Report {
        resolved_name: coords.resolved_name,
        state: query.state_label(),
        current,
        forecast,
    })
}
