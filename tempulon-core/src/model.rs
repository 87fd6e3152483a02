/// Best geocoding match for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub resolved_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition: String,
}

/// One 3-hour slot of the forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    /// `YYYY-MM-DD HH:MM:SS`, as sent by the provider.
    pub timestamp: String,
    pub temperature_c: f64,
    pub condition: String,
}

impl ForecastSample {
    /// Calendar date portion of the timestamp.
    pub fn date(&self) -> &str {
        self.timestamp.split(' ').next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyAggregate {
    pub date: String,
    pub high_c: f64,
    pub low_c: f64,
    pub dominant_condition: String,
}

/// City, optional state and country typed in by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: String,
    pub state: Option<String>,
    pub country: String,
}

impl LocationQuery {
    /// City and state are trimmed; a blank state counts as absent.
    pub fn new(city: &str, state: Option<&str>, country: impl Into<String>) -> Self {
        let state = state
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            city: city.trim().to_string(),
            state,
            country: country.into(),
        }
    }

    /// A query without a city must not be sent anywhere.
    pub fn is_blank(&self) -> bool {
        self.city.is_empty()
    }

    /// `city,state,country`, or `city,country` without a state.
    pub fn to_query_string(&self) -> String {
        match &self.state {
            Some(state) => format!("{},{},{}", self.city, state, self.country),
            None => format!("{},{}", self.city, self.country),
        }
    }

    /// Upper-cased state, empty when absent.
    pub fn state_label(&self) -> String {
        self.state
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_default()
    }
}
