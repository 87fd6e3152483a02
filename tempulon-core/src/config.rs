use directories::ProjectDirs;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";
pub const DEFAULT_COUNTRY: &str = "US";
pub const LAST_SEARCH_FILE: &str = "last_weather.txt";

const GEOCODE_PATH: &str = "/geo/1.0/direct";
const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";

/// Endpoints queried for a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub geocode: String,
    pub current: String,
    pub forecast: String,
}

impl Endpoints {
    /// All three endpoints rooted at `base` (no trailing slash needed).
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            geocode: format!("{base}{GEOCODE_PATH}"),
            current: format!("{base}{CURRENT_PATH}"),
            forecast: format!("{base}{FORECAST_PATH}"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_base(DEFAULT_BASE_URL)
    }
}

/// Everything the components need, handed to them at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoints: Endpoints,

    /// Country appended to every geocoding query.
    pub country: String,

    pub last_search_path: PathBuf,
}

impl Config {
    /// Default endpoints and country, last search kept in the platform data directory.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoints: Endpoints::default(),
            country: DEFAULT_COUNTRY.to_string(),
            last_search_path: Self::default_last_search_path(),
        }
    }

    /// Re-root every endpoint at another origin, e.g. a mock server.
    pub fn with_base_url(mut self, base: &str) -> Self {
        self.endpoints = Endpoints::from_base(base);
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_last_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.last_search_path = path.into();
        self
    }

    /// Platform data directory, or the working directory when there is no home.
    pub fn default_last_search_path() -> PathBuf {
        match ProjectDirs::from("dev", "tempulon", "tempulon") {
            Some(dirs) => dirs.data_dir().join(LAST_SEARCH_FILE),
            None => {
                tracing::warn!(
                    "no platform data directory, keeping last search in working directory"
                );
                PathBuf::from(LAST_SEARCH_FILE)
            }
        }
    }
}
