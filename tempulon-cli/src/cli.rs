use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use std::{path::PathBuf, sync::Arc};
use tempulon_core::{
    Config, LastSearchStore, LocationQuery, LocationResolver, OpenWeatherProvider, ReqwestClient,
    Report, TemperatureUnit, WeatherError, config::DEFAULT_COUNTRY, lookup,
};

/// Top-level CLI struct.
///
/// The interactive loop reads through `inquire`, which needs a terminal: piping
/// cities on stdin (`tempulon < cities.txt`) fails with "Failed to read from the
/// terminal". Use `show` once per city for scripted lookups.
#[derive(Debug, Parser)]
#[command(name = "tempulon", version, about = "Current weather and 3-day forecast")]
pub struct Cli {
    /// OpenWeather API key.
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Country code appended to every location query.
    #[arg(long, default_value = DEFAULT_COUNTRY, global = true)]
    pub country: String,

    /// File holding the last search; defaults to the platform data directory.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Log requests and responses to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Without a subcommand, prompt for locations until `exit`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show weather for one location and exit.
    Show {
        city: String,

        /// Optional 2-letter state code.
        #[arg(long)]
        state: Option<String>,

        /// Temperature unit, C or F.
        #[arg(long, default_value = "C")]
        unit: TemperatureUnit,
    },

    /// Print the last successful search.
    Last,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match &self.command {
            Some(Command::Last) => {
                let store = LastSearchStore::new(self.store_path());
                if !print_last_search(&store) {
                    println!("No previous search.");
                }
            }
            Some(Command::Show { city, state, unit }) => {
                let app = self.app()?;
                app.show(city, state.as_deref(), *unit).await;
            }
            None => {
                let app = self.app()?;
                app.interactive().await?;
            }
        }

        Ok(())
    }

    fn store_path(&self) -> PathBuf {
        self.store
            .clone()
            .unwrap_or_else(Config::default_last_search_path)
    }

    fn config(&self) -> anyhow::Result<Config> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: pass `--api-key <KEY>` or set OPENWEATHER_API_KEY."
            )
        })?;

        Ok(Config::new(api_key)
            .with_country(self.country.clone())
            .with_last_search_path(self.store_path()))
    }

    fn app(&self) -> anyhow::Result<App> {
        let config = self.config()?;
        let http = Arc::new(ReqwestClient::new());

        Ok(App {
            resolver: LocationResolver::new(http.clone(), &config),
            provider: OpenWeatherProvider::new(http, &config),
            store: LastSearchStore::from_config(&config),
            country: config.country,
        })
    }
}

struct App {
    resolver: LocationResolver,
    provider: OpenWeatherProvider,
    store: LastSearchStore,
    country: String,
}

impl App {
    async fn interactive(&self) -> anyhow::Result<()> {
        println!("\n--- Tempulon ---");
        print_last_search(&self.store);

        loop {
            let Some(city) = prompt("Enter city name (or 'exit' to quit):")? else {
                break;
            };
            if city.trim().eq_ignore_ascii_case("exit") {
                break;
            }
            if city.trim().is_empty() {
                println!("Please enter a valid city name.");
                continue;
            }

            let Some(state) = prompt("Enter 2-letter state code (optional):")? else {
                break;
            };
            let Some(unit) = prompt("Choose temperature unit - C or F:")? else {
                break;
            };

            let unit = unit.parse().unwrap_or_else(|_| {
                println!("Invalid unit. Defaulting to Celsius.");
                TemperatureUnit::Celsius
            });

            self.show(&city, Some(&state), unit).await;
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Look up, print and remember one location. Failures are reported, never returned.
    async fn show(&self, city: &str, state: Option<&str>, unit: TemperatureUnit) {
        let query = LocationQuery::new(city, state, self.country.as_str());

        let report = match lookup(&self.resolver, &self.provider, &query, unit).await {
            Ok(report) => report,
            Err(WeatherError::BlankCity) => {
                println!("Please enter a valid city name.");
                return;
            }
            Err(err) if err.is_not_found() => {
                println!("Location not found.");
                return;
            }
            Err(err) => {
                println!("Geocoding error: {err}");
                return;
            }
        };

        print_report(&report);

        if let Err(err) = report.persist(&self.store) {
            tracing::warn!("{err:#}");
            println!("Could not save this search.");
        }
    }
}

/// `None` when the user cancels the prompt (Esc / Ctrl-C).
fn prompt(message: &str) -> anyhow::Result<Option<String>> {
    match Text::new(message).prompt() {
        Ok(answer) => Ok(Some(answer.trim().to_string())),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Failed to read from the terminal"),
    }
}

fn print_report(report: &Report) {
    println!("\n{}", report.header());

    match &report.current {
        Some(summary) => println!("\n{summary}\n"),
        None => println!("No data to display."),
    }

    match &report.forecast {
        Some(lines) if !lines.is_empty() => {
            println!("3-Day Forecast:");
            for line in lines {
                println!("{line}");
            }
        }
        _ => println!("No forecast data available."),
    }
}

/// Returns whether a record was printed.
fn print_last_search(store: &LastSearchStore) -> bool {
    match store.load() {
        Some(record) => {
            println!("\nLast Search: {}", record.location_label);
            println!("Weather: {}\n", record.summary_line);
            true
        }
        None => false,
    }
}
