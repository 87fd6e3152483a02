//! Human-readable rendering of current conditions and daily forecasts.

use chrono::NaiveDate;
use std::fmt;

use crate::{
    model::{CurrentConditions, DailyAggregate},
    units::{SpeedUnit, TemperatureUnit, convert_temperature, convert_wind_speed, round_to},
};

/// Current conditions converted for display.
///
/// Wind is always shown in mph, whatever temperature unit was picked.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSummary {
    pub temperature: f64,
    pub unit: TemperatureUnit,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_mph: f64,
}

impl CurrentSummary {
    pub fn new(conditions: &CurrentConditions, unit: TemperatureUnit) -> Self {
        Self {
            temperature: round_to(convert_temperature(conditions.temperature_c, unit), 2),
            unit,
            condition: capitalize(&conditions.condition),
            humidity_pct: conditions.humidity_pct,
            wind_mph: convert_wind_speed(conditions.wind_speed_mps, SpeedUnit::MilesPerHour),
        }
    }

    /// `<temp>°<UNIT>, <Condition>, <humidity>%, <wind> mph`
    pub fn line(&self) -> String {
        format!(
            "{}°{}, {}, {}%, {} mph",
            fmt_number(self.temperature),
            self.unit,
            self.condition,
            self.humidity_pct,
            fmt_number(self.wind_mph),
        )
    }
}

impl fmt::Display for CurrentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Weather:")?;
        writeln!(f, "Temperature: {}°{}", fmt_number(self.temperature), self.unit)?;
        writeln!(f, "Condition: {}", self.condition)?;
        writeln!(f, "Humidity: {}%", self.humidity_pct)?;
        write!(f, "Wind Speed: {} mph", fmt_number(self.wind_mph))
    }
}

/// Summary line for `conditions`, or `None` when there is nothing to display.
pub fn format_current(
    conditions: Option<&CurrentConditions>,
    unit: TemperatureUnit,
) -> Option<String> {
    conditions.map(|c| CurrentSummary::new(c, unit).line())
}

/// One `<Weekday>: <Condition>, High: <h>°, Low: <l>°<UNIT>` line per day.
pub fn format_forecast(days: &[DailyAggregate], unit: TemperatureUnit) -> Vec<String> {
    days.iter()
        .map(|day| {
            let high = round_to(convert_temperature(day.high_c, unit), 1);
            let low = round_to(convert_temperature(day.low_c, unit), 1);

            format!(
                "{}: {}, High: {}°, Low: {}°{}",
                weekday(&day.date),
                capitalize(&day.dominant_condition),
                fmt_number(high),
                fmt_number(low),
                unit,
            )
        })
        .collect()
}

/// Weekday name for a `YYYY-MM-DD` date; unparsable dates are shown as-is.
fn weekday(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%A").to_string(),
        Err(err) => {
            tracing::warn!(date, %err, "unparsable forecast date");
            date.to_string()
        }
    }
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Shortest round-trip form, always with a decimal point (`68.0`, `11.18`).
pub fn fmt_number(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') || !value.is_finite() {
        s
    } else {
        format!("{s}.0")
    }
}
