//! Daily high/low/condition from 3-hour forecast samples.

use crate::model::{DailyAggregate, ForecastSample};

/// Days kept by [`aggregate`].
pub const FORECAST_DAYS: usize = 3;

/// Group `samples` by calendar date in first-seen order and summarise the first
/// [`FORECAST_DAYS`] groups.
pub fn aggregate(samples: &[ForecastSample]) -> Vec<DailyAggregate> {
    let mut days: Vec<(&str, Vec<&ForecastSample>)> = Vec::new();

    for sample in samples {
        let date = sample.date();
        match days.iter_mut().find(|(d, _)| *d == date) {
            Some((_, group)) => group.push(sample),
            None => days.push((date, vec![sample])),
        }
    }

    days.into_iter()
        .take(FORECAST_DAYS)
        .filter_map(|(date, group)| summarise_day(date, &group))
        .collect()
}

fn summarise_day(date: &str, group: &[&ForecastSample]) -> Option<DailyAggregate> {
    let dominant_condition = dominant(group.iter().map(|s| s.condition.as_str()))?;

    let (high_c, low_c) = group.iter().fold((f64::MIN, f64::MAX), |(hi, lo), s| {
        (hi.max(s.temperature_c), lo.min(s.temperature_c))
    });

    Some(DailyAggregate {
        date: date.to_string(),
        high_c,
        low_c,
        dominant_condition: dominant_condition.to_string(),
    })
}

/// Most frequent value. On a tie the value that reached the top count first wins.
fn dominant<'a>(values: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut best: Option<(&str, usize)> = None;

    for value in values {
        let count = match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => {
                *n += 1;
                *n
            }
            None => {
                counts.push((value, 1));
                1
            }
        };

        if best.is_none_or(|(_, top)| count > top) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value)
}
