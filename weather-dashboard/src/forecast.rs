use chrono::{DateTime, FixedOffset};
use common::models::{DailyForecastEntry, DailyTemp, ForecastResponse, MonthlyForecast};
use std::collections::HashSet;

/// How many 3-hour samples to request per forecast call.
pub const SAMPLES_PER_REQUEST: u32 = 40;

/// Fold chronological 3-hour samples into one entry per calendar date, dated
/// in the forecast city's own timezone.
///
/// The first sample seen for a date seeds the whole entry, min and max
/// included; later samples for that date are dropped, so the entry reflects
/// that one sample rather than true daily extremes. This keeps the
/// dashboard's long-standing behavior; tests pin it.
pub fn aggregate_daily(response: ForecastResponse) -> MonthlyForecast {
    let offset = FixedOffset::east_opt(response.city.timezone as i32)
        .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());

    let mut seen: HashSet<String> = HashSet::new();
    let mut days: Vec<DailyForecastEntry> = Vec::new();

    for sample in &response.list {
        let Some(timestamp) = DateTime::from_timestamp(sample.dt, 0) else {
            continue;
        };
        let date = timestamp.with_timezone(&offset).format("%Y-%m-%d").to_string();

        if !seen.insert(date) {
            continue;
        }

        days.push(DailyForecastEntry {
            dt: sample.dt,
            temp: DailyTemp {
                day: sample.main.temp,
                min: sample.main.temp_min,
                max: sample.main.temp_max,
            },
            humidity: sample.main.humidity,
            weather: sample.weather.clone(),
            speed: sample.wind.speed,
            rain: sample
                .rain
                .and_then(|r| r.three_hours)
                .unwrap_or(0.0),
        });
    }

    MonthlyForecast {
        city: response.city,
        cod: response.cod,
        message: 0,
        cnt: days.len(),
        list: days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::{
        Coord, ForecastCity, ForecastSample, MainMetrics, Precipitation, WeatherCondition, Wind,
    };
    use serde_json::{Map, json};

    fn sample(dt: i64, temp: f64, rain_3h: Option<f64>) -> ForecastSample {
        ForecastSample {
            dt,
            main: MainMetrics {
                temp,
                feels_like: temp - 1.0,
                temp_min: temp - 2.0,
                temp_max: temp + 2.0,
                pressure: 1013,
                humidity: 70,
                sea_level: None,
                grnd_level: None,
            },
            weather: vec![WeatherCondition {
                id: 800,
                main: "Clear".to_string(),
                description: "clear sky".to_string(),
                icon: "01d".to_string(),
            }],
            wind: Wind {
                speed: 4.1,
                deg: 180,
                gust: None,
            },
            rain: rain_3h.map(|v| Precipitation {
                one_hour: None,
                three_hours: Some(v),
            }),
            extra: Map::new(),
        }
    }

    fn response(timezone: i64, list: Vec<ForecastSample>) -> ForecastResponse {
        ForecastResponse {
            city: ForecastCity {
                id: 2643743,
                name: "London".to_string(),
                coord: Coord {
                    lat: 51.5074,
                    lon: -0.1278,
                },
                country: "GB".to_string(),
                timezone,
                extra: Map::new(),
            },
            cod: json!("200"),
            cnt: list.len() as i64,
            list,
            extra: Map::new(),
        }
    }

    // 2024-01-01T00:00:00Z
    const MIDNIGHT: i64 = 1_704_067_200;
    const THREE_HOURS: i64 = 3 * 3600;
    const ONE_DAY: i64 = 24 * 3600;

    #[test]
    fn one_entry_per_distinct_date_in_first_seen_order() {
        let samples: Vec<_> = (0..16)
            .map(|i| sample(MIDNIGHT + i * THREE_HOURS, 280.0 + i as f64, None))
            .collect();

        let out = aggregate_daily(response(0, samples));

        // 16 samples x 3h = 48h = exactly two calendar dates
        assert_eq!(out.cnt, 2);
        assert_eq!(out.list.len(), 2);
        assert_eq!(out.list[0].dt, MIDNIGHT);
        assert_eq!(out.list[1].dt, MIDNIGHT + ONE_DAY);
        assert_eq!(out.message, 0);
        assert_eq!(out.cod, json!("200"));
    }

    #[test]
    fn entry_is_seeded_from_first_sample_and_later_samples_are_dropped() {
        // Second sample on the same day is much warmer; the current policy
        // ignores it, so min/max stay those of the midnight sample.
        let samples = vec![
            sample(MIDNIGHT, 275.0, None),
            sample(MIDNIGHT + THREE_HOURS, 295.0, None),
        ];

        let out = aggregate_daily(response(0, samples));

        assert_eq!(out.list.len(), 1);
        let day = &out.list[0];
        assert_eq!(day.temp.day, 275.0);
        assert_eq!(day.temp.min, 273.0);
        assert_eq!(day.temp.max, 277.0);
    }

    #[test]
    fn rain_defaults_to_zero_when_the_seed_sample_has_none() {
        let dry = aggregate_daily(response(0, vec![sample(MIDNIGHT, 280.0, None)]));
        assert_eq!(dry.list[0].rain, 0.0);

        let wet = aggregate_daily(response(0, vec![sample(MIDNIGHT, 280.0, Some(0.62))]));
        assert_eq!(wet.list[0].rain, 0.62);
    }

    #[test]
    fn dates_are_bucketed_in_the_city_timezone() {
        // 23:00 UTC and 01:00 UTC next day: same date at UTC+2, two dates at UTC.
        let late = MIDNIGHT - 3600;
        let samples = vec![sample(late, 280.0, None), sample(late + 2 * 3600, 281.0, None)];

        let utc = aggregate_daily(response(0, samples.clone()));
        assert_eq!(utc.list.len(), 2);

        let ahead = aggregate_daily(response(2 * 3600, samples));
        assert_eq!(ahead.list.len(), 1);
    }

    #[test]
    fn empty_sample_list_yields_empty_forecast() {
        let out = aggregate_daily(response(0, vec![]));
        assert_eq!(out.cnt, 0);
        assert!(out.list.is_empty());
    }
}
