use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::debug;

use crate::errors::ServiceError;

const CURRENT_CONDITIONS: &str = "Sunny";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Units {
    #[default]
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherQuery {
    /// City name (e.g. `NYC`) or coordinates (e.g. `40.7,-74.0`)
    pub location: String,
    #[serde(default)]
    pub units: Units,
    #[serde(default)]
    pub include_forecast: bool,
}

impl WeatherQuery {
    pub fn new<S: Into<String>>(location: S) -> Self {
        WeatherQuery {
            location: location.into(),
            units: Units::default(),
            include_forecast: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub day: String,
    pub temp: f64,
    pub conditions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub location: String,
    pub current_temp: f64,
    pub units: Units,
    pub conditions: String,
    pub forecast: Option<Vec<WeatherForecast>>,
}

/// Canned lookup: every location is sunny, the forecast drifts around the current temperature
pub fn lookup_weather(query: &WeatherQuery) -> Result<WeatherResponse, ServiceError> {
    if query.location.trim().is_empty() {
        return Err(ServiceError::InvalidInput(
            "Location cannot be empty".to_string(),
        ));
    }

    let temp = match query.units {
        Units::Fahrenheit => 72.0,
        Units::Celsius => 22.2,
    };

    let forecast = query.include_forecast.then(|| {
        [
            ("Tomorrow", 2.0, "Partly Cloudy"),
            ("Day 2", 1.0, "Sunny"),
            ("Day 3", -1.0, "Cloudy"),
        ]
        .into_iter()
        .map(|(day, delta, conditions)| WeatherForecast {
            day: day.to_string(),
            temp: temp + delta,
            conditions: conditions.to_string(),
        })
        .collect()
    });

    debug!(location = %query.location, units = %query.units, "weather lookup");

    Ok(WeatherResponse {
        location: query.location.clone(),
        current_temp: temp,
        units: query.units,
        conditions: CURRENT_CONDITIONS.to_string(),
        forecast,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_query() {
        let query: WeatherQuery = serde_json::from_value(json!({"location": "London"})).unwrap();
        assert_eq!(query, WeatherQuery::new("London"));

        let response = lookup_weather(&query).unwrap();
        assert_eq!(response.location, "London");
        assert_eq!(response.units, Units::Celsius);
        assert_eq!(response.current_temp, 22.2);
        assert_eq!(response.conditions, "Sunny");
        assert_eq!(response.forecast, None);
    }

    #[test]
    fn test_fahrenheit_forecast() {
        let query = WeatherQuery {
            location: "NYC".to_string(),
            units: Units::Fahrenheit,
            include_forecast: true,
        };

        let response = lookup_weather(&query).unwrap();
        assert_eq!(response.current_temp, 72.0);
        let forecast = response.forecast.unwrap();
        let summary: Vec<_> = forecast
            .iter()
            .map(|f| (f.day.as_str(), f.temp, f.conditions.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Tomorrow", 74.0, "Partly Cloudy"),
                ("Day 2", 73.0, "Sunny"),
                ("Day 3", 71.0, "Cloudy"),
            ]
        );
    }

    #[test]
    fn test_empty_location() {
        let err = lookup_weather(&WeatherQuery::new("   ")).unwrap_err();
        assert_eq!(
            err,
            ServiceError::InvalidInput("Location cannot be empty".to_string())
        );
    }

    #[test]
    fn test_invalid_units_rejected() {
        let result = serde_json::from_value::<WeatherQuery>(
            json!({"location": "Tokyo", "units": "kelvin"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_response_wire_format() {
        let response = lookup_weather(&WeatherQuery::new("Tokyo")).unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["units"], json!("celsius"));
        assert_eq!(value["forecast"], json!(null));
    }
}
