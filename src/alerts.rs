//! Weather Alerts
//!
//! Farming alerts from current conditions and from a multi-day forecast.
//! Both generators always return at least one line: when nothing triggers,
//! a reassuring message is emitted instead.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reading::{DEFAULT_HUMIDITY, DEFAULT_TEMPERATURE, DEFAULT_WIND_SPEED};

// ============================================================================
// Current Conditions
// ============================================================================

/// Sea-level pressure (hPa) assumed when the caller omits it
pub const DEFAULT_PRESSURE_HPA: f64 = 1013.0;

/// Current weather snapshot (already fetched by the caller); absent fields
/// take their defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentWeather {
    /// Air temperature (°C)
    pub temp: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Sea-level pressure (hPa)
    pub pressure: f64,
    pub wind_speed: f64,
    /// Rain in the last hour (mm)
    pub rain: f64,
}

impl Default for CurrentWeather {
    fn default() -> Self {
        Self {
            temp: DEFAULT_TEMPERATURE,
            humidity: DEFAULT_HUMIDITY,
            pressure: DEFAULT_PRESSURE_HPA,
            wind_speed: DEFAULT_WIND_SPEED,
            rain: 0.0,
        }
    }
}

pub fn current_conditions_alerts(weather: &CurrentWeather) -> Vec<String> {
    let mut alerts: Vec<String> = Vec::new();

    if weather.temp > 35.0 {
        alerts.push("🌡️ High temperature alert: Consider providing shade for crops and increase irrigation".into());
    } else if weather.temp < 10.0 {
        alerts.push("❄️ Cold temperature alert: Protect sensitive crops from frost damage".into());
    }

    if weather.humidity > 85.0 {
        alerts.push("💧 High humidity alert: Increased risk of fungal diseases - monitor crops closely".into());
    } else if weather.humidity < 30.0 {
        alerts.push("🏜️ Low humidity alert: Increase irrigation frequency to prevent plant stress".into());
    }

    if weather.wind_speed > 25.0 {
        alerts.push("💨 High wind alert: Avoid spraying pesticides and fertilizers".into());
    }

    if weather.rain > 10.0 {
        alerts.push("🌧️ Heavy rain alert: Delay irrigation and outdoor farming activities".into());
    } else if weather.rain > 0.0 {
        alerts.push("🌦️ Light rain detected: Good time for planting, avoid chemical applications".into());
    }

    if weather.pressure < 1000.0 {
        alerts.push("📉 Low pressure system: Expect weather changes, prepare for possible storms".into());
    }

    let ideal = (20.0..=30.0).contains(&weather.temp)
        && (50.0..=70.0).contains(&weather.humidity)
        && weather.wind_speed <= 10.0;
    if ideal {
        alerts.push("✅ Ideal weather conditions for most farming activities".into());
    }

    if alerts.is_empty() {
        alerts.push("🌟 No weather alerts - conditions are normal for farming activities".into());
    }

    alerts
}

// ============================================================================
// Multi-day Forecast
// ============================================================================

/// One forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temp: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub humidity: f64,
    /// Wind speed (m/s)
    pub wind: f64,
    /// Rain (mm)
    pub rain: f64,
}

pub const HOT_DAY_TEMP: f64 = 35.0;
pub const LOW_RAIN_TOTAL_MM: f64 = 5.0;
pub const HEAVY_RAIN_TOTAL_MM: f64 = 50.0;
pub const HIGH_WIND_MS: f64 = 7.0;
pub const LARGE_TEMP_RANGE: f64 = 15.0;

/// "on 2024-06-01" or "on 2024-06-01 and 2 other day(s)"
fn describe_days(dates: &[NaiveDate]) -> String {
    let first = dates[0].format("%Y-%m-%d");
    if dates.len() > 1 {
        format!("on {} and {} other day(s)", first, dates.len() - 1)
    } else {
        format!("on {}", first)
    }
}

pub fn forecast_alerts(forecast: &[DailyForecast]) -> Vec<String> {
    if forecast.is_empty() {
        return vec!["No weather data available for alerts.".to_string()];
    }

    let mut alerts = Vec::new();

    let hot_days: Vec<NaiveDate> = forecast
        .iter()
        .filter(|d| d.max_temp > HOT_DAY_TEMP)
        .map(|d| d.date)
        .collect();
    if !hot_days.is_empty() {
        let verb = if hot_days.len() > 1 { "Temperatures exceeding 35°C expected" } else { "Temperature exceeding 35°C expected" };
        alerts.push(format!(
            "High temperature alert: {} {}. Ensure adequate irrigation.",
            verb,
            describe_days(&hot_days)
        ));
    }

    let total_rain: f64 = forecast.iter().map(|d| d.rain).sum();
    if total_rain < LOW_RAIN_TOTAL_MM {
        alerts.push(format!(
            "Low rainfall alert: Less than 5mm of rain expected in the next {} days. Consider irrigation planning.",
            forecast.len()
        ));
    } else if total_rain > HEAVY_RAIN_TOTAL_MM {
        alerts.push(format!(
            "Heavy rainfall alert: {:.1}mm of rainfall expected in the next {} days. Be prepared for potential waterlogging.",
            total_rain,
            forecast.len()
        ));
    }

    let windy_days: Vec<NaiveDate> = forecast
        .iter()
        .filter(|d| d.wind > HIGH_WIND_MS)
        .map(|d| d.date)
        .collect();
    if !windy_days.is_empty() {
        alerts.push(format!(
            "High wind alert: Wind speeds above 7 m/s expected {}. Not suitable for spraying.",
            describe_days(&windy_days)
        ));
    }

    let avg_humidity = forecast.iter().map(|d| d.humidity).sum::<f64>() / forecast.len() as f64;
    if avg_humidity > 80.0 {
        alerts.push("High humidity alert: Average humidity above 80% expected. Monitor for potential fungal diseases.".to_string());
    } else if avg_humidity < 40.0 {
        alerts.push("Low humidity alert: Average humidity below 40% expected. Plants may face water stress.".to_string());
    }

    let max_temp = forecast.iter().map(|d| d.max_temp).fold(f64::NEG_INFINITY, f64::max);
    let min_temp = forecast.iter().map(|d| d.min_temp).fold(f64::INFINITY, f64::min);
    let temp_range = max_temp - min_temp;
    if temp_range > LARGE_TEMP_RANGE {
        alerts.push(format!(
            "Large temperature variations expected (range of {:.1}°C). Plants may experience stress.",
            temp_range
        ));
    }

    if alerts.is_empty() {
        alerts.push(format!(
            "Weather conditions look favorable for farming activities in the next {} days.",
            forecast.len()
        ));
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(temp: f64, humidity: f64, wind_speed: f64, rain: f64) -> CurrentWeather {
        CurrentWeather { temp, humidity, pressure: 1013.0, wind_speed, rain }
    }

    fn day(offset: u32, max_temp: f64, min_temp: f64, humidity: f64, wind: f64, rain: f64) -> DailyForecast {
        DailyForecast {
            date: NaiveDate::from_ymd_opt(2024, 6, 1 + offset).unwrap(),
            temp: (max_temp + min_temp) / 2.0,
            min_temp,
            max_temp,
            humidity,
            wind,
            rain,
        }
    }

    #[test]
    fn test_ideal_current_conditions() {
        let alerts = current_conditions_alerts(&current(25.0, 60.0, 5.0, 0.0));
        assert_eq!(alerts, vec!["✅ Ideal weather conditions for most farming activities".to_string()]);
    }

    #[test]
    fn test_empty_current_snapshot_uses_defaults() {
        let weather: CurrentWeather = serde_json::from_str("{}").unwrap();
        assert_eq!(weather, CurrentWeather::default());
        assert_eq!(weather.pressure, 1013.0);

        // 25 °C, 60 %, calm
        let alerts = current_conditions_alerts(&weather);
        assert_eq!(alerts, vec!["✅ Ideal weather conditions for most farming activities".to_string()]);
    }

    #[test]
    fn test_normal_current_conditions() {
        let alerts = current_conditions_alerts(&current(15.0, 75.0, 5.0, 0.0));
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].starts_with("🌟 No weather alerts"));
    }

    #[test]
    fn test_stacked_current_alerts() {
        let mut weather = current(38.0, 90.0, 30.0, 12.0);
        weather.pressure = 990.0;
        let alerts = current_conditions_alerts(&weather);
        assert_eq!(alerts.len(), 5);
        assert!(alerts[0].contains("High temperature"));
        assert!(alerts[1].contains("High humidity"));
        assert!(alerts[2].contains("High wind"));
        assert!(alerts[3].contains("Heavy rain"));
        assert!(alerts[4].contains("Low pressure"));
    }

    #[test]
    fn test_light_rain() {
        let alerts = current_conditions_alerts(&current(15.0, 75.0, 5.0, 0.5));
        assert!(alerts[0].contains("Light rain detected"));
    }

    #[test]
    fn test_favorable_forecast() {
        let forecast: Vec<DailyForecast> = (0..7).map(|i| day(i, 28.0, 18.0, 65.0, 4.0, 2.0)).collect();
        let alerts = forecast_alerts(&forecast);
        assert_eq!(
            alerts,
            vec!["Weather conditions look favorable for farming activities in the next 7 days.".to_string()]
        );
    }

    #[test]
    fn test_hot_dry_windy_forecast() {
        let mut forecast: Vec<DailyForecast> = (0..7).map(|i| day(i, 28.0, 18.0, 65.0, 4.0, 0.0)).collect();
        forecast[2].max_temp = 37.0;
        forecast[4].max_temp = 36.0;
        forecast[5].wind = 9.0;

        let alerts = forecast_alerts(&forecast);
        assert_eq!(
            alerts[0],
            "High temperature alert: Temperatures exceeding 35°C expected on 2024-06-03 and 1 other day(s). Ensure adequate irrigation."
        );
        assert!(alerts[1].starts_with("Low rainfall alert"));
        assert_eq!(
            alerts[2],
            "High wind alert: Wind speeds above 7 m/s expected on 2024-06-06. Not suitable for spraying."
        );
        // 37 - 18 = 19 > 15
        assert!(alerts[3].contains("range of 19.0°C"));
    }

    #[test]
    fn test_wet_humid_forecast() {
        let forecast: Vec<DailyForecast> = (0..7).map(|i| day(i, 26.0, 18.0, 88.0, 3.0, 10.0)).collect();
        let alerts = forecast_alerts(&forecast);
        assert!(alerts[0].starts_with("Heavy rainfall alert: 70.0mm"));
        assert!(alerts[1].starts_with("High humidity alert"));
    }

    #[test]
    fn test_empty_forecast() {
        assert_eq!(forecast_alerts(&[]), vec!["No weather data available for alerts.".to_string()]);
    }
}
