//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the wire types
//! exchanged with the prediction service.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Latest prediction result, replaced wholesale on each submit
    pub result: RwSignal<Option<Prediction>>,
    /// True while a predict request is in flight
    pub loading: RwSignal<bool>,
    /// Error message from the last failed predict call
    pub error: RwSignal<Option<String>>,
    /// Last seen health payload from the service, `None` when unreachable
    pub health: RwSignal<Option<ServiceHealth>>,
    /// Timestamp of the last completed health check
    pub last_checked: RwSignal<Option<i64>>,
    /// Model metadata, fetched once on mount
    pub model_info: RwSignal<Option<ModelInfo>>,
}

/// One set of sensor readings, as submitted to `POST /predict`.
///
/// Immutable once built; a fresh value is constructed on every submit.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SensorReading {
    pub pm25: f64,
    pub pm10: f64,
    pub so2: f64,
    pub no2: f64,
    pub co: f64,
    pub o3: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub pressure: f64,
}

impl SensorReading {
    /// Build a reading from raw field values in form order
    /// (pm25, pm10, so2, no2, co, o3, temperature, humidity,
    /// wind_speed, pressure).
    pub fn from_values(values: [f64; 10]) -> Self {
        let [pm25, pm10, so2, no2, co, o3, temperature, humidity, wind_speed, pressure] = values;
        Self {
            pm25,
            pm10,
            so2,
            no2,
            co,
            o3,
            temperature,
            humidity,
            wind_speed,
            pressure,
        }
    }
}

/// Prediction returned by the service.
///
/// `level` and `color` are the server's own severity banding; the display
/// prefers them when present and falls back to [`crate::aqi::AqiBand`]
/// otherwise.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Prediction {
    pub aqi: f64,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub pm25: f64,
    pub pm10: f64,
    pub so2: f64,
    pub no2: f64,
    pub co: f64,
    pub o3: f64,
}

impl Prediction {
    /// Severity label to display, server-provided or banded locally.
    pub fn display_level(&self) -> String {
        self.level
            .clone()
            .unwrap_or_else(|| crate::aqi::AqiBand::from_aqi(self.aqi).level().to_string())
    }

    /// Display color, server-provided or banded locally.
    pub fn display_color(&self) -> String {
        self.color
            .clone()
            .unwrap_or_else(|| crate::aqi::AqiBand::from_aqi(self.aqi).color().to_string())
    }

    /// Echoed pollutant readings as (name, value, unit) rows for the
    /// chart and summary cards.
    pub fn pollutants(&self) -> [(&'static str, f64, &'static str); 6] {
        [
            ("PM2.5", self.pm25, "μg/m³"),
            ("PM10", self.pm10, "μg/m³"),
            ("SO2", self.so2, "μg/m³"),
            ("NO2", self.no2, "μg/m³"),
            ("CO", self.co, "mg/m³"),
            ("O3", self.o3, "μg/m³"),
        ]
    }
}

/// Payload from `GET /health`
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

/// Payload from `GET /model-info`
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub output: String,
}

/// Parse one raw form field, substituting 0 for blank or unparseable input.
pub fn parse_reading_value(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        result: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        health: create_rw_signal(None),
        last_checked: create_rw_signal(None),
        model_info: create_rw_signal(None),
    };

    provide_context(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reading_value_coerces_blank_to_zero() {
        assert_eq!(parse_reading_value(""), 0.0);
        assert_eq!(parse_reading_value("   "), 0.0);
    }

    #[test]
    fn test_parse_reading_value_coerces_garbage_to_zero() {
        assert_eq!(parse_reading_value("abc"), 0.0);
        assert_eq!(parse_reading_value("12.5.3"), 0.0);
        assert_eq!(parse_reading_value("1,5"), 0.0);
    }

    #[test]
    fn test_parse_reading_value_passes_floats_through() {
        assert_eq!(parse_reading_value("42"), 42.0);
        assert_eq!(parse_reading_value("3.14"), 3.14);
        assert_eq!(parse_reading_value("-5.2"), -5.2);
        assert_eq!(parse_reading_value(" 7.5 "), 7.5);
    }

    #[test]
    fn test_sensor_reading_serializes_ten_keys() {
        let reading = SensorReading::from_values([
            12.0, 30.0, 5.0, 20.0, 0.8, 40.0, 22.5, 55.0, 3.2, 1013.0,
        ]);
        let json = serde_json::to_value(&reading).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 10);
        for key in [
            "pm25",
            "pm10",
            "so2",
            "no2",
            "co",
            "o3",
            "temperature",
            "humidity",
            "wind_speed",
            "pressure",
        ] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
        assert_eq!(obj["pm25"], 12.0);
        assert_eq!(obj["pressure"], 1013.0);
    }

    #[test]
    fn test_prediction_deserializes_with_server_banding() {
        let json = r##"{
            "aqi": 135.2,
            "level": "Unhealthy for Sensitive Groups",
            "color": "#ff7e00",
            "pm25": 55.0, "pm10": 80.0, "so2": 12.0,
            "no2": 30.0, "co": 1.2, "o3": 60.0
        }"##;
        let prediction: Prediction = serde_json::from_str(json).unwrap();

        assert_eq!(prediction.display_level(), "Unhealthy for Sensitive Groups");
        assert_eq!(prediction.display_color(), "#ff7e00");
    }

    #[test]
    fn test_prediction_falls_back_to_local_bands() {
        let json = r#"{
            "aqi": 42.0,
            "pm25": 8.0, "pm10": 15.0, "so2": 3.0,
            "no2": 10.0, "co": 0.4, "o3": 25.0
        }"#;
        let prediction: Prediction = serde_json::from_str(json).unwrap();

        assert_eq!(prediction.level, None);
        assert_eq!(prediction.display_level(), "Good");
        assert_eq!(prediction.display_color(), "#00e400");
    }

    #[test]
    fn test_pollutant_rows_order() {
        let prediction = Prediction {
            aqi: 60.0,
            level: None,
            color: None,
            pm25: 1.0,
            pm10: 2.0,
            so2: 3.0,
            no2: 4.0,
            co: 5.0,
            o3: 6.0,
        };

        let rows = prediction.pollutants();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], ("PM2.5", 1.0, "μg/m³"));
        assert_eq!(rows[4], ("CO", 5.0, "mg/m³"));
        assert_eq!(rows[5].0, "O3");
    }
}
