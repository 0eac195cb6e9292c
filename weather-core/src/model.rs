use serde::{Deserialize, Deserializer, Serialize};

/// Display convention selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Keyword the provider expects in the `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Interpret a form selector. Absent or unrecognized values fall
    /// back to metric, the form's default.
    pub fn from_form(value: Option<&str>) -> Self {
        match value {
            Some("imperial") => UnitSystem::Imperial,
            _ => UnitSystem::Metric,
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one provider round trip: either a parsed observation or
/// an error in the provider's own `{cod, message}` shape. Synthesized
/// errors (missing credential, transport failure) use the same shape,
/// so the normalizer handles every failure the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderReply {
    Observation(Observation),
    Error(ProviderError),
}

/// Error payload as the provider reports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderError {
    #[serde(deserialize_with = "status_code")]
    pub cod: u16,
    #[serde(default)]
    pub message: Option<String>,
}

impl ProviderError {
    /// Synthesized reply for a request short-circuited on a missing
    /// credential. No network call is made.
    pub fn missing_key() -> Self {
        ProviderError {
            cod: 401,
            message: Some("API Key is missing".to_string()),
        }
    }

    /// Synthesized reply for transport-level failures: connect errors,
    /// timeouts, unparseable payloads.
    pub fn unreachable() -> Self {
        ProviderError {
            cod: 500,
            message: Some("Network error or API is unreachable".to_string()),
        }
    }
}

/// The provider encodes `cod` as a number in success payloads but as a
/// string in error payloads ("404"). Accept both.
fn status_code<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Number(u16),
        Text(String),
    }

    match Code::deserialize(deserializer)? {
        Code::Number(n) => Ok(n),
        Code::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Successful current-weather payload. Every field the normalizer reads
/// is optional: a payload missing any of them still deserializes, and
/// the gaps surface as placeholder values in the display record.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Observation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub wind: Option<WindReadings>,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    #[serde(default)]
    pub sys: Option<SysInfo>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MainReadings {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WindReadings {
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ConditionEntry {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SysInfo {
    #[serde(default)]
    pub country: Option<String>,
}

/// Render-ready output of the pipeline. Exactly one of the two shapes
/// is ever produced; a record never carries both a report and an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DisplayRecord {
    Report(WeatherReport),
    Error { error: String },
}

/// Flat, pre-formatted summary for rendering. Holds no reference back
/// to the provider payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature: String,
    pub feels_like: String,
    pub description: String,
    pub icon: String,
    pub humidity: String,
    pub wind_speed: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_system_as_str_matches_provider_keywords() {
        assert_eq!(UnitSystem::Metric.as_str(), "metric");
        assert_eq!(UnitSystem::Imperial.as_str(), "imperial");
    }

    #[test]
    fn form_value_defaults_to_metric() {
        assert_eq!(UnitSystem::from_form(None), UnitSystem::Metric);
        assert_eq!(UnitSystem::from_form(Some("")), UnitSystem::Metric);
        assert_eq!(UnitSystem::from_form(Some("kelvin")), UnitSystem::Metric);
        assert_eq!(
            UnitSystem::from_form(Some("imperial")),
            UnitSystem::Imperial
        );
    }

    #[test]
    fn provider_error_accepts_string_cod() {
        let err: ProviderError =
            serde_json::from_str(r#"{"cod": "404", "message": "city not found"}"#)
                .expect("string cod should deserialize");

        assert_eq!(err.cod, 404);
        assert_eq!(err.message.as_deref(), Some("city not found"));
    }

    #[test]
    fn provider_error_accepts_numeric_cod() {
        let err: ProviderError =
            serde_json::from_str(r#"{"cod": 401}"#).expect("numeric cod should deserialize");

        assert_eq!(err.cod, 401);
        assert_eq!(err.message, None);
    }

    #[test]
    fn observation_tolerates_missing_fields() {
        let observation: Observation =
            serde_json::from_str("{}").expect("empty payload should deserialize");

        assert_eq!(observation.name, None);
        assert!(observation.weather.is_empty());
        assert_eq!(observation.main, None);
    }
}
