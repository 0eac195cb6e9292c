use crate::model::{DisplayRecord, ProviderReply, UnitSystem, WeatherReport};

const FALLBACK_ERROR: &str = "An unknown error occurred.";
const FALLBACK_FIELD: &str = "N/A";
const FALLBACK_ICON: &str = "01d";

/// Unit symbols for one display convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSymbols {
    pub temperature: &'static str,
    pub wind_speed: &'static str,
}

/// Fixed two-entry symbol table. Unknown keys get empty symbols rather
/// than an error.
pub fn unit_symbols(units: &str) -> UnitSymbols {
    match units {
        "metric" => UnitSymbols {
            temperature: "°C",
            wind_speed: "km/h",
        },
        "imperial" => UnitSymbols {
            temperature: "°F",
            wind_speed: "mph",
        },
        _ => UnitSymbols {
            temperature: "",
            wind_speed: "",
        },
    }
}

/// Flatten a provider reply into a render-ready record.
///
/// Pure: no I/O, no panics. Missing fields in a successful payload
/// degrade to placeholders instead of failing.
pub fn normalize(reply: &ProviderReply, units: UnitSystem) -> DisplayRecord {
    let observation = match reply {
        ProviderReply::Error(err) => {
            let message = err.message.as_deref().unwrap_or(FALLBACK_ERROR);
            return DisplayRecord::Error {
                error: title_case(message),
            };
        }
        ProviderReply::Observation(observation) => observation,
    };

    let symbols = unit_symbols(units.as_str());

    let main = observation.main.clone().unwrap_or_default();
    let temp = main.temp.unwrap_or(0.0);
    let feels_like = main.feels_like.unwrap_or(0.0);
    let humidity = main.humidity.unwrap_or(0);

    let mut wind_speed = observation
        .wind
        .as_ref()
        .and_then(|wind| wind.speed)
        .unwrap_or(0.0);
    // The provider reports wind in m/s for metric queries but already
    // in mph for imperial ones, so only metric needs converting.
    if units == UnitSystem::Metric {
        wind_speed *= 3.6;
    }

    let condition = observation.weather.first();
    let description = condition
        .and_then(|entry| entry.description.as_deref())
        .unwrap_or(FALLBACK_FIELD);
    let icon = condition
        .and_then(|entry| entry.icon.as_deref())
        .unwrap_or(FALLBACK_ICON);

    let name = observation.name.as_deref().unwrap_or(FALLBACK_FIELD);
    let country = observation
        .sys
        .as_ref()
        .and_then(|sys| sys.country.as_deref())
        .unwrap_or(FALLBACK_FIELD);

    DisplayRecord::Report(WeatherReport {
        location: format!("{name}, {country}"),
        temperature: format!("{temp:.0}{}", symbols.temperature),
        feels_like: format!("{feels_like:.0}{}", symbols.temperature),
        description: title_case(description),
        icon: icon.to_string(),
        humidity: format!("{humidity}%"),
        wind_speed: format!("{wind_speed:.1} {}", symbols.wind_speed),
    })
}

/// Uppercase the first letter of every alphabetic run and lowercase the
/// rest: "city not found" -> "City Not Found".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }

    out
}
