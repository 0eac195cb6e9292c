//! HTML rendering for the single search page.
//!
//! The page is small enough that it is assembled directly; there is no
//! template layer. All interpolated text is escaped.

use weather_core::{DisplayRecord, UnitSystem, WeatherReport};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Render the full page: search form plus, after a lookup, either the
/// weather card or the error message in its place. The submitted city
/// stays in the input either way.
pub fn page(city: &str, units: UnitSystem, record: Option<&DisplayRecord>) -> String {
    let result = match record {
        None => String::new(),
        Some(DisplayRecord::Error { error }) => {
            format!("<p class=\"error\">{}</p>\n", escape(error))
        }
        Some(DisplayRecord::Report(report)) => weather_card(report),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Weather</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n\
         <main>\n\
         <h1>Weather</h1>\n\
         {form}\
         {result}\
         </main>\n\
         </body>\n\
         </html>\n",
        form = search_form(city, units),
        result = result,
    )
}

fn search_form(city: &str, units: UnitSystem) -> String {
    let (metric_selected, imperial_selected) = match units {
        UnitSystem::Metric => (" selected", ""),
        UnitSystem::Imperial => ("", " selected"),
    };

    format!(
        "<form method=\"post\" action=\"/\">\n\
         <input type=\"text\" name=\"city\" placeholder=\"City name\" value=\"{city}\">\n\
         <select name=\"units\">\n\
         <option value=\"metric\"{metric_selected}>Metric (&deg;C, km/h)</option>\n\
         <option value=\"imperial\"{imperial_selected}>Imperial (&deg;F, mph)</option>\n\
         </select>\n\
         <button type=\"submit\">Search</button>\n\
         </form>\n",
        city = escape(city),
    )
}

fn weather_card(report: &WeatherReport) -> String {
    format!(
        "<section class=\"weather\">\n\
         <h2>{location}</h2>\n\
         <img src=\"{ICON_BASE_URL}/{icon}@2x.png\" alt=\"{description}\">\n\
         <p class=\"temp\">{temperature}</p>\n\
         <p>{description}</p>\n\
         <ul>\n\
         <li>Feels like: {feels_like}</li>\n\
         <li>Humidity: {humidity}</li>\n\
         <li>Wind: {wind_speed}</li>\n\
         </ul>\n\
         </section>\n",
        location = escape(&report.location),
        icon = escape(&report.icon),
        description = escape(&report.description),
        temperature = escape(&report.temperature),
        feels_like = escape(&report.feels_like),
        humidity = escape(&report.humidity),
        wind_speed = escape(&report.wind_speed),
    )
}

const STYLE: &str = "\
body{font-family:sans-serif;background:#eef2f5;margin:0}\
main{max-width:28rem;margin:3rem auto;padding:1.5rem;background:#fff;border-radius:8px}\
form{display:flex;gap:.5rem}\
input[type=text]{flex:1;padding:.4rem}\
.weather{text-align:center;margin-top:1.5rem}\
.temp{font-size:2.5rem;margin:.2rem 0}\
.error{color:#b00020;margin-top:1.5rem}";

/// Minimal HTML escaping for text and attribute positions.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::DisplayRecord;

    fn report() -> WeatherReport {
        WeatherReport {
            location: "London, GB".to_string(),
            temperature: "22°C".to_string(),
            feels_like: "20°C".to_string(),
            description: "Scattered Clouds".to_string(),
            icon: "03d".to_string(),
            humidity: "64%".to_string(),
            wind_speed: "18.0 km/h".to_string(),
        }
    }

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<b>"&'</b>"#),
            "&lt;b&gt;&quot;&amp;&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn blank_page_has_form_and_no_result() {
        let html = page("", UnitSystem::Metric, None);

        assert!(html.contains("name=\"city\""));
        assert!(html.contains("<option value=\"metric\" selected>"));
        assert!(!html.contains("class=\"weather\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn submitted_city_is_preserved_and_escaped() {
        let record = DisplayRecord::Error {
            error: "City Not Found".to_string(),
        };
        let html = page("<Lond\"on>", UnitSystem::Imperial, Some(&record));

        assert!(html.contains("value=\"&lt;Lond&quot;on&gt;\""));
        assert!(html.contains("<option value=\"imperial\" selected>"));
        assert!(html.contains("<p class=\"error\">City Not Found</p>"));
    }

    #[test]
    fn report_renders_card_with_icon() {
        let html = page("London", UnitSystem::Metric, Some(&DisplayRecord::Report(report())));

        assert!(html.contains("London, GB"));
        assert!(html.contains("https://openweathermap.org/img/wn/03d@2x.png"));
        assert!(html.contains("18.0 km/h"));
        assert!(!html.contains("class=\"error\""));
    }
}
