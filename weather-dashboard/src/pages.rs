//! Server-rendered pages and HTMX fragments.
//!
//! The dashboard is a single static page that pulls JSON from the API with a
//! little inline script; the `/htmx/*` fragments demonstrate partial-page
//! updates against the same API.

/// Cities offered by the HTMX search demo. A fixed local list, not the live
/// geocoder.
const DEMO_CITIES: [&str; 5] = ["London", "Paris", "New York", "Tokyo", "Beijing"];

pub fn dashboard() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Weather Dashboard</title>
  <style>
    body { font-family: sans-serif; max-width: 720px; margin: 2rem auto; }
    .metric { font-size: 2.5rem; }
    #temp-chart { width: 100%; height: 160px; border: 1px solid #ccc; }
  </style>
</head>
<body>
  <h1>Weather Dashboard</h1>
  <form id="city-form">
    <input id="city-input" name="city" placeholder="City name" autofocus>
    <button type="submit">Search</button>
  </form>
  <div id="current">
    <div id="current-temp" class="metric">--</div>
    <div id="weather-desc">Search for a city to see current conditions.</div>
    <div id="weather-meta"></div>
  </div>
  <canvas id="temp-chart"></canvas>
  <script>
    const form = document.getElementById('city-form');
    form.addEventListener('submit', async (e) => {
      e.preventDefault();
      const city = document.getElementById('city-input').value.trim();
      if (!city) return;
      const resp = await fetch(`/api/weather/${encodeURIComponent(city)}`);
      const data = await resp.json();
      if (!resp.ok) {
        document.getElementById('weather-desc').textContent = data.detail;
        return;
      }
      const celsius = (data.main.temp - 273.15).toFixed(1);
      document.getElementById('current-temp').textContent = `${celsius} °C`;
      document.getElementById('weather-desc').textContent = data.weather[0].description;
      document.getElementById('weather-meta').textContent =
        `${data.location.name}, ${data.location.country} · humidity ${data.main.humidity}%`;
    });
  </script>
</body>
</html>
"#
}

pub fn monthly_dashboard() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Monthly Forecast</title>
  <style>
    body { font-family: sans-serif; max-width: 720px; margin: 2rem auto; }
    .day { border-bottom: 1px solid #eee; padding: .5rem 0; }
  </style>
</head>
<body>
  <h1>Forecast</h1>
  <form id="city-form">
    <input id="city-input" name="city" placeholder="City name" autofocus>
    <button type="submit">Load forecast</button>
  </form>
  <div id="forecast-days"></div>
  <script>
    document.getElementById('city-form').addEventListener('submit', async (e) => {
      e.preventDefault();
      const city = document.getElementById('city-input').value.trim();
      if (!city) return;
      const resp = await fetch(`/api/weather/monthly/${encodeURIComponent(city)}`);
      const data = await resp.json();
      const target = document.getElementById('forecast-days');
      if (!resp.ok) { target.textContent = data.detail; return; }
      target.innerHTML = data.list.map(d => {
        const date = new Date(d.dt * 1000).toISOString().slice(0, 10);
        const temp = (d.temp.day - 273.15).toFixed(1);
        return `<div class="day">${date}: ${temp} °C, ${d.weather[0].description}</div>`;
      }).join('');
    });
  </script>
</body>
</html>
"#
}

pub fn htmx_demo() -> &'static str {
    r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>HTMX Demo</title>
  <script src="https://unpkg.com/htmx.org@1.9.12"></script>
</head>
<body>
  <h1>HTMX Demo</h1>
  <input type="search" name="query" placeholder="Search cities"
         hx-get="/htmx/search" hx-trigger="input changed delay:300ms"
         hx-target="#search-results">
  <div id="search-results"></div>
  <div hx-get="/htmx/weather-card/London" hx-trigger="load" hx-swap="outerHTML"></div>
</body>
</html>
"##
}

/// Case-insensitive substring filter over the demo city list.
pub fn search_results(query: &str) -> String {
    let needle = query.to_lowercase();
    let items: String = DEMO_CITIES
        .iter()
        .filter(|city| city.to_lowercase().contains(&needle))
        .map(|city| {
            format!(
                "  <li hx-get=\"/htmx/weather-card/{}\" hx-target=\"closest ul\" hx-swap=\"outerHTML\">{}</li>\n",
                urlencoding::encode(city),
                escape(city)
            )
        })
        .collect();

    format!("<ul class=\"search-results\">\n{items}</ul>\n")
}

/// A self-loading weather card fragment for one city.
pub fn weather_card(city: &str) -> String {
    let encoded = urlencoding::encode(city);
    format!(
        r#"<div class="weather-card" id="weather-card-{encoded}">
  <h3>{name}</h3>
  <div class="card-temp">--</div>
  <div class="card-desc">loading...</div>
  <script>
    fetch('/api/weather/{encoded}')
      .then(r => r.json().then(data => ({{ ok: r.ok, data }})))
      .then(({{ ok, data }}) => {{
        const card = document.getElementById('weather-card-{encoded}');
        if (!ok) {{ card.querySelector('.card-desc').textContent = data.detail; return; }}
        card.querySelector('.card-temp').textContent = (data.main.temp - 273.15).toFixed(1) + ' °C';
        card.querySelector('.card-desc').textContent = data.weather[0].description;
      }});
  </script>
</div>
"#,
        name = escape(city)
    )
}

/// Minimal HTML entity escaping for user-supplied text.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_exposes_the_expected_dom_ids() {
        let page = dashboard();
        assert!(page.contains("id=\"current-temp\""));
        assert!(page.contains("id=\"weather-desc\""));
        assert!(page.contains("id=\"temp-chart\""));
    }

    #[test]
    fn search_filters_case_insensitively() {
        let results = search_results("lon");
        assert!(results.contains("London"));
        assert!(!results.contains("Paris"));

        let all = search_results("");
        for city in DEMO_CITIES {
            assert!(all.contains(city));
        }
    }

    #[test]
    fn weather_card_escapes_markup_in_city_names() {
        let card = weather_card("<script>alert(1)</script>");
        assert!(!card.contains("<script>alert"));
        assert!(card.contains("&lt;script&gt;"));
    }
}
