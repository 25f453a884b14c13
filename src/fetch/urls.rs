// src/fetch/urls.rs
use url::Url;

/// Base of the FMI heating degree-day product feed. One CSV per year.
static FEED_BASE: &str =
    "http://cdn.fmi.fi/weather-observations/products/heating-degree-days/";

/// URL of the yearly degree-day CSV, e.g.
/// `.../lammitystarveluvut-2023.utf8.csv` for 2023.
pub fn degree_day_csv_url(year: i32) -> Url {
    Url::parse(FEED_BASE)
        .expect("feed base URL should be valid")
        .join(&format!("lammitystarveluvut-{year}.utf8.csv"))
        .expect("year file name should join onto the feed base")
}
