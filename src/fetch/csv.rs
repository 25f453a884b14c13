// src/fetch/csv.rs
use reqwest::Client;
use tracing::debug;

use super::urls;

/// Download the degree-day CSV for `year` and return the body text.
/// Non-2xx responses are errors. One request per call, no retries;
/// the caller decides whether to ask again.
pub async fn degree_day_csv(client: &Client, year: i32) -> Result<String, reqwest::Error> {
    let url = urls::degree_day_csv_url(year);
    debug!(%url, year, "fetching degree-day CSV");
    client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}
