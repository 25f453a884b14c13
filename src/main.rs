use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use fmiscraper::resolve::{DataResolver, HeatingQuery};
use fmiscraper::state::{AppState, DEFAULT_LOCATION};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) build the query: [year] [month 1-12] [location] ──────────
    let now = Utc::now();
    let mut args = std::env::args().skip(1);
    let year = match args.next() {
        Some(arg) => arg.parse().context("year must be an integer")?,
        None => now.year(),
    };
    let month = match args.next() {
        Some(arg) => {
            let m: usize = arg.parse().context("month must be a number from 1 to 12")?;
            m.checked_sub(1).context("month must be a number from 1 to 12")?
        }
        None => now.month0() as usize,
    };
    let location = args.next().unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let query = HeatingQuery {
        year,
        month,
        location,
    };

    // ─── 3) resolve and apply ────────────────────────────────────────
    let resolver = DataResolver::new();
    let mut state = AppState::new();
    let seq = state.begin();
    info!(year = query.year, month = query.month, location = %query.location, "resolving");
    let outcome = resolver.resolve(&query).await;
    state.apply(seq, outcome);

    // ─── 4) render ───────────────────────────────────────────────────
    let view = state.view();
    if let Some(err) = &view.error {
        eprintln!("Error: {err}");
        eprintln!("Known locations: {}", view.locations.join(", "));
        std::process::exit(1);
    }
    if let Some(record) = &view.heating {
        println!("{}", record.location);
        println!("Month: {}", record.month_label);
        println!(
            "Heating requirement: {} degree-days",
            record.heating_requirement
        );
        println!("Data year: {}", record.data_year);
    }

    Ok(())
}
