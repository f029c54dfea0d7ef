use anyhow::{Context, Result};
use clap::Parser;
use housing_filter::config::SearchConfig;
use housing_filter::filter::{CostKind, FilterSession};
use housing_filter::search::{HttpPropertySource, ResultRetriever, ResultsView};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Find listings near a workplace or school
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Workplace or school address
    #[arg(long, default_value = "")]
    address: String,

    /// Acceptable commute time in minutes (0-80)
    #[arg(long, default_value_t = 0)]
    travel_time: i64,

    /// House type label: 아파트, 오피스텔, 빌라
    #[arg(long = "house-type", value_delimiter = ',')]
    house_types: Vec<String>,

    /// Trade type label: 매매, 전세, 월세
    #[arg(long = "trade-type", value_delimiter = ',')]
    trade_types: Vec<String>,

    /// Deposit or sale price range in won
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    deposit: Option<Vec<i64>>,

    /// Monthly rent range in won
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    monthly: Option<Vec<i64>>,

    /// TIME or BUDGET (시간 or 예산)
    #[arg(long)]
    priority: Option<String>,

    /// Area to search around; defaults to the address
    #[arg(long)]
    area: Option<String>,

    /// Print the detail route of the Nth listing (1-based)
    #[arg(long)]
    select: Option<usize>,

    /// Write the listings to this file as JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut session = FilterSession::new();
    session.set_address(args.address.as_str());
    session.set_travel_time(args.travel_time);
    session.set_house_type(&args.house_types)?;
    session.set_trade_type(&args.trade_types)?;
    if let Some(priority) = &args.priority {
        session.set_priority(priority)?;
    }
    for (kind, range) in [(CostKind::Deposit, &args.deposit), (CostKind::Monthly, &args.monthly)] {
        if let Some([min, max]) = range.as_deref() {
            session.set_cost_range(kind, (*min, *max));
        }
    }

    info!(visible = ?session.visible_ranges(), "Price sliders");

    let (context, route) = session.submit().context("Filter cannot be submitted yet")?;
    info!(path = %route.path(), "Filter complete");

    let config = SearchConfig::from_env()?;
    let source = HttpPropertySource::new(&config).context("Failed to create HTTP client")?;
    let retriever = ResultRetriever::new(source);

    let resolved = args.area.unwrap_or_else(|| context.payload().address.clone());
    let mut view = ResultsView::new();
    view.refresh(&retriever, &context, &resolved).await;

    println!("{}", view.to_string().trim_end());

    if let Some(n) = args.select {
        match view.select(n.saturating_sub(1)) {
            Some(route) => println!("\n→ {}", route.path()),
            None => warn!(n, "No listing at that position"),
        }
    }

    if let Some(path) = args.output {
        let json = serde_json::to_string_pretty(view.items())?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved {} listings to {}", view.items().len(), path.display());
    }

    Ok(())
}
