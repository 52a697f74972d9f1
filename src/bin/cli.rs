//! Launchboard CLI
//!
//! Command-line interface for Launchboard operations:
//! - Check server status
//! - List launch sites
//! - Fetch chart specs
//! - Inspect a launch CSV locally

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use launchboard::charts::ChartSpec;
use launchboard::dataset::Dataset;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launchboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SpaceX launch records dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8050", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show server status
    Status,

    /// List launch sites
    Sites,

    /// Success distribution for all sites or one site
    Pie {
        /// Launch site (default: ALL)
        #[arg(short, long)]
        site: Option<String>,
    },

    /// Launches inside a payload range
    Scatter {
        /// Launch site (default: ALL)
        #[arg(short, long)]
        site: Option<String>,
        /// Exclusive lower payload bound (kg)
        #[arg(long)]
        min: Option<f64>,
        /// Exclusive upper payload bound (kg)
        #[arg(long)]
        max: Option<f64>,
    },

    /// Validate and summarize a launch CSV without a server
    Inspect {
        /// Path to CSV file
        path: PathBuf,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let json = cli.format == "json";

    match cli.command {
        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    if json {
                        println!("{}", serde_json::to_string_pretty(&health)?);
                        return Ok(());
                    }

                    println!("Launchboard v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    if let Some(records) = health["dataset_records"].as_u64() {
                        println!("Launches:   {}", records);
                    }
                    if let Some(sessions) = health["ws_sessions"].as_u64() {
                        println!("Sessions:   {}", sessions);
                    }
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    bail!("API returned error: {}", resp.status());
                }
                Err(e) => {
                    eprintln!("Cannot connect to Launchboard at {}", cli.api_url);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin launchboard");
                    return Err(e).context("connection failed");
                }
            }
        }

        Commands::Sites => {
            let response = client
                .get(format!("{}/api/v1/sites", cli.api_url))
                .send()
                .await
                .context("Failed to reach the API")?;

            if !response.status().is_success() {
                bail!("Failed to fetch sites: {}", response.status());
            }

            let body: serde_json::Value = response.json().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                let sites = body["sites"].as_array().cloned().unwrap_or_default();
                if sites.is_empty() {
                    println!("No launch sites.");
                }
                for site in sites {
                    println!("{}", site.as_str().unwrap_or("-"));
                }
            }
        }

        Commands::Pie { site } => {
            let mut params = Vec::new();
            if let Some(site) = site {
                params.push(("site", site));
            }

            let chart = fetch_chart(
                &client,
                &format!("{}/api/v1/charts/success-distribution", cli.api_url),
                &params,
            )
            .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Scatter { site, min, max } => {
            let mut params = Vec::new();
            if let Some(site) = site {
                params.push(("site", site));
            }
            if let Some(min) = min {
                params.push(("min", min.to_string()));
            }
            if let Some(max) = max {
                params.push(("max", max.to_string()));
            }

            let chart = fetch_chart(
                &client,
                &format!("{}/api/v1/charts/scatter-selection", cli.api_url),
                &params,
            )
            .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Inspect { path } => {
            let dataset = Dataset::load(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            let summary = dataset.summary();

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }

            println!("{}", summary);
            if let (Some(lo), Some(hi)) = (summary.min_payload_kg, summary.max_payload_kg) {
                println!("Payload range: {:.0} - {:.0} kg", lo, hi);
            }
            println!();
            println!("{:<20} {:>9} {:>10}", "Site", "Launches", "Successes");
            println!("{}", "-".repeat(41));
            for site in dataset.launch_sites() {
                let launches = dataset
                    .records()
                    .iter()
                    .filter(|r| r.launch_site == site)
                    .count();
                let successes = dataset
                    .records()
                    .iter()
                    .filter(|r| r.launch_site == site && r.is_success())
                    .count();
                println!("{:<20} {:>9} {:>10}", site, launches, successes);
            }
        }

        Commands::Config { output } => {
            let config = launchboard::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

async fn fetch_chart(
    client: &reqwest::Client,
    url: &str,
    params: &[(&str, String)],
) -> anyhow::Result<ChartSpec> {
    let response = client
        .get(url)
        .query(params)
        .send()
        .await
        .context("Failed to reach the API")?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        bail!("Request failed ({}): {}", status, text);
    }

    Ok(response.json().await?)
}

fn print_chart(chart: &ChartSpec) {
    println!("{}", chart.title());
    println!();

    match chart {
        ChartSpec::Pie(pie) => {
            println!("{:<20} {:>8}", "Label", "Share");
            println!("{}", "-".repeat(29));
            for slice in &pie.slices {
                println!("{:<20} {:>7.1}%", slice.label, slice.value * 100.0);
            }
        }
        ChartSpec::Scatter(scatter) => {
            if scatter.points.is_empty() {
                println!("No launches in range");
                return;
            }
            println!(
                "{:<12} {:>6} {:<10} {}",
                "Payload", "Class", "Booster", "Site"
            );
            println!("{}", "-".repeat(50));
            for point in &scatter.points {
                println!(
                    "{:<12.1} {:>6} {:<10} {}",
                    point.x, point.y, point.category, point.site
                );
            }
        }
        ChartSpec::NoData(no_data) => {
            println!("{}", no_data.message);
        }
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
