//! Command-line glue for the review pipeline. Each subcommand corresponds
//! to one stage; `run` chains all of them.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use wrp_core::config::{
    DEFAULT_CATEGORIZED_PATH, DEFAULT_RESULTS_PATH, DEFAULT_REVIEWS_CSV_PATH,
};
use wrp_core::{CategoryTable, ScrapeConfig};
use wrp_export::{apply_labels, flatten, load_results, write_rows, CategorizedCatalog, FieldDefaults};

/// The original capture batch: one product page per category of interest.
const DEFAULT_TARGETS: [&str; 6] = [
    "https://www.walmart.com/ip/Apple-MacBook-Air-13-3-inch-Laptop-Space-Gray-M1-Chip-8GB-RAM-256GB-storage/609040889?classType=VARIANT&athbdg=L1102&from=/search",
    "https://www.walmart.com/ip/BTFL-3QT-AIRFRY-ROSE/7843623654?classType=VARIANT",
    "https://www.walmart.com/ip/CeraVe-Intensive-Moisturizing-Body-Lotion-with-Hydro-Urea-for-Dry-Skin-Itch-Relief-16-oz/5404617849?adsRedirect=true",
    "https://www.walmart.com/ip/Renwick-Faux-Leather-Barrel-Accent-Chair-Set-of-2-Black/721105679?athAsset=eyJhdGhjcGlkIjoiNzIxMTA1Njc5IiwiYXRoc3RpZCI6IkNTMDIwIiwiYXRoYW5jaWQiOiJJdGVtQ2Fyb3VzZWwiLCJhdGhyayI6MC4wfQ==&athena=true",
    "https://www.walmart.com/ip/CANADA-WEATHER-GEAR-Men-s-Flannel-Shirt-Casual-Button-Down-Long-Sleeve-Sweatshirts-for-Men-M-XXL/8439708559?classType=VARIANT",
    "https://www.walmart.com/ip/Sofia-Jeans-Women-s-Plus-Size-Eva-Skinny-Ankle-Jeans-Sizes-14W-28W/12874873369?classType=VARIANT",
];

#[derive(Debug, Parser)]
#[command(name = "wrp")]
#[command(about = "Walmart product review pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch product pages and write the raw results artifact.
    Scrape {
        #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
        out: PathBuf,
        /// Product page URLs; defaults to the built-in batch.
        urls: Vec<String>,
    },
    /// Bucket scraped products into the six fixed categories.
    Categorize {
        #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
        input: PathBuf,
        #[arg(long, default_value = DEFAULT_CATEGORIZED_PATH)]
        out: PathBuf,
    },
    /// Flatten categorized products into the review CSV.
    Export {
        #[arg(long, default_value = DEFAULT_CATEGORIZED_PATH)]
        input: PathBuf,
        #[arg(long, default_value = DEFAULT_REVIEWS_CSV_PATH)]
        out: PathBuf,
    },
    /// Add the binary sentiment label column to the review CSV, in place.
    Label {
        #[arg(long, default_value = DEFAULT_REVIEWS_CSV_PATH)]
        file: PathBuf,
    },
    /// Run the whole chain: scrape, categorize, export, label.
    Run {
        /// Product page URLs; defaults to the built-in batch.
        urls: Vec<String>,
    },
}

fn target_urls(urls: Vec<String>) -> Vec<String> {
    if urls.is_empty() {
        DEFAULT_TARGETS.iter().map(|s| (*s).to_string()).collect()
    } else {
        urls
    }
}

async fn scrape(urls: Vec<String>, out: &Path) -> anyhow::Result<()> {
    let config = ScrapeConfig::default();
    wrp_scraper::pipeline::run(&config, &target_urls(urls), out).await?;
    Ok(())
}

fn categorize(input: &Path, out: &Path) -> anyhow::Result<()> {
    let results = load_results(input)?;
    let catalog = CategorizedCatalog::from_results(results, &CategoryTable::default());
    catalog.persist(out)?;
    Ok(())
}

fn export(input: &Path, out: &Path) -> anyhow::Result<()> {
    let catalog = CategorizedCatalog::load(input)?;
    let rows = flatten(&catalog, &FieldDefaults::default());
    write_rows(&rows, out)?;
    Ok(())
}

fn label(file: &Path) -> anyhow::Result<()> {
    apply_labels(file)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape { out, urls } => scrape(urls, &out).await?,
        Commands::Categorize { input, out } => categorize(&input, &out)?,
        Commands::Export { input, out } => export(&input, &out)?,
        Commands::Label { file } => label(&file)?,
        Commands::Run { urls } => {
            let results_path = PathBuf::from(DEFAULT_RESULTS_PATH);
            let categorized_path = PathBuf::from(DEFAULT_CATEGORIZED_PATH);
            let csv_path = PathBuf::from(DEFAULT_REVIEWS_CSV_PATH);

            scrape(urls, &results_path).await?;
            categorize(&results_path, &categorized_path)?;
            export(&categorized_path, &csv_path)?;
            label(&csv_path)?;
        }
    }

    Ok(())
}
