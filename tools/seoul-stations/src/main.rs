use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod normalize;

use normalize::rows_from_response;

#[derive(Parser, Debug)]
#[command(
    name = "seoul-stations",
    author,
    version,
    about = "Build the stations.json directory from the Seoul open-data subway listing",
    long_about = "Fetches the SearchSTNBySubwayLineInfo listing from \
                  openapi.seoul.go.kr (or reads a saved response), normalizes \
                  line labels, deduplicates (station, line) pairs, and writes \
                  the JSON dataset the station directory loads at startup."
)]
struct Args {
    /// Output JSON file for the station directory
    #[arg(short, long)]
    output: PathBuf,

    /// Read a saved API response instead of fetching
    #[arg(long, conflicts_with = "api_key")]
    input: Option<PathBuf>,

    /// Seoul open-data API key for a live fetch
    #[arg(long, env = "SEOUL_API_KEY")]
    api_key: Option<String>,

    /// First row to request (live fetch)
    #[arg(long, default_value_t = 1)]
    start: u32,

    /// Last row to request; the full network fits well under 1000 rows
    #[arg(long, default_value_t = 1000)]
    end: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let response: serde_json::Value = if let Some(path) = &args.input {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).context("saved response is not valid JSON")?
    } else if let Some(key) = &args.api_key {
        let url = format!(
            "http://openapi.seoul.go.kr:8088/{key}/json/SearchSTNBySubwayLineInfo/{}/{}/",
            args.start, args.end
        );
        log::info!("fetching station listing rows {}..={}", args.start, args.end);
        reqwest::get(&url)
            .await?
            .error_for_status()?
            .json()
            .await
            .context("station listing response is not valid JSON")?
    } else {
        bail!("either --input or --api-key (or SEOUL_API_KEY) is required");
    };

    let rows = rows_from_response(&response)?;
    if rows.is_empty() {
        bail!("no usable station rows in the response");
    }

    log::info!("writing {} station rows to {}", rows.len(), args.output.display());
    let json = serde_json::to_string_pretty(&rows)?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("writing {}", args.output.display()))?;

    Ok(())
}
