//! Fetch one page of the TMDB popularity chart and print the raw payload.
//! Usage:
//!   cargo run --bin popular_props -- [page]
//! Requires TMDB_API_KEY in the environment (.env supported).

use anyhow::{Context, Result};
use dotenvy::dotenv;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::env;

const TMDB_BASE: &str = "https://api.themoviedb.org/3";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args: Vec<String> = env::args().collect();
    let page: u32 = match args.get(1) {
        Some(raw) => raw.parse().context("page must be a positive integer")?,
        None => 1,
    };

    let api_key = env::var("TMDB_API_KEY").context("TMDB_API_KEY not set")?;
    let client = Client::new();

    let url = format!("{TMDB_BASE}/movie/popular?language=en-US&page={page}");
    let res = client
        .get(&url)
        .header(CONTENT_TYPE, "application/json;charset=utf-8")
        .bearer_auth(&api_key)
        .send()
        .await
        .context("request failed")?;
    let status = res.status();
    let text = res.text().await.context("reading body failed")?;
    if !status.is_success() {
        anyhow::bail!("{} -> {}", url, text);
    }

    let payload: Value = serde_json::from_str(&text).context("JSON parse failed")?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
