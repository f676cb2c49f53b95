use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::env;
use thiserror::Error;

const TMDB_BASE: &str = "https://api.themoviedb.org/3";
const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// How many movies TMDB packs into one chart page.
pub const PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
}

#[async_trait]
pub trait TmdbApi: Send + Sync {
    async fn fetch_popular_page(&self, page: u32) -> Result<PopularPage, TmdbError>;
}

/// One page of the popularity chart, as returned by the API. Fields the
/// endpoint sends beyond these (total_pages, total_results) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PopularPage {
    pub page: u32,
    pub results: Vec<Movie>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub release_date: String,
    pub original_language: String,
    pub genre_ids: Vec<i32>,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: u32,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub adult: bool,
    pub video: bool,
}

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("JSON parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Movie {
    /// Full poster URL on the image CDN, when the chart entry has a poster.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|p| format!("{POSTER_BASE}{p}"))
    }
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let api_key = env::var("TMDB_API_KEY").context("TMDB_API_KEY not set")?;
        Ok(Self::new(api_key))
    }
}

#[async_trait]
impl TmdbApi for TmdbClient {
    async fn fetch_popular_page(&self, page: u32) -> Result<PopularPage, TmdbError> {
        let url = format!("{TMDB_BASE}/movie/popular?language=en-US&page={page}");
        self.get_json(&url).await
    }
}

impl TmdbClient {
    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, TmdbError> {
        let res = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json;charset=utf-8")
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(TmdbError::Status { status, body: text });
        }
        let parsed: T = serde_json::from_str(&text)?;
        Ok(parsed)
    }
}
