use crate::feed;
use crate::grid;
use crate::tmdb::{Movie, TmdbApi, TmdbClient, TmdbError};
use anyhow::Result;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::{io::IsTerminal, sync::Arc, time::Duration};
use tracing::{info, warn};

/// What the shell shows: the fetch prompt, the in-flight spinner, or the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Idle,
    Fetching,
    Populated,
}

impl View {
    fn from_parts(fetching: bool, has_movies: bool) -> Self {
        if fetching {
            View::Fetching
        } else if has_movies {
            View::Populated
        } else {
            View::Idle
        }
    }
}

pub struct App {
    tmdb: Arc<dyn TmdbApi>,
    movies: Vec<Movie>,
    fetching: bool,
}

impl App {
    pub fn new(tmdb: Arc<dyn TmdbApi>) -> Self {
        Self {
            tmdb,
            movies: Vec::new(),
            fetching: false,
        }
    }

    pub fn view(&self) -> View {
        View::from_parts(self.fetching, !self.movies.is_empty())
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Runs one full chart fetch and replaces the movie list with the
    /// result. Failed pages are skipped, so an all-pages-failed fetch
    /// leaves the list empty and the view drops back to [`View::Idle`]
    /// rather than wedging in a fetching state. Returns the failures.
    pub async fn fetch_popular(&mut self) -> Vec<(u32, TmdbError)> {
        self.fetching = true;
        let feed = feed::fetch_popular(self.tmdb.as_ref()).await;
        self.fetching = false;

        if !feed.failed_pages.is_empty() {
            warn!(
                "{} of {} chart pages failed to fetch",
                feed.failed_pages.len(),
                feed::PAGE_COUNT
            );
        }
        if !feed.is_empty() {
            info!("Fetched {} popular movies", feed.movies.len());
        }
        self.movies = feed.movies;
        feed.failed_pages
    }
}

pub async fn run() -> Result<()> {
    let tmdb: Arc<dyn TmdbApi> = Arc::new(TmdbClient::from_env()?);
    let mut app = App::new(tmdb);
    let interactive = std::io::stdin().is_terminal();

    grid::print_banner();

    while app.view() != View::Populated {
        if interactive && !confirm_fetch()? {
            info!("Fetch declined, exiting");
            return Ok(());
        }

        let spinner = fetch_spinner();
        let failed = app.fetch_popular().await;
        spinner.finish_and_clear();

        if app.view() == View::Idle {
            warn!("Fetched no movies ({} pages failed), nothing to show", failed.len());
            if !interactive {
                anyhow::bail!("all {} chart pages failed", feed::PAGE_COUNT);
            }
        }
    }

    grid::print_grid(app.movies());
    Ok(())
}

fn confirm_fetch() -> Result<bool> {
    let go = Confirm::new()
        .with_prompt("Fetch the most popular movies?")
        .default(true)
        .interact()?;
    Ok(go)
}

fn fetch_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.set_message("Fetching popular movies...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
