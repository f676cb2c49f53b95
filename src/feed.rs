use futures::future::join_all;
use tracing::{debug, error};

use crate::tmdb::{Movie, TmdbApi, TmdbError};

/// Fixed prefetch depth of the popularity chart.
pub const PAGE_COUNT: u32 = 5;

/// Outcome of one full chart fetch: every movie the successful pages
/// returned, in page order, plus a record of the pages that failed.
#[derive(Debug)]
pub struct PopularFeed {
    pub movies: Vec<Movie>,
    pub failed_pages: Vec<(u32, TmdbError)>,
}

impl PopularFeed {
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

/// Fetches pages 1 through [`PAGE_COUNT`] concurrently and flattens the
/// results into one list. Waits for every page to settle; a failed page is
/// logged, recorded and skipped, so the output keeps page order with holes
/// where a page contributed nothing. Never fails as a whole.
pub async fn fetch_popular(tmdb: &dyn TmdbApi) -> PopularFeed {
    let pages = 1..=PAGE_COUNT;
    let outcomes = join_all(pages.clone().map(|page| tmdb.fetch_popular_page(page))).await;

    let mut movies = Vec::new();
    let mut failed_pages = Vec::new();
    for (page, outcome) in pages.zip(outcomes) {
        match outcome {
            Ok(fetched) => {
                debug!("Page {} returned {} movies", fetched.page, fetched.results.len());
                movies.extend(fetched.results);
            }
            Err(e) => {
                error!("Failed to fetch chart page {}: {}", page, e);
                failed_pages.push((page, e));
            }
        }
    }

    PopularFeed {
        movies,
        failed_pages,
    }
}
