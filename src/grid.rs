use crate::feed;
use crate::tmdb::{self, Movie};
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;

/// One rendered grid entry. Keyed by the movie's unique id, not its title;
/// chart entries sharing a title stay distinct tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub key: i32,
    pub title: String,
    pub popularity: f64,
    pub poster: Option<String>,
}

pub fn tiles(movies: &[Movie]) -> Vec<Tile> {
    movies
        .iter()
        .map(|movie| Tile {
            key: movie.id,
            title: movie.title.clone(),
            popularity: movie.popularity,
            poster: movie.poster_url(),
        })
        .collect()
}

pub fn movie_table(movies: &[Movie]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Id").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Popularity").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Poster").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold),
    ]);
    for tile in tiles(movies) {
        let poster = match tile.poster {
            Some(url) => Cell::new(url),
            None => Cell::new("no poster").fg(comfy_table::Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(tile.key),
            Cell::new(tile.title),
            Cell::new(tile.popularity),
            poster,
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

pub fn print_banner() {
    println!();
    println!("{}{}", "themovie".bold(), "db".bright_blue().bold());
    println!(
        "Confirm to fetch the {} most popular movies right now.",
        feed::PAGE_COUNT * tmdb::PAGE_SIZE
    );
    println!();
}

pub fn print_grid(movies: &[Movie]) {
    println!("{}", movie_table(movies));
    println!("{}", format!("Showing {} movies.", movies.len()).bright_black());
}
