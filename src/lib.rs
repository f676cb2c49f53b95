pub mod app;
pub mod feed;
pub mod grid;
pub mod tmdb;
