//! Favorite prompts: a user's bookmarks on their own generated prompts.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FavoriteService;
