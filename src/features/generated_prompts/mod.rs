//! Generated prompts: one realized prompt per generation event.
//!
//! Prompt text and payloads are stored as received; nothing here produces
//! them. Rows are private to the user who recorded them and immutable.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::GeneratedPromptService;
