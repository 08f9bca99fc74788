//! Prompt jobs: a history of generation attempts.
//!
//! The service records jobs and reads them back. Nothing here runs a job
//! or moves its status after the row is written.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::PromptJobService;
