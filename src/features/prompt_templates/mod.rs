//! Prompt templates: reusable prompt text with placeholders.
//!
//! Templates with an owner are private to that owner; templates without one
//! are shared with every user.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/prompt-templates` | Create a template |
//! | GET | `/api/prompt-templates` | List own and shared templates |
//! | GET | `/api/prompt-templates/{id}` | Get one template |
//! | PATCH | `/api/prompt-templates/{id}` | Partially update a template |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::PromptTemplateService;
