mod jwks;
mod validator;

pub mod dto;
pub mod handler;
pub mod model;

pub use jwks::JwksClient;
pub use validator::JwtValidator;
