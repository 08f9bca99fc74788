pub mod favorite_handler;

pub use favorite_handler::*;
