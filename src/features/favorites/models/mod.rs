mod favorite;

pub use favorite::UserPromptFavorite;
