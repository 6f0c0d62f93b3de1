mod atomic_write;
pub mod file_header;
mod kv_store;
mod save_error;
mod save_plugin;


pub use kv_store::{KeyValueStore, StoreEntry, HIGHSCORE_KEY};
pub use save_error::SaveError;
pub use save_plugin::{
    load_highscore, persist_highscore, HighscoreStore, SavePlugin, SaveSettings,
    DEFAULT_SAVE_PATH,
};
