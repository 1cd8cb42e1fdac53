pub mod client;
pub mod version;

pub use client::ModrinthClient;
pub use version::merge_game_versions;
