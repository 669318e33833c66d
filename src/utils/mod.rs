pub mod albumflat_toml;
pub mod config;
pub mod logger;

pub use albumflat_toml::{apply_file_to_opts, load_albumflat_toml};
pub use config::*;
pub use logger::{Colors, setup_logging};
