//! Configuration for the FinSecure console
//!
//! Settings live in `<config_dir>/finsecure/config.toml`. A missing or broken
//! file is never fatal: defaults are used and the problem is logged.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, resolve_base_url, API_URL_ENV};
pub use types::*;
