pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, AppConfig, CliConfig};
pub use core::{engine::RosterEngine, parser::RosterParser};
pub use utils::error::{Result, RosterError};
