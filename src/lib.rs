pub mod adapters;
pub mod app;
pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpTextSource;
pub use app::pipelines::tracker_pipeline::TrackerPipeline;
pub use catalog::{Category, StaticDirectory};
pub use config::{cli::LocalStorage, toml_config::TrackerConfig};
pub use core::{etl::TrackerEngine, RecordAssembler, YearWindow};
pub use utils::error::{Result, TrackerError};
