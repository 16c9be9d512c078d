pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{LineSource, ReplaySource, WedgeSource};
pub use config::{CliConfig, ScanOptions};
pub use crate::core::ean;
pub use crate::core::keypad::{Key, KeyBuffer};
pub use crate::core::scanner::ScanEngine;
pub use domain::model::{ScanReport, Symbology, Validation};
pub use domain::ports::{CandidateSource, ConfigProvider};
pub use utils::error::{Result, ScanError};
