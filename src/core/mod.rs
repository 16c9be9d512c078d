pub mod ean;
pub mod keypad;
pub mod scanner;

pub use crate::domain::model::{ScanReport, Symbology, Validation};
pub use crate::domain::ports::{CandidateSource, ConfigProvider};
pub use crate::utils::error::Result;
