pub mod toml_config;

use crate::domain::model::Symbology;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ScanError};
use crate::utils::validation::{validate_non_empty_list, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::ScanProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "ean-scan"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Validate EAN-8/EAN-13 codes and scan candidate streams")
)]
pub struct CliConfig {
    /// Codes to validate directly. With none given, candidates are read
    /// from stdin until the first valid one.
    #[cfg_attr(feature = "cli", arg())]
    pub codes: Vec<String>,

    /// Scanner profile TOML file; overrides --readers and --wedge
    #[cfg_attr(feature = "cli", arg(long))]
    pub profile: Option<String>,

    #[cfg_attr(
        feature = "cli",
        arg(long, value_delimiter = ',', default_value = "ean13,ean8")
    )]
    pub readers: Vec<String>,

    /// Treat stdin as raw scanner keystrokes instead of one code per line
    #[cfg_attr(feature = "cli", arg(long))]
    pub wedge: bool,

    /// Emit results as JSON on stdout
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    /// Merge CLI flags with the optional profile file into the options the
    /// engine actually consumes.
    pub fn resolve(&self) -> Result<ScanOptions> {
        if let Some(path) = &self.profile {
            let profile = ScanProfile::from_file(path)?;
            profile.validate()?;
            return Ok(ScanOptions {
                symbologies: profile.readers().to_vec(),
                wedge: profile.wedge_mode(),
                emit_json: self.json,
            });
        }

        let symbologies = self
            .readers
            .iter()
            .map(|name| parse_reader(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(ScanOptions {
            symbologies,
            wedge: self.wedge,
            emit_json: self.json,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.profile.is_none() {
            validate_non_empty_list("readers", &self.readers)?;
        }
        Ok(())
    }
}

fn parse_reader(name: &str) -> Result<Symbology> {
    match name {
        "ean8" => Ok(Symbology::Ean8),
        "ean13" => Ok(Symbology::Ean13),
        other => Err(ScanError::InvalidConfigValueError {
            field: "readers".to_string(),
            value: other.to_string(),
            reason: "Unsupported reader. Valid readers: ean13, ean8".to_string(),
        }),
    }
}

/// Resolved scan options, the engine-facing view of CLI + profile.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub symbologies: Vec<Symbology>,
    pub wedge: bool,
    pub emit_json: bool,
}

impl ConfigProvider for ScanOptions {
    fn symbologies(&self) -> &[Symbology] {
        &self.symbologies
    }
}
