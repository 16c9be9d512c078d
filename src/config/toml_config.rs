use crate::domain::model::Symbology;
use crate::utils::error::{Result, ScanError};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scanner profile loaded from a TOML file. Mirrors the options a live
/// decoder is initialised with: which symbologies to read and how often to
/// attempt a decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanProfile {
    pub profile: ProfileMeta,
    pub decoder: DecoderConfig,
    pub input: Option<InputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderConfig {
    pub readers: Vec<Symbology>,
    pub frequency: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// "lines" for a decoder feed, "wedge" for raw keystrokes.
    pub mode: Option<String>,
}

impl ScanProfile {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScanError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScanError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SCAN_PROFILE_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScanError::ConfigError {
            message: format!("env substitution pattern error: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn readers(&self) -> &[Symbology] {
        &self.decoder.readers
    }

    pub fn wedge_mode(&self) -> bool {
        self.input
            .as_ref()
            .and_then(|i| i.mode.as_deref())
            .map(|m| m == "wedge")
            .unwrap_or(false)
    }
}

impl Validate for ScanProfile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("profile.name", &self.profile.name)?;
        validate_non_empty_list("decoder.readers", &self.decoder.readers)?;

        if let Some(frequency) = self.decoder.frequency {
            validate_positive_number("decoder.frequency", frequency, 1)?;
        }

        if let Some(mode) = self.input.as_ref().and_then(|i| i.mode.as_deref()) {
            let valid_modes = ["lines", "wedge"];
            if !valid_modes.contains(&mode) {
                return Err(ScanError::InvalidConfigValueError {
                    field: "input.mode".to_string(),
                    value: mode.to_string(),
                    reason: format!("Unsupported mode. Valid modes: {}", valid_modes.join(", ")),
                });
            }
        }

        Ok(())
    }
}
