use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Barcode symbology a candidate can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    Ean8,
    Ean13,
}

impl Symbology {
    /// Total digit count, check digit included.
    pub fn digits(&self) -> usize {
        match self {
            Symbology::Ean8 => 8,
            Symbology::Ean13 => 13,
        }
    }

    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            8 => Some(Symbology::Ean8),
            13 => Some(Symbology::Ean13),
            _ => None,
        }
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbology::Ean8 => write!(f, "EAN-8"),
            Symbology::Ean13 => write!(f, "EAN-13"),
        }
    }
}

/// Outcome of classifying one candidate. `validate` collapses this to a
/// bool; callers that need to distinguish a malformed candidate from a
/// checksum mismatch read the variant directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Validation {
    Valid { symbology: Symbology },
    InvalidLength,
    InvalidCharacter,
    ChecksumMismatch { symbology: Symbology },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid { .. })
    }
}

/// Result of a scan run: the first accepted candidate plus how many were
/// rejected before it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub code: String,
    pub symbology: Symbology,
    pub rejected: usize,
    pub scanned_at: DateTime<Utc>,
}

impl ScanReport {
    pub fn new(code: String, symbology: Symbology, rejected: usize) -> Self {
        Self {
            code,
            symbology,
            rejected,
            scanned_at: Utc::now(),
        }
    }
}
