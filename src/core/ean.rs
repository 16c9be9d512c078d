//! EAN-8 / EAN-13 check-digit validation (GS1 modulo-10 scheme).
//!
//! Pure functions, no state. Everything that is not exactly 8 or 13 decimal
//! digits is rejected here, so callers can feed raw decoder output straight
//! through without pre-filtering.

use crate::domain::model::{Symbology, Validation};
use crate::utils::error::{Result, ScanError};

/// Weight of the payload digit at `index` for the given symbology.
///
/// EAN-13 weighs even positions 1 and odd positions 3; EAN-8 is the
/// opposite. The two parities are part of the GS1 definition and must not
/// be merged into one scheme.
fn weight(symbology: Symbology, index: usize) -> u32 {
    match symbology {
        Symbology::Ean13 => {
            if index % 2 == 0 {
                1
            } else {
                3
            }
        }
        Symbology::Ean8 => {
            if index % 2 == 0 {
                3
            } else {
                1
            }
        }
    }
}

/// Check digit for a payload of `symbology.digits() - 1` digit values.
pub fn check_digit(payload: &[u8], symbology: Symbology) -> Result<u8> {
    let expected_len = symbology.digits() - 1;
    if payload.len() != expected_len {
        return Err(ScanError::ValidationError {
            message: format!(
                "{} check digit requires a {}-digit payload, got {}",
                symbology,
                expected_len,
                payload.len()
            ),
        });
    }
    if let Some(d) = payload.iter().find(|&&d| d > 9) {
        return Err(ScanError::ValidationError {
            message: format!("payload contains non-digit value {}", d),
        });
    }

    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * weight(symbology, i))
        .sum();

    Ok(((10 - (sum % 10)) % 10) as u8)
}

/// Classify a raw candidate string.
///
/// Length and character class are checked before any arithmetic: anything
/// that is not 8 or 13 characters long is `InvalidLength`, anything with a
/// non-digit character is `InvalidCharacter`. No trimming, no repair.
pub fn classify(code: &str) -> Validation {
    let symbology = match Symbology::from_len(code.len()) {
        Some(s) => s,
        None => return Validation::InvalidLength,
    };
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Validation::InvalidCharacter;
    }

    // All ASCII digits, so bytes map 1:1 to digit values.
    let digits: Vec<u8> = code.bytes().map(|b| b - b'0').collect();
    let (payload, check) = digits.split_at(digits.len() - 1);

    // Length and character class were checked above, so check_digit
    // cannot fail here.
    match check_digit(payload, symbology) {
        Ok(expected) if expected == check[0] => Validation::Valid { symbology },
        Ok(_) => Validation::ChecksumMismatch { symbology },
        Err(_) => Validation::InvalidLength,
    }
}

/// Accept or reject a raw candidate. True only for a structurally valid
/// EAN-8 or EAN-13 code whose check digit matches.
pub fn validate(code: &str) -> bool {
    classify(code).is_valid()
}

/// Append the check digit to a 7-digit (EAN-8) or 12-digit (EAN-13)
/// payload string.
pub fn complete(payload: &str) -> Result<String> {
    if !payload.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScanError::ValidationError {
            message: "payload must contain decimal digits only".to_string(),
        });
    }
    let symbology = match Symbology::from_len(payload.len() + 1) {
        Some(s) => s,
        None => {
            return Err(ScanError::ValidationError {
                message: format!(
                    "payload must have 7 or 12 digits, got {}",
                    payload.len()
                ),
            })
        }
    };

    let digits: Vec<u8> = payload.bytes().map(|b| b - b'0').collect();
    let check = check_digit(&digits, symbology)?;

    let mut code = payload.to_string();
    code.push((b'0' + check) as char);
    Ok(code)
}
