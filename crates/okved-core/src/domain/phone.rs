use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Country code plus the leading digit every Russian mobile number carries.
pub const MOBILE_PREFIX: &str = "79";

const COUNTRY_CODE: &str = "7";
const TRUNK_PREFIX: u8 = b'8';

static NON_PHONE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9+]").expect("invalid regex"));
static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("invalid regex"));
static MOBILE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[78]?[-\s]?[(]?[9]?[0-9]{2}[)]?[-\s]?[0-9]{3}[-\s]?[0-9]{2}[-\s]?[0-9]{2}$")
        .expect("invalid regex")
});

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("phone number cannot be empty")]
    EmptyInput { input: String },
    #[error("phone number contains no digits: {input}")]
    NoDigits { input: String },
    #[error("phone number must have 10 or 11 digits (got {actual}): {input}")]
    InvalidLength { input: String, actual: usize },
    #[error("invalid country code: {input}")]
    InvalidCountryCode { input: String },
    #[error("phone number must start with 79 (Russian mobile): {input}")]
    NotMobile { input: String },
    #[error("phone number does not match the Russian mobile format: {input}")]
    FormatMismatch { input: String },
}

impl PhoneError {
    pub fn input(&self) -> &str {
        match self {
            PhoneError::EmptyInput { input }
            | PhoneError::NoDigits { input }
            | PhoneError::InvalidLength { input, .. }
            | PhoneError::InvalidCountryCode { input }
            | PhoneError::NotMobile { input }
            | PhoneError::FormatMismatch { input } => input,
        }
    }
}

/// A Russian mobile number in `+79XXXXXXXXX` form.
///
/// The only way to build one is through [`normalize_phone`], so every value
/// holds exactly eleven digits after the `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalPhone(String);

impl CanonicalPhone {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The eleven digits without the leading `+`.
    pub fn digits(&self) -> &str {
        self.0.trim_start_matches('+')
    }

    /// The nine digits following the `79` prefix.
    pub fn subscriber_digits(&self) -> &str {
        self.digits().get(MOBILE_PREFIX.len()..).unwrap_or_default()
    }
}

impl fmt::Display for CanonicalPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CanonicalPhone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_phone(s)
    }
}

impl TryFrom<String> for CanonicalPhone {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        normalize_phone(&value)
    }
}

impl From<CanonicalPhone> for String {
    fn from(phone: CanonicalPhone) -> Self {
        phone.0
    }
}

pub fn normalize_phone(raw: &str) -> Result<CanonicalPhone, PhoneError> {
    if raw.trim().is_empty() {
        return Err(PhoneError::EmptyInput {
            input: raw.to_string(),
        });
    }

    let cleaned = NON_PHONE_CHARS.replace_all(raw, "");
    let digits = DIGIT_RUN
        .find(&cleaned)
        .map(|found| found.as_str())
        .ok_or_else(|| PhoneError::NoDigits {
            input: raw.to_string(),
        })?;

    let full = match digits.len() {
        10 => format!("{COUNTRY_CODE}{digits}"),
        11 => match digits.as_bytes()[0] {
            TRUNK_PREFIX => format!("{COUNTRY_CODE}{}", &digits[1..]),
            b'7' => digits.to_string(),
            _ => {
                return Err(PhoneError::InvalidCountryCode {
                    input: raw.to_string(),
                })
            }
        },
        actual => {
            return Err(PhoneError::InvalidLength {
                input: raw.to_string(),
                actual,
            })
        }
    };

    if !full.starts_with(MOBILE_PREFIX) {
        return Err(PhoneError::NotMobile {
            input: raw.to_string(),
        });
    }

    let formatted = format!("+{full}");
    if !MOBILE_SHAPE.is_match(&formatted) {
        return Err(PhoneError::FormatMismatch {
            input: raw.to_string(),
        });
    }

    Ok(CanonicalPhone(formatted))
}

#[cfg(test)]
mod tests {
    use super::{normalize_phone, CanonicalPhone, PhoneError};

    #[test]
    fn normalize_phone_replaces_trunk_prefix() {
        let phone = normalize_phone("89001234567").unwrap();
        assert_eq!(phone.as_str(), "+79001234567");
    }

    #[test]
    fn normalize_phone_strips_formatting() {
        let phone = normalize_phone("+7 (900) 123-45-67").unwrap();
        assert_eq!(phone.as_str(), "+79001234567");
    }

    #[test]
    fn normalize_phone_adds_country_code_to_ten_digits() {
        let phone = normalize_phone("900 123 45 67").unwrap();
        assert_eq!(phone.as_str(), "+79001234567");
    }

    #[test]
    fn normalize_phone_keeps_country_code() {
        let phone = normalize_phone("  79001234567 ").unwrap();
        assert_eq!(phone.as_str(), "+79001234567");
    }

    #[test]
    fn normalize_phone_rejects_blank() {
        let err = normalize_phone("   ").unwrap_err();
        assert!(matches!(err, PhoneError::EmptyInput { .. }));
        assert_eq!(err.input(), "   ");
    }

    #[test]
    fn normalize_phone_rejects_input_without_digits() {
        let err = normalize_phone("call me").unwrap_err();
        assert_eq!(
            err,
            PhoneError::NoDigits {
                input: "call me".to_string()
            }
        );
    }

    #[test]
    fn normalize_phone_rejects_short_numbers() {
        let err = normalize_phone("123").unwrap_err();
        assert_eq!(
            err,
            PhoneError::InvalidLength {
                input: "123".to_string(),
                actual: 3
            }
        );
    }

    #[test]
    fn normalize_phone_uses_first_digit_run_only() {
        // a second '+' survives cleanup and splits the digit run
        let err = normalize_phone("+7900+1234567").unwrap_err();
        assert!(matches!(err, PhoneError::InvalidLength { actual: 4, .. }));
    }

    #[test]
    fn normalize_phone_rejects_extension_suffix() {
        let err = normalize_phone("8 900 123 45 67 12").unwrap_err();
        assert!(matches!(err, PhoneError::InvalidLength { actual: 13, .. }));
    }

    #[test]
    fn normalize_phone_rejects_foreign_country_code() {
        let err = normalize_phone("+1 900 123 45 67").unwrap_err();
        assert!(matches!(err, PhoneError::InvalidCountryCode { .. }));
    }

    #[test]
    fn normalize_phone_rejects_landline() {
        let err = normalize_phone("8 (495) 123-45-67").unwrap_err();
        assert!(matches!(err, PhoneError::NotMobile { .. }));
    }

    #[test]
    fn canonical_phone_exposes_digit_views() {
        let phone: CanonicalPhone = "8 999 123 45 67".parse().unwrap();
        assert_eq!(phone.digits(), "79991234567");
        assert_eq!(phone.subscriber_digits(), "991234567");
        assert_eq!(phone.to_string(), "+79991234567");
    }

    #[test]
    fn canonical_phone_serializes_as_string() {
        let phone = normalize_phone("9991234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+79991234567\"");
        let back: CanonicalPhone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phone);
        assert!(serde_json::from_str::<CanonicalPhone>("\"123\"").is_err());
    }
}
