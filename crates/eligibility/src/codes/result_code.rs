use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Outcome classification for a single eligibility inquiry.
///
/// Variants are declared in their stable catalog order. The wire value is what goes into
/// serialized messages and log lines; the display label is what humans read. The two
/// happen to be identical for every code today but are kept as separate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EligibilityResultCode {
    Success,
    ValidationFailure,
    PayerTimeout,
    PayerNotSupported,
    SystemError,
    PayerEnrollmentRequired,
    ProviderEnrollmentRequired,
    ProductRequired,
}

impl EligibilityResultCode {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Success,
            Self::ValidationFailure,
            Self::PayerTimeout,
            Self::PayerNotSupported,
            Self::SystemError,
            Self::PayerEnrollmentRequired,
            Self::ProviderEnrollmentRequired,
            Self::ProductRequired,
        ]
    }

    pub const fn wire_value(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::ValidationFailure => "VALIDATION_FAILURE",
            Self::PayerTimeout => "PAYER_TIMEOUT",
            Self::PayerNotSupported => "PAYER_NOT_SUPPORTED",
            Self::SystemError => "SYSTEM_ERROR",
            Self::PayerEnrollmentRequired => "PAYER_ENROLLMENT_REQUIRED",
            Self::ProviderEnrollmentRequired => "PROVIDER_ENROLLMENT_REQUIRED",
            Self::ProductRequired => "PRODUCT_REQUIRED",
        }
    }

    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::ValidationFailure => "VALIDATION_FAILURE",
            Self::PayerTimeout => "PAYER_TIMEOUT",
            Self::PayerNotSupported => "PAYER_NOT_SUPPORTED",
            Self::SystemError => "SYSTEM_ERROR",
            Self::PayerEnrollmentRequired => "PAYER_ENROLLMENT_REQUIRED",
            Self::ProviderEnrollmentRequired => "PROVIDER_ENROLLMENT_REQUIRED",
            Self::ProductRequired => "PRODUCT_REQUIRED",
        }
    }

    /// Decode a wire value. Matching is exact: no trimming, no case folding.
    pub fn parse(value: &str) -> Result<Self, UnknownResultCode> {
        Self::ordered()
            .into_iter()
            .find(|code| code.wire_value() == value)
            .ok_or_else(|| UnknownResultCode(value.to_string()))
    }
}

impl fmt::Display for EligibilityResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}

impl FromStr for EligibilityResultCode {
    type Err = UnknownResultCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for EligibilityResultCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.wire_value())
    }
}

impl<'de> Deserialize<'de> for EligibilityResultCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Raised when an external string does not name any known result code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown eligibility result code '{0}'")]
pub struct UnknownResultCode(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn wire_values_match_published_table() {
        let expected = [
            "SUCCESS",
            "VALIDATION_FAILURE",
            "PAYER_TIMEOUT",
            "PAYER_NOT_SUPPORTED",
            "SYSTEM_ERROR",
            "PAYER_ENROLLMENT_REQUIRED",
            "PROVIDER_ENROLLMENT_REQUIRED",
            "PRODUCT_REQUIRED",
        ];

        let actual: Vec<&str> = EligibilityResultCode::ordered()
            .into_iter()
            .map(EligibilityResultCode::wire_value)
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn wire_values_are_unique_and_untrimmed() {
        let mut seen = HashSet::new();
        for code in EligibilityResultCode::ordered() {
            let value = code.wire_value();
            assert_eq!(value, value.trim());
            assert!(seen.insert(value), "duplicate wire value {value}");
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn display_label_currently_mirrors_wire_value() {
        for code in EligibilityResultCode::ordered() {
            assert_eq!(code.to_string(), code.wire_value());
            assert_eq!(code.display_label(), code.wire_value());
        }
    }

    #[test]
    fn parse_accepts_every_wire_value() {
        for code in EligibilityResultCode::ordered() {
            assert_eq!(EligibilityResultCode::parse(code.wire_value()), Ok(code));
        }
        assert_eq!(
            "PAYER_TIMEOUT".parse::<EligibilityResultCode>(),
            Ok(EligibilityResultCode::PayerTimeout)
        );
    }

    #[test]
    fn parse_rejects_case_and_whitespace_variants() {
        for raw in ["success", " SUCCESS", "SUCCESS\n", "", "BOGUS"] {
            let err = EligibilityResultCode::parse(raw).expect_err("should not decode");
            assert_eq!(err, UnknownResultCode(raw.to_string()));
        }
    }

    #[test]
    fn unknown_code_message_names_the_value() {
        let err = EligibilityResultCode::parse("BOGUS").unwrap_err();
        assert_eq!(err.to_string(), "unknown eligibility result code 'BOGUS'");
    }
}
