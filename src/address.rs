use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Hex-encoded EVM contract address, `0x` followed by 40 hex digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContractAddress(String);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractAddressError {
    #[error("{0} is not a valid contract address")]
    Match(String),
    #[error("Contract address regex error")]
    Regex(#[from] regex::Error),
}

impl ContractAddress {
    const PATTERN: &'static str = r"^0x[a-fA-F0-9]{40}$";

    /// # Errors
    ///
    /// Will fail if `raw` doesn't match the address regex, i.e. it has
    /// to start with "0x" followed by 40 hexadecimal digits.
    pub fn new(raw: &str) -> Result<Self, ContractAddressError> {
        let re = Regex::new(Self::PATTERN)?;

        if re.is_match(raw) {
            Ok(Self(raw.into()))
        } else {
            Err(ContractAddressError::Match(raw.to_string()))
        }
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContractAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "0x0c1d86d34e469770339b53613f3a2343accd62cb";

    #[test]
    fn test_valid_address() {
        assert!(ContractAddress::new(VALID).is_ok());
    }

    #[test]
    fn test_valid_address_mixed_case() {
        let addr = "0x0C1D86d34E469770339B53613F3A2343AccD62cB";
        assert!(ContractAddress::new(addr).is_ok());
    }

    #[test]
    fn test_invalid_address_pattern() {
        assert!(ContractAddress::new("0xGHIJKL").is_err());
    }

    #[test]
    fn test_invalid_address_no_prefix() {
        assert!(ContractAddress::new("0c1d86d34e469770339b53613f3a2343accd62cb").is_err());
    }

    #[test]
    fn test_invalid_address_wrong_length() {
        assert!(ContractAddress::new("0x0c1d86d34e469770339b53613f3a2343accd62").is_err());
        assert!(ContractAddress::new(&format!("{VALID}ab")).is_err());
    }

    #[test]
    fn test_empty_address() {
        assert!(ContractAddress::new("").is_err());
    }

    #[test]
    fn test_address_display() {
        let address = ContractAddress::new(VALID).unwrap();
        assert_eq!(format!("{address}"), VALID);
    }

    #[test]
    fn test_address_as_ref() {
        let address = ContractAddress::new(VALID).unwrap();
        let as_str: &str = address.as_ref();
        assert_eq!(as_str, VALID);
    }

    #[test]
    fn test_address_error_display() {
        let error = ContractAddressError::Match("bogus".to_string());
        assert_eq!(format!("{error}"), "bogus is not a valid contract address");
    }
}
