use super::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref MOBILE_NUMBER_PATTERN: Regex =
        Regex::new(r"^[0-9+\- ]{0,20}$").expect("mobile number regex");
}

/// The number a member is looked up by. Not unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobileNumber(String);

impl MobileNumber {
    pub fn parse(number: String) -> Result<Self, ValidationError> {
        let number = number.trim();
        if !MOBILE_NUMBER_PATTERN.is_match(number) {
            return Err(ValidationError::new(String::from(
                "Mobile number may only contain digits, spaces, '+' and '-' (max 20 characters)",
            )));
        }
        Ok(Self(number.to_owned()))
    }
}

impl AsRef<String> for MobileNumber {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
