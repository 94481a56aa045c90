use super::ValidationError;
use serde::{Deserialize, Serialize};

/// A member's display name. Empty is allowed: rows are created blank and
/// filled in later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberName(String);

impl MemberName {
    pub fn parse(name: String) -> Result<Self, ValidationError> {
        let name = name.trim();
        match name.chars().count() {
            x if x > 255 => Err(ValidationError::new(
                "Max name length is 255 characters".to_string(),
            )),
            _ => Ok(Self(name.to_owned())),
        }
    }
}

impl AsRef<String> for MemberName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_valid_member_names() {
    let valid_names = ["".to_string(), "a".to_string(), "a".repeat(255)];
    for valid_name in valid_names.iter() {
        let parsed = MemberName::parse(valid_name.to_owned())
            .expect("Failed to parse valid Member name");

        assert_eq!(parsed.as_ref(), valid_name);
    }
}

#[test]
fn test_member_names_are_trimmed() {
    let parsed = MemberName::parse("  Ravi Kumar \n".to_string())
        .expect("Failed to parse padded name");
    assert_eq!(parsed.as_ref(), "Ravi Kumar");
}

#[test]
fn test_long_member_names() {
    let long_name = "a".repeat(256);
    let result = MemberName::parse(long_name);
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Max name length is 255 characters"
    );
}
