use super::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    pub fn parse(username: String) -> Result<Self, ValidationError> {
        let username = username.trim();
        match username.chars().count() {
            0 => Err(ValidationError::new(
                "Username cannot be empty".to_string(),
            )),
            x if x > 64 => Err(ValidationError::new(
                "Max username length is 64 characters".to_string(),
            )),
            _ => Ok(Self(username.to_owned())),
        }
    }

    pub(crate) fn from_stored(username: String) -> Self {
        Self(username)
    }
}

impl AsRef<String> for Username {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_valid_usernames() {
    for name in ["admin", "a", &"x".repeat(64)] {
        let parsed =
            Username::parse(name.to_string()).expect("Failed to parse username");
        assert_eq!(parsed.as_ref(), name);
    }
}

#[test]
fn test_invalid_usernames() {
    assert_eq!(
        Username::parse("   ".to_string()).unwrap_err().as_ref(),
        "Username cannot be empty"
    );
    assert_eq!(
        Username::parse("x".repeat(65)).unwrap_err().as_ref(),
        "Max username length is 64 characters"
    );
}
