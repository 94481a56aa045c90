use super::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used for join dates and bill dates, e.g. `05/03/2025`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const YEAR_MIN: i32 = 1900;
const YEAR_MAX: i32 = 9999;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i32")]
pub struct Year(i32);

impl Year {
    pub fn parse(year: i32) -> Result<Self, ValidationError> {
        match year {
            y if y < YEAR_MIN => Err(ValidationError::new(format!(
                "Year cannot be before {YEAR_MIN}"
            ))),
            y if y > YEAR_MAX => Err(ValidationError::new(format!(
                "Year cannot be after {YEAR_MAX}"
            ))),
            _ => Ok(Self(year)),
        }
    }

    pub fn current() -> Self {
        Self(Local::now().year())
    }

    /// Year of a `DD/MM/YYYY` date string, if it parses.
    pub fn from_date_string(date: &str) -> Option<Self> {
        NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .ok()
            .and_then(|date| Self::parse(date.year()).ok())
    }

    pub fn value_of(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Year {
    type Error = ValidationError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        Self::parse(year)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn today_date_string() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}
