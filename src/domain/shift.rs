use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six fixed 4-hour daily slots, starting at 6:00 AM.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Shift {
    #[serde(rename = "6:00 AM - 10:00 AM")]
    EarlyMorning,
    #[serde(rename = "10:00 AM - 2:00 PM")]
    Midday,
    #[serde(rename = "2:00 PM - 6:00 PM")]
    Afternoon,
    #[serde(rename = "6:00 PM - 10:00 PM")]
    Evening,
    #[serde(rename = "10:00 PM - 2:00 AM")]
    Night,
    #[serde(rename = "2:00 AM - 6:00 AM")]
    LateNight,
}

impl Shift {
    pub const ALL: [Shift; 6] = [
        Shift::EarlyMorning,
        Shift::Midday,
        Shift::Afternoon,
        Shift::Evening,
        Shift::Night,
        Shift::LateNight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Shift::EarlyMorning => "6:00 AM - 10:00 AM",
            Shift::Midday => "10:00 AM - 2:00 PM",
            Shift::Afternoon => "2:00 PM - 6:00 PM",
            Shift::Evening => "6:00 PM - 10:00 PM",
            Shift::Night => "10:00 PM - 2:00 AM",
            Shift::LateNight => "2:00 AM - 6:00 AM",
        }
    }

}

impl FromStr for Shift {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .find(|shift| shift.label() == s)
            .copied()
            .ok_or_else(|| ValidationError::new(format!("Invalid shift: {s}")))
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
