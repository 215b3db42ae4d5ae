//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-empty
//! names, well-formed times of day) so that once a value reaches the domain
//! layer it can be treated as trusted.
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided time of day could not be parsed.
    #[error("invalid time of day: {0}")]
    InvalidTime(String),
    /// Provided calendar date does not exist or could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Provided appointment status is not one of the known values.
    #[error("invalid appointment status: {0}")]
    InvalidStatus(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| TypeConstraintError::NonPositiveId)?;
                Self::new(value)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ClientId, "Unique identifier for a client.");
id_newtype!(AppointmentId, "Unique identifier for an appointment.");

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    ClientName,
    "Client first or last name enforcing trimmed, non-empty values."
);

/// Half of the day used by the 12-hour clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl FromStr for Meridiem {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AM") {
            Ok(Meridiem::Am)
        } else if s.eq_ignore_ascii_case("PM") {
            Ok(Meridiem::Pm)
        } else {
            Err(TypeConstraintError::InvalidTime(s.to_string()))
        }
    }
}

/// Time of day with minute precision.
///
/// Stored as a 24-hour `(hour, minute)` pair so that ordering is
/// chronological. Displayed and serialized in 12-hour form (`"9:00 AM"`),
/// which is the format shown to the user; [`TimeOfDay::to_24_hour`] yields the
/// `"HH:MM"` form used by time input controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

/// Parses a two-digit minute component.
fn parse_minute(raw: &str, input: &str) -> Result<u8, TypeConstraintError> {
    let invalid = || TypeConstraintError::InvalidTime(input.to_string());
    if raw.len() != 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let minute = raw.parse::<u8>().map_err(|_| invalid())?;
    if minute > 59 {
        return Err(invalid());
    }
    Ok(minute)
}

/// Parses a one or two digit hour component.
fn parse_hour(raw: &str, input: &str) -> Result<u8, TypeConstraintError> {
    let invalid = || TypeConstraintError::InvalidTime(input.to_string());
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<u8>().map_err(|_| invalid())
}

impl TimeOfDay {
    /// Builds a time from 24-hour components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TypeConstraintError> {
        if hour > 23 || minute > 59 {
            return Err(TypeConstraintError::InvalidTime(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Parses a 12-hour clock value such as `"9:00 AM"` or `"12:30 pm"`.
    pub fn parse_12_hour(input: &str) -> Result<Self, TypeConstraintError> {
        let invalid = || TypeConstraintError::InvalidTime(input.to_string());
        let (clock, suffix) = input.trim().split_once(' ').ok_or_else(invalid)?;
        let meridiem = suffix.trim().parse::<Meridiem>().map_err(|_| invalid())?;
        let (hours, minutes) = clock.split_once(':').ok_or_else(invalid)?;
        let hour = parse_hour(hours, input)?;
        let minute = parse_minute(minutes, input)?;
        if !(1..=12).contains(&hour) {
            return Err(invalid());
        }

        let hour = match (hour, meridiem) {
            (12, Meridiem::Am) => 0,
            (12, Meridiem::Pm) => 12,
            (h, Meridiem::Am) => h,
            (h, Meridiem::Pm) => h + 12,
        };

        Self::new(hour, minute)
    }

    /// Parses a 24-hour clock value such as `"09:00"` or `"17:15"`.
    pub fn parse_24_hour(input: &str) -> Result<Self, TypeConstraintError> {
        let invalid = || TypeConstraintError::InvalidTime(input.to_string());
        let (hours, minutes) = input.trim().split_once(':').ok_or_else(invalid)?;
        let hour = parse_hour(hours, input)?;
        let minute = parse_minute(minutes, input)?;
        Self::new(hour, minute).map_err(|_| invalid())
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub fn meridiem(self) -> Meridiem {
        if self.hour >= 12 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }

    /// Formats as zero-padded `"HH:MM"`.
    pub fn to_24_hour(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Formats as `"H:MM AM"`.
    pub fn to_12_hour(self) -> String {
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{hour}:{:02} {}", self.minute, self.meridiem().as_str())
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_12_hour())
    }
}

impl FromStr for TimeOfDay {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_12_hour(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_12_hour(&value)
    }
}

impl TryFrom<&str> for TimeOfDay {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_12_hour(value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_12_hour()
    }
}

/// Converts a 12-hour value (`"9:00 AM"`) into the 24-hour form (`"09:00"`).
pub fn convert_to_24_hour(time_12h: &str) -> Result<String, TypeConstraintError> {
    TimeOfDay::parse_12_hour(time_12h).map(TimeOfDay::to_24_hour)
}

/// Converts a 24-hour value (`"13:00"`) into the 12-hour form (`"1:00 PM"`).
pub fn convert_to_12_hour(time_24h: &str) -> Result<String, TypeConstraintError> {
    TimeOfDay::parse_24_hour(time_24h).map(TimeOfDay::to_12_hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_midnight_and_noon_to_24_hour() {
        assert_eq!(convert_to_24_hour("12:00 AM").unwrap(), "00:00");
        assert_eq!(convert_to_24_hour("12:00 PM").unwrap(), "12:00");
        assert_eq!(convert_to_24_hour("1:00 PM").unwrap(), "13:00");
        assert_eq!(convert_to_24_hour("9:05 AM").unwrap(), "09:05");
        assert_eq!(convert_to_24_hour("11:59 PM").unwrap(), "23:59");
    }

    #[test]
    fn converts_24_hour_back_to_12_hour() {
        assert_eq!(convert_to_12_hour("00:00").unwrap(), "12:00 AM");
        assert_eq!(convert_to_12_hour("12:00").unwrap(), "12:00 PM");
        assert_eq!(convert_to_12_hour("09:00").unwrap(), "9:00 AM");
        assert_eq!(convert_to_12_hour("17:15").unwrap(), "5:15 PM");
    }

    #[test]
    fn every_canonical_12_hour_value_round_trips() {
        for meridiem in ["AM", "PM"] {
            for hour in 1..=12 {
                for minute in 0..60 {
                    let input = format!("{hour}:{minute:02} {meridiem}");
                    let as_24 = convert_to_24_hour(&input).unwrap();
                    assert_eq!(convert_to_12_hour(&as_24).unwrap(), input);
                }
            }
        }
    }

    #[test]
    fn rejects_malformed_times() {
        for input in [
            "", "9:00", "13:00 PM", "0:30 AM", "9:0 AM", "9:60 AM", "nine AM", "9:00 XM",
        ] {
            assert!(
                matches!(
                    TimeOfDay::parse_12_hour(input),
                    Err(TypeConstraintError::InvalidTime(_))
                ),
                "{input} should be rejected"
            );
        }
        assert!(TimeOfDay::parse_24_hour("24:00").is_err());
        assert!(TimeOfDay::parse_24_hour("7:5").is_err());
    }

    #[test]
    fn meridiem_is_case_insensitive() {
        let time = TimeOfDay::parse_12_hour("3:10 pm").unwrap();
        assert_eq!(time.to_12_hour(), "3:10 PM");
    }

    #[test]
    fn orders_chronologically_across_meridiem() {
        let mut times: Vec<TimeOfDay> = ["1:00 PM", "9:00 AM", "12:15 AM", "11:30 AM", "12:00 PM"]
            .iter()
            .map(|t| t.parse().unwrap())
            .collect();
        times.sort();
        let labels: Vec<String> = times.into_iter().map(String::from).collect();
        assert_eq!(
            labels,
            vec!["12:15 AM", "9:00 AM", "11:30 AM", "12:00 PM", "1:00 PM"]
        );
    }

    #[test]
    fn time_serializes_as_12_hour_string() {
        let time = TimeOfDay::new(17, 15).unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"5:15 PM\"");
        let parsed: TimeOfDay = serde_json::from_str("\"9:00 AM\"").unwrap();
        assert_eq!(parsed, TimeOfDay::new(9, 0).unwrap());
        assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
    }

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(ClientId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!("7".parse::<AppointmentId>().unwrap().get(), 7);
        assert!("abc".parse::<ClientId>().is_err());
    }

    #[test]
    fn names_are_trimmed_and_non_empty() {
        assert_eq!(ClientName::new("  Emily ").unwrap().as_str(), "Emily");
        assert_eq!(ClientName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn deserializing_goes_through_the_constructors() {
        let name: ClientName = serde_json::from_str("\" Emily \"").unwrap();
        assert_eq!(name.as_str(), "Emily");
        assert!(serde_json::from_str::<ClientName>("\"  \"").is_err());

        assert_eq!(serde_json::from_str::<ClientId>("3").unwrap().get(), 3);
        assert!(serde_json::from_str::<ClientId>("0").is_err());
        assert!(serde_json::from_str::<AppointmentId>("-4").is_err());
        assert_eq!(serde_json::to_string(&ClientId::new(3).unwrap()).unwrap(), "3");
    }
}
