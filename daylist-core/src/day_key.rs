//! Canonical `YYYY-MM-DD` keys for calendar days.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{DayListError, DayListResult};

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Key identifying one local calendar day in the store.
///
/// Always holds a zero-padded `YYYY-MM-DD` string naming a real date, so the
/// derived ordering is chronological.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(String);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DayKey(date.format(DAY_KEY_FORMAT).to_string())
    }

    /// Key for the calendar day of `instant`, read in the instant's own offset.
    /// Time of day is ignored.
    pub fn from_datetime<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self::from_date(instant.date_naive())
    }

    /// Key for today on the local clock.
    pub fn today() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn parse(s: &str) -> DayListResult<Self> {
        // chrono also reads signed extended years like "+262142-12-31"
        if s.len() != 10 || !s.as_bytes()[..4].iter().all(u8::is_ascii_digit) {
            return Err(DayListError::InvalidDayKey(s.to_string()));
        }

        let date = NaiveDate::parse_from_str(s, DAY_KEY_FORMAT)
            .map_err(|_| DayListError::InvalidDayKey(s.to_string()))?;

        // chrono accepts unpadded fields like "2024-6-1"; keys must be canonical
        let key = Self::from_date(date);
        if key.0 != s {
            return Err(DayListError::InvalidDayKey(s.to_string()));
        }

        Ok(key)
    }

    pub fn date(&self) -> NaiveDate {
        // Constructors only admit strings that parsed as dates
        NaiveDate::parse_from_str(&self.0, DAY_KEY_FORMAT).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Format a date as its store key.
pub fn to_day_key(date: NaiveDate) -> DayKey {
    DayKey::from_date(date)
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl FromStr for DayKey {
    type Err = DayListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DayKey {
    type Error = DayListError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.0
    }
}

impl AsRef<str> for DayKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
