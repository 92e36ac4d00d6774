//! Week strip navigation.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::day_key::DayKey;

/// First day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Tuesday => Weekday::Tue,
            WeekStart::Wednesday => Weekday::Wed,
            WeekStart::Thursday => Weekday::Thu,
            WeekStart::Friday => Weekday::Fri,
            WeekStart::Saturday => Weekday::Sat,
        }
    }
}

/// Seven consecutive days beginning on the configured first weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    first: NaiveDate,
}

impl Week {
    /// The week that contains `anchor`.
    pub fn containing(anchor: NaiveDate, start: WeekStart) -> Self {
        let anchor_idx = anchor.weekday().num_days_from_sunday();
        let start_idx = start.weekday().num_days_from_sunday();
        let offset = (anchor_idx + 7 - start_idx) % 7;

        Week {
            first: anchor - Duration::days(offset as i64),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| self.first + Duration::days(i as i64))
    }

    pub fn keys(&self) -> [DayKey; 7] {
        self.days().map(DayKey::from_date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date < self.first + Duration::days(7)
    }

    pub fn previous(&self) -> Self {
        Week {
            first: self.first - Duration::days(7),
        }
    }

    pub fn next(&self) -> Self {
        Week {
            first: self.first + Duration::days(7),
        }
    }
}

/// The 7 dates of the week containing `anchor`, in order.
pub fn current_week(anchor: NaiveDate, start: WeekStart) -> [NaiveDate; 7] {
    Week::containing(anchor, start).days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sunday_week_around_a_monday() {
        // 2024-06-10 is a Monday
        let days = current_week(date(2024, 6, 10), WeekStart::Sunday);

        assert_eq!(days[0], date(2024, 6, 9));
        assert_eq!(days[6], date(2024, 6, 15));
        assert_eq!(days[0].weekday(), Weekday::Sun);
    }

    #[test]
    fn anchor_on_first_weekday_starts_the_week() {
        let days = current_week(date(2024, 6, 9), WeekStart::Sunday);
        assert_eq!(days[0], date(2024, 6, 9));

        let days = current_week(date(2024, 6, 10), WeekStart::Monday);
        assert_eq!(days[0], date(2024, 6, 10));
    }

    #[test]
    fn monday_week_around_a_sunday() {
        let days = current_week(date(2024, 6, 9), WeekStart::Monday);
        assert_eq!(days[0], date(2024, 6, 3));
        assert_eq!(days[6], date(2024, 6, 9));
    }

    #[test]
    fn days_are_consecutive_and_contain_the_anchor() {
        for start in [WeekStart::Sunday, WeekStart::Wednesday, WeekStart::Saturday] {
            let anchor = date(2024, 12, 31);
            let week = Week::containing(anchor, start);
            let days = week.days();

            assert!(days.contains(&anchor));
            assert!(week.contains(anchor));
            assert_eq!(days[0].weekday(), start.weekday());
            for pair in days.windows(2) {
                assert_eq!(pair[1] - pair[0], Duration::days(1));
            }
        }
    }

    #[test]
    fn previous_and_next_shift_by_seven_days() {
        let week = Week::containing(date(2024, 6, 10), WeekStart::Sunday);

        assert_eq!(week.next().first_day(), date(2024, 6, 16));
        assert_eq!(week.previous().first_day(), date(2024, 6, 2));
        assert_eq!(week.next().previous(), week);
        assert!(!week.next().contains(date(2024, 6, 10)));
    }

    #[test]
    fn keys_match_days() {
        let week = Week::containing(date(2024, 6, 10), WeekStart::Sunday);
        assert_eq!(week.keys()[0].as_str(), "2024-06-09");
        assert_eq!(week.keys()[6].as_str(), "2024-06-15");
    }

    #[test]
    fn week_start_deserializes_lowercase() {
        let start: WeekStart = serde_json::from_str("\"monday\"").unwrap();
        assert_eq!(start, WeekStart::Monday);
        assert_eq!(WeekStart::default(), WeekStart::Sunday);
    }
}
