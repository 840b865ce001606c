use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// length of one daily slot on the simulated weekly timeline.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// the days of the simulated week in timeline order. Monday sits at offset 0.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// weekly service pattern of a service id, as found in calendar.txt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub service_id: String,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// the date range a calendar is valid for. two trips serving the same weekday
/// belong to the same variant of a route's week iff their ranges are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ServiceVariant {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Calendar {
    /// builds a calendar from flags in [`WEEKDAYS`] order.
    pub fn new(
        service_id: &str,
        flags: [bool; 7],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = flags;
        Self {
            service_id: service_id.to_string(),
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
            start_date,
            end_date,
        }
    }

    /// active flags in [`WEEKDAYS`] order.
    pub fn weekday_flags(&self) -> [bool; 7] {
        [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ]
    }

    pub fn is_active(&self, day: Weekday) -> bool {
        self.weekday_flags()[day.num_days_from_monday() as usize]
    }

    /// active weekdays, Monday first.
    pub fn active_weekdays(&self) -> Vec<Weekday> {
        WEEKDAYS
            .into_iter()
            .filter(|day| self.is_active(*day))
            .collect()
    }

    pub fn num_active_days(&self) -> usize {
        self.weekday_flags().iter().filter(|f| **f).count()
    }

    pub fn variant(&self) -> ServiceVariant {
        ServiceVariant {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("test invariant failed: invalid date")
    }

    #[test]
    fn test_active_weekdays_in_week_order() {
        let flags = [false, true, false, false, true, false, true];
        let calendar = Calendar::new("svc", flags, date(2024, 1, 1), date(2024, 6, 30));
        assert_eq!(
            calendar.active_weekdays(),
            vec![Weekday::Tue, Weekday::Fri, Weekday::Sun]
        );
        assert_eq!(calendar.num_active_days(), 3);
        assert!(calendar.is_active(Weekday::Fri));
        assert!(!calendar.is_active(Weekday::Mon));
    }

    #[test]
    fn test_variant_compares_date_ranges() {
        let term = Calendar::new("a", [true; 7], date(2024, 1, 8), date(2024, 5, 31));
        let same = Calendar::new("b", [false; 7], date(2024, 1, 8), date(2024, 5, 31));
        let holiday = Calendar::new("c", [true; 7], date(2024, 6, 1), date(2024, 8, 31));
        assert_eq!(term.variant(), same.variant());
        assert_ne!(term.variant(), holiday.variant());
    }
}
