// SPDX-License-Identifier: MIT

//!
//! Matching and grouping dated records against calendar days
//!
//! Only exactly known dates can be placed on a calendar day.  An estimate is
//! never matched to a day (not even when its start year lines up) as that
//! would show precision the record doesn't have.  Estimates belong in year and
//! period listings instead (see [`period_only`]).
//!

use crate::{CalendarDate, DateEstimate};
use std::collections::BTreeMap;

/// Implementing types are records (history events, calendar items, people...)
/// that may carry a [`DateEstimate`]
pub trait HasDateEstimate {
    /// Get the record's date, if it has one
    fn date_estimate(&self) -> Option<&DateEstimate>;
}

impl HasDateEstimate for DateEstimate {
    fn date_estimate(&self) -> Option<&DateEstimate> {
        Some(self)
    }
}

impl<T: HasDateEstimate> HasDateEstimate for &T {
    fn date_estimate(&self) -> Option<&DateEstimate> {
        (**self).date_estimate()
    }
}

impl DateEstimate {
    /// Whether this is a known date falling on `day`.  Always false for an
    /// estimate
    pub fn matches_day(&self, day: &CalendarDate) -> bool {
        match self {
            DateEstimate::Known { date } => date.is_same_day(day),
            DateEstimate::Estimated { .. } => false,
        }
    }
}

/// Whether the record has a known date falling on `day`
pub fn matches_day<E: HasDateEstimate>(entity: &E, day: &CalendarDate) -> bool {
    entity
        .date_estimate()
        .is_some_and(|estimate| estimate.matches_day(day))
}

/// The records that fall on `day`, in their original order
pub fn events_on_day<'a, E: HasDateEstimate>(entities: &'a [E], day: &CalendarDate) -> Vec<&'a E> {
    entities
        .iter()
        .filter(|entity| matches_day(*entity, day))
        .collect()
}

/// Group the records with known dates by day.  Records within a day keep
/// their original order, and records without a known date are left out
pub fn group_by_day<E: HasDateEstimate>(entities: &[E]) -> BTreeMap<CalendarDate, Vec<&E>> {
    let mut groups: BTreeMap<CalendarDate, Vec<&E>> = BTreeMap::new();
    for entity in entities {
        if let Some(date) = entity.date_estimate().and_then(DateEstimate::date) {
            groups.entry(date).or_default().push(entity);
        }
    }
    groups
}

/// The seven days beginning with `start`.  Days past [`crate::MAX_YEAR`]
/// repeat the last representable day
pub fn week_from(start: CalendarDate) -> [CalendarDate; 7] {
    let mut week = [start; 7];
    for offset in 1..7 {
        week[offset] = week[offset - 1].succ_days(1).unwrap_or(week[offset - 1]);
    }
    week
}

/// The records falling on each of the seven days beginning with `start`.
/// Every day is included, even those without any records
pub fn group_by_week<E: HasDateEstimate>(
    entities: &[E],
    start: CalendarDate,
) -> Vec<(CalendarDate, Vec<&E>)> {
    week_from(start)
        .into_iter()
        .map(|day| (day, events_on_day(entities, &day)))
        .collect()
}

/// The records that can't be placed on a calendar day (estimates and records
/// without a date), in their original order
pub fn period_only<E: HasDateEstimate>(entities: &[E]) -> Vec<&E> {
    entities
        .iter()
        .filter(|entity| !entity.date_estimate().is_some_and(DateEstimate::is_known))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{MAX_YEAR, Precision, Year};
    use heritage_dates_macros::{date, year};

    #[derive(Debug, PartialEq)]
    struct CalendarItem {
        name: &'static str,
        date: Option<DateEstimate>,
    }

    impl HasDateEstimate for CalendarItem {
        fn date_estimate(&self) -> Option<&DateEstimate> {
            self.date.as_ref()
        }
    }

    fn item(name: &'static str, date: Option<DateEstimate>) -> CalendarItem {
        CalendarItem { name, date }
    }

    fn names(items: &[&CalendarItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.name).collect()
    }

    fn items() -> Vec<CalendarItem> {
        vec![
            item("hastings", Some(DateEstimate::known(date!("1066-10-14")))),
            item("undated", None),
            item(
                "estimate",
                Some(DateEstimate::estimated(
                    Precision::Year,
                    Some(year!(1066)),
                    None,
                )),
            ),
            item("coronation", Some(DateEstimate::known(date!("1066-12-25")))),
            item("hastings again", Some(DateEstimate::known(date!("1066-10-14")))),
            item("range", Some(DateEstimate::range(year!(1000), year!(1100)))),
        ]
    }

    #[test]
    fn known_dates_match_their_day() {
        let hastings = DateEstimate::known(date!("1066-10-14"));
        assert!(hastings.matches_day(&date!("1066-10-14")));
        assert!(!hastings.matches_day(&date!("1066-10-15")));
        assert!(!hastings.matches_day(&date!("1067-10-14")));
        assert!(matches_day(&hastings, &date!("1066-10-14")));
    }

    #[test]
    fn estimates_never_match_a_day() {
        let day = date!("1066-01-01");
        for precision in [
            Precision::Year,
            Precision::Decade,
            Precision::Century,
            Precision::Millennium,
            Precision::Unknown,
        ] {
            let estimate =
                DateEstimate::estimated(precision, Some(year!(1066)), Some(year!(1066)));
            assert!(!estimate.matches_day(&day));
            assert!(!matches_day(&estimate, &day));
        }

        // A record without any date doesn't match either
        assert!(!matches_day(&item("undated", None), &day));
    }

    #[test]
    fn on_day() {
        let items = items();
        let on_day = events_on_day(&items, &date!("1066-10-14"));
        assert_eq!(names(&on_day), vec!["hastings", "hastings again"]);
        assert!(events_on_day(&items, &date!("1066-01-01")).is_empty());
    }

    #[test]
    fn by_day() {
        let items = items();
        let groups = group_by_day(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            names(&groups[&date!("1066-10-14")]),
            vec!["hastings", "hastings again"]
        );
        assert_eq!(names(&groups[&date!("1066-12-25")]), vec!["coronation"]);

        let days: Vec<CalendarDate> = groups.keys().copied().collect();
        assert_eq!(days, vec![date!("1066-10-14"), date!("1066-12-25")]);
    }

    #[test]
    fn by_week() {
        let items = items();
        let week = group_by_week(&items, date!("1066-12-22"));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].0, date!("1066-12-22"));
        assert_eq!(week[6].0, date!("1066-12-28"));
        for (day, on_day) in &week {
            if *day == date!("1066-12-25") {
                assert_eq!(names(on_day), vec!["coronation"]);
            } else {
                assert!(on_day.is_empty());
            }
        }
    }

    #[test]
    fn week_crosses_months_and_years() {
        let week = week_from(date!("1999-12-29"));
        assert_eq!(week[2], date!("1999-12-31"));
        assert_eq!(week[3], date!("2000-01-01"));
        assert_eq!(week[6], date!("2000-01-04"));

        let last = CalendarDate::from(30, 12, MAX_YEAR).unwrap();
        let week = week_from(last);
        assert_eq!(week[1].day().value(), 31);
        assert_eq!(week[6], week[1]);
    }

    #[test]
    fn period_listings() {
        let items = items();
        assert_eq!(
            names(&period_only(&items)),
            vec!["undated", "estimate", "range"]
        );
    }

    #[test]
    fn references() {
        let items = items();
        let refs: Vec<&CalendarItem> = items.iter().collect();
        let on_day = events_on_day(&refs, &date!("1066-12-25"));
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0].name, "coronation");
    }
}
