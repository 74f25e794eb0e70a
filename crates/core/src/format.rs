// SPDX-License-Identifier: MIT

//!
//! Human readable labels for dates and date estimates
//!
//! Everything here is total: missing or partial data gives an explicit
//! "unknown" label rather than an error.
//!

use crate::{CalendarDate, DateEstimate, Precision, Year};
use std::fmt;

/// BC (negative years) or AD (zero and positive years)
#[derive(derive_more::Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Era {
    #[display("BC")]
    BC,
    #[display("AD")]
    AD,
}

/// The era a year falls in
pub fn era(year: Year) -> Era {
    if year.is_bc() { Era::BC } else { Era::AD }
}

/// e.g. `450 AD` or `450 BC`
pub fn format_year(year: Year) -> String {
    format!("{} {}", year.magnitude(), era(year))
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st...
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Which century the year falls in, counting up from 1 in each era (year 150
/// and year -150 are both in the 2nd)
pub fn century_of(year: Year) -> u32 {
    year.magnitude().div_ceil(100)
}

/// Which millennium the year falls in, counting up from 1 in each era
pub fn millennium_of(year: Year) -> u32 {
    year.magnitude().div_ceil(1000)
}

/// The label for a [`DateEstimate`], or an empty string if there isn't one
///
/// | Date | Label |
/// |---|---|
/// | known | `1066 AD` |
/// | year | `c. 1215 AD` |
/// | decade | `c. 320s BC` |
/// | century | `c. 2nd Century AD` |
/// | millennium | `c. 3rd Millennium BC` |
/// | range | `c. 100 AD–200 AD` |
///
/// Without the bound a precision needs the label says so (e.g. `c. Unknown
/// Decade`), and with nothing known at all it's `Date Unknown`.
pub fn format_date_estimate(estimate: Option<&DateEstimate>) -> String {
    let Some(estimate) = estimate else {
        return String::new();
    };

    let (precision, start, end) = match *estimate {
        DateEstimate::Known { date } => return format_year(date.year()),
        DateEstimate::Estimated {
            precision,
            start,
            end,
        } => (precision, start, end),
    };

    match (precision, start) {
        (Precision::Year, Some(start)) => format!("c. {}", format_year(start)),
        (Precision::Year, None) => String::from("c. Unknown Year"),

        (Precision::Decade, Some(start)) => {
            format!("c. {}0s {}", start.magnitude() / 10, era(start))
        }
        (Precision::Decade, None) => String::from("c. Unknown Decade"),

        (Precision::Century, Some(start)) => {
            let century = century_of(start);
            let suffix = ordinal_suffix(century);
            format!("c. {century}{suffix} Century {}", era(start))
        }
        (Precision::Century, None) => String::from("c. Unknown Century"),

        (Precision::Millennium, Some(start)) => {
            let millennium = millennium_of(start);
            let suffix = ordinal_suffix(millennium);
            format!("c. {millennium}{suffix} Millennium {}", era(start))
        }
        (Precision::Millennium, None) => String::from("c. Unknown Millennium"),

        (Precision::Unknown, _) => match (start, end) {
            (Some(start), Some(end)) => {
                format!("c. {}–{}", format_year(start), format_year(end))
            }
            _ => String::from("Date Unknown"),
        },
    }
}

impl fmt::Display for DateEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date_estimate(Some(self)))
    }
}

/// e.g. `14 October 1066` or `15 March 44 BC`, or `Unknown Date`
pub fn format_date(date: Option<&CalendarDate>) -> String {
    let Some(date) = date else {
        return String::from("Unknown Date");
    };

    let year = date.year();
    let year = match era(year) {
        Era::AD => year.to_string(),
        Era::BC => format_year(year),
    };
    format!("{:02} {} {year}", date.day().value(), date.month().name())
}

/// The span of a period, e.g. `1600 - 1750`, or with eras marked when either
/// end is at or below the year 999, e.g. `450 B.C. - 1200 A.D.`
pub fn format_years(start: Year, end: Year) -> String {
    if start.value() > 999 && end.value() > 999 {
        return format!("{start} - {end}");
    }

    let single = |year: Year| match era(year) {
        Era::BC => format!("{} B.C.", year.magnitude()),
        Era::AD => format!("{} A.D.", year.magnitude()),
    };
    format!("{} - {}", single(start), single(end))
}
