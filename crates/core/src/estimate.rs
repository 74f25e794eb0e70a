// SPDX-License-Identifier: MIT

//!
//! The date estimate type: an exact calendar date, or a year of some precision
//!

use crate::{CalendarDate, Year};
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How precisely an estimated date is known
///
/// Variants are declared from most to least precise.
#[derive(Serialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Year,
    Decade,
    Century,
    Millennium,
    #[default]
    Unknown,
}

impl Precision {
    /// Position from most (0) to least precise.  A known date outranks every
    /// precision and is given 0 by [`DateEstimate::precision_rank`]
    pub fn rank(&self) -> u8 {
        match self {
            Precision::Year => 1,
            Precision::Decade => 2,
            Precision::Century => 3,
            Precision::Millennium => 4,
            Precision::Unknown => 5,
        }
    }

    /// The lower-case label used on the wire
    pub fn label(&self) -> &'static str {
        match self {
            Precision::Year => "year",
            Precision::Decade => "decade",
            Precision::Century => "century",
            Precision::Millennium => "millennium",
            Precision::Unknown => "unknown",
        }
    }

    fn from_label(label: &str) -> Self {
        match label {
            "year" => Precision::Year,
            "decade" => Precision::Decade,
            "century" => Precision::Century,
            "millennium" => Precision::Millennium,
            "unknown" | "exact" => Precision::Unknown,
            other => {
                debug!("unrecognised date precision `{other}`, treating as unknown");
                Precision::Unknown
            }
        }
    }
}

impl<'de> Deserialize<'de> for Precision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label
            .map(|label| Precision::from_label(&label))
            .unwrap_or_default())
    }
}

/// A historical date whose precision isn't known in advance
///
/// Either the exact calendar date is known, or the date has been estimated to
/// a year/decade/century/millennium (anchored on `start`), or only a range (or
/// nothing at all) is known.  Years use the signed convention of [`Year`]
/// (negative is BC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DateEstimate {
    /// The exact calendar date is known
    Known { date: CalendarDate },

    /// Only an estimate is known
    Estimated {
        precision: Precision,
        start: Option<Year>,
        end: Option<Year>,
    },
}

impl DateEstimate {
    /// An exactly known date
    pub fn known(date: CalendarDate) -> Self {
        DateEstimate::Known { date }
    }

    /// An estimate with the given precision, anchored on `start`
    pub fn estimated(precision: Precision, start: Option<Year>, end: Option<Year>) -> Self {
        DateEstimate::Estimated {
            precision,
            start,
            end,
        }
    }

    /// An estimate of nothing more than a range of years
    pub fn range(start: Year, end: Year) -> Self {
        Self::estimated(Precision::Unknown, Some(start), Some(end))
    }

    /// A date about which nothing is known
    pub fn unknown() -> Self {
        Self::estimated(Precision::Unknown, None, None)
    }

    /// Whether the exact calendar date is known
    pub fn is_known(&self) -> bool {
        matches!(self, DateEstimate::Known { .. })
    }

    /// The exact calendar date, if known
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            DateEstimate::Known { date } => Some(*date),
            DateEstimate::Estimated { .. } => None,
        }
    }

    /// The estimate's precision (`None` for a known date)
    pub fn precision(&self) -> Option<Precision> {
        match self {
            DateEstimate::Known { .. } => None,
            DateEstimate::Estimated { precision, .. } => Some(*precision),
        }
    }

    /// The estimate's start bound (`None` for a known date)
    pub fn start(&self) -> Option<Year> {
        match self {
            DateEstimate::Known { .. } => None,
            DateEstimate::Estimated { start, .. } => *start,
        }
    }

    /// The estimate's end bound (`None` for a known date)
    pub fn end(&self) -> Option<Year> {
        match self {
            DateEstimate::Known { .. } => None,
            DateEstimate::Estimated { end, .. } => *end,
        }
    }

    /// 0 for a known date, otherwise [`Precision::rank`]
    pub fn precision_rank(&self) -> u8 {
        match self {
            DateEstimate::Known { .. } => 0,
            DateEstimate::Estimated { precision, .. } => precision.rank(),
        }
    }

    /// Convert from the flat field layout used by the backend
    ///
    /// Never fails: a bad date or bound on one record mustn't stop the rest
    /// of a listing from loading.  A date marked as known that isn't a usable
    /// calendar date falls back to a range over its bounds.
    fn from_raw(raw: RawDateEstimate) -> Self {
        let start = raw.date_estimate_start.and_then(bound_year);
        let end = raw.date_estimate_end.and_then(bound_year);

        // A date that isn't marked as known is ignored, whatever it holds
        if raw.date_known != Some(true) {
            return Self::estimated(raw.date_precision, start, end);
        }

        match raw.date.as_deref().map(str::parse::<CalendarDate>) {
            Some(Ok(date)) => Self::known(date),
            Some(Err(error)) => {
                warn!("{error}, treating the known date as a range");
                Self::estimated(Precision::Unknown, start, end)
            }
            None => {
                debug!("date marked as known but has no date, treating as a range");
                Self::estimated(Precision::Unknown, start, end)
            }
        }
    }

    fn to_flat(self) -> FlatDateEstimate {
        match self {
            DateEstimate::Known { date } => FlatDateEstimate {
                date_known: true,
                date: Some(date),
                date_precision: "exact",
                date_estimate_start: None,
                date_estimate_end: None,
            },
            DateEstimate::Estimated {
                precision,
                start,
                end,
            } => FlatDateEstimate {
                date_known: false,
                date: None,
                date_precision: precision.label(),
                date_estimate_start: start,
                date_estimate_end: end,
            },
        }
    }
}

/// An estimate bound, or `None` (logged) if it can't be held as a [`Year`]
fn bound_year(value: i64) -> Option<Year> {
    Year::try_from(value)
        .inspect_err(|error| warn!("{error}, dropping the estimate bound"))
        .ok()
}

/// The flat field layout sent by the backend.  Every field is optional and
/// unknown fields (e.g. the backend's `id`) are ignored
#[derive(Deserialize, Debug)]
struct RawDateEstimate {
    date_known: Option<bool>,
    date: Option<String>,
    date_estimate_start: Option<i64>,
    date_estimate_end: Option<i64>,
    #[serde(default)]
    date_precision: Precision,
}

/// The flat field layout written back out
#[derive(Serialize, Debug)]
struct FlatDateEstimate {
    date_known: bool,
    date: Option<CalendarDate>,
    date_precision: &'static str,
    date_estimate_start: Option<Year>,
    date_estimate_end: Option<Year>,
}

impl Serialize for DateEstimate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_flat().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DateEstimate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawDateEstimate::deserialize(deserializer)?;
        Ok(DateEstimate::from_raw(raw))
    }
}
