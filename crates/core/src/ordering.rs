// SPDX-License-Identifier: MIT

//!
//! Sorting mixed exact and estimated dates
//!

use crate::{DateEstimate, Year};
use log::trace;
use std::cmp::Ordering;

/// The key a [`DateEstimate`] is sorted by
///
/// Dates with no anchor year come last.  Within the same anchor year, more
/// precise dates come first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    no_anchor: bool,
    anchor: Option<Year>,
    precision_rank: u8,
}

impl DateEstimate {
    /// The single year used to sort and group this date: the year of a known
    /// date, otherwise the estimate's start (or its end if there's no start)
    pub fn anchor_year(&self) -> Option<Year> {
        match self {
            DateEstimate::Known { date } => Some(date.year()),
            DateEstimate::Estimated { start, end, .. } => start.or(*end),
        }
    }

    /// Get the [`SortKey`]
    pub fn sort_key(&self) -> SortKey {
        let anchor = self.anchor_year();
        SortKey {
            no_anchor: anchor.is_none(),
            anchor,
            precision_rank: self.precision_rank(),
        }
    }
}

/// Compare two dates by anchor year, then by precision.  Dates with equal
/// keys compare as [`Ordering::Equal`] so a stable sort keeps their order
pub fn compare_date_estimates(a: &DateEstimate, b: &DateEstimate) -> Ordering {
    a.sort_key().cmp(&b.sort_key())
}

/// Stable sort of any records that may carry a [`DateEstimate`].  Records
/// without one go after all those with one
pub fn sort_by_date_estimate<T, F>(items: &mut [T], get_estimate: F)
where
    F: Fn(&T) -> Option<&DateEstimate>,
{
    trace!("sorting {} records by date estimate", items.len());
    items.sort_by_cached_key(|item| {
        let key = get_estimate(item).map(DateEstimate::sort_key);
        (key.is_none(), key)
    });
}
