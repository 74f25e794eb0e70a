// SPDX-License-Identifier: MIT

//!
//! *Part of the wider heritage tracker project*
//!
//! This crate defines the uncertain historical date model used across the
//! heritage tracker (history events, composer lifespans, calendar items,
//! books...).
//!
//! A date may be known exactly, known only to a year/decade/century/millennium,
//! span a range of years, or be completely unknown, and may fall in either era
//! (BC/AD).  This crate:
//!
//! - Represents such dates ([`DateEstimate`], [`CalendarDate`], [`Year`])
//! - Orders them so mixed exact/estimated dates can be sorted
//!   ([`compare_date_estimates`], [`sort_by_date_estimate`])
//! - Renders them as English labels ([`format_date_estimate`])
//! - Matches and groups dated records against calendar days ([`matches_day`],
//!   [`group_by_day`])
//!
//! Everything here is pure.  Types that are instantiated are guaranteed to be
//! valid, and the formatting/ordering/matching functions are total.
//!

mod calendar;
mod date;
mod estimate;
mod format;
mod ordering;

pub use calendar::*;
pub use date::*;
pub use estimate::*;
pub use format::*;
pub use ordering::*;
