//! This crate provides [`Interval`], a Half-Open Time Interval, together
//! with [`IntervalSet`] for computing the union and subtraction of
//! collections of them.
//!
//! It is meant as a building block for scheduling and availability logic:
//! "does this proposed booking conflict with that one?" is answered by
//! [`Interval::check()`], and "what time is left once these bookings are
//! taken out of the opening hours?" by [`IntervalSet::subtract()`].
//!
//! ## Example
//!
//! ```rust
//! use hoti::interval::ie;
//! use hoti::{IntervalSet, Relationship};
//!
//! // Minutes since midnight
//! let meeting = ie(660, 960);
//!
//! assert_eq!(meeting.check(540, 660)?, Relationship::AdjacentAndLower);
//! assert_eq!(meeting.check(600, 720)?, Relationship::OverlappingLowerEnd);
//!
//! let opening_hours = IntervalSet::new(&[ie(480, 720), ie(780, 1080)]);
//! let booked = IntervalSet::new(&[meeting]);
//!
//! assert_eq!(
//! 	opening_hours.subtract(&booked)?.to_vec(),
//! 	[ie(480, 660), ie(960, 1080)]
//! );
//! assert_eq!(
//! 	opening_hours.union(&booked)?.to_vec(),
//! 	[ie(480, 1080)]
//! );
//! # Ok::<(), hoti::InvalidRangeError>(())
//! ```
//!
//! ## Example using `chrono` timestamps
//!
//! Any [`Ord`] + [`Copy`] type can be used as the point type, see
//! [`PointType`].
//!
//! ```rust
//! use chrono::{NaiveDate, TimeDelta};
//! use hoti::{Interval, IntervalSet};
//!
//! let nine = NaiveDate::from_ymd_opt(2015, 3, 18)
//! 	.and_then(|day| day.and_hms_opt(9, 0, 0))
//! 	.unwrap();
//! let minutes = |minutes| nine + TimeDelta::minutes(minutes);
//!
//! let a = IntervalSet::from_range(minutes(6), minutes(10))?;
//! let b = IntervalSet::from_range(minutes(10), minutes(16))?;
//!
//! assert_eq!(
//! 	a.union(&b)?.to_vec(),
//! 	[Interval::new(minutes(6), minutes(16))?]
//! );
//! # Ok::<(), hoti::InvalidRangeError>(())
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Half-Open-ness
//!
//! Every interval includes its start and excludes its end, `[start,
//! end)`. This makes `[9:00, 10:00)` and `[10:00, 11:00)` share no instant
//! while still leaving no gap between them.
//!
//! ### Invalid Intervals
//!
//! An interval is only valid if its end is strictly after its start, so it
//! contains at least one instant. `[4, 4)` and `[5, 2)` are invalid and
//! cannot be constructed, [`Interval::new()`] returns an
//! [`InvalidRangeError`] instead.
//!
//! ### Overlap
//!
//! Two intervals are "overlapping" if there exists a point that is
//! contained within both intervals.
//!
//! ### Adjacency
//!
//! Two intervals are "adjacent" if one's end is the other's start, for
//! example `[2, 4)` and `[4, 6)`. Adjacent intervals do not overlap.
//!
//! ### Canonical Form
//!
//! A collection of intervals is canonical when it is sorted by start, no
//! two intervals overlap and no two intervals are adjacent. Every
//! [`IntervalSet`] returned by a set operation is canonical, adjacent
//! results being "stitched" together into one interval.
//!
//! ### How the set operations work
//!
//! Union and subtraction share one sweep-line pass. Both operands are
//! turned into a single chronological list of start and end boundaries,
//! each operand contributing a signed weight (`+1` for the kept side, `+1`
//! or `-1` for the other side) while any of its intervals are open. The
//! output covers the stretches where the summed weight is positive.
//! Boundaries at the same instant are swept ends first.
//!
//! ### Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod interval;
pub mod relationship;
pub mod set;

pub(crate) mod boundary;
pub(crate) mod sweep;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use crate::interval::{Interval, InvalidRangeError, PointType};
pub use crate::relationship::Relationship;
pub use crate::set::IntervalSet;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
