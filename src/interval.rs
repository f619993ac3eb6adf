//! A module containing [`Interval`], the [`PointType`] marker trait, the
//! [`InvalidRangeError`] returned when an interval cannot be constructed
//! and the [`ie()`] shorthand constructor used throughout the examples.

use core::fmt::Debug;
use core::ops::{Bound, Range, RangeBounds};

use thiserror::Error;

use crate::relationship::{classify, Relationship};

/// The marker trait for valid point types, a blanket implementation is
/// provided for all types which implement this traits' super-traits so you
/// shouldn't need to implement this yourself.
///
/// Any totally ordered `Copy` timestamp works: plain integers,
/// `chrono::NaiveDateTime`, `core::time::Duration` offsets and so on. The
/// crate never reads the clock itself.
pub trait PointType: Ord + Copy {}
impl<T> PointType for T where T: Ord + Copy {}

/// The error returned when the end of an interval does not strictly follow
/// its start.
///
/// This is the only error in the crate. It is returned by
/// [`Interval::new()`], by [`Interval::check()`] for a malformed candidate
/// and by the [`IntervalSet`](crate::IntervalSet) operations should they
/// ever attempt to produce a zero-length interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("end of interval must be strictly after its start")]
pub struct InvalidRangeError;

/// A half-open interval `[start, end)` over the point type `T`.
///
/// The start is included and the end is excluded. An `Interval` always
/// contains at least one point: `end` is strictly greater than `start`, so
/// `[4, 4)` and `[5, 2)` can never be constructed.
///
/// Intervals are immutable values, they are only ever created through
/// [`Interval::new()`] (or the equivalent [`TryFrom<Range<T>>`]
/// conversion).
///
/// # Examples
/// ```
/// use hoti::Interval;
///
/// let morning = Interval::new(9, 12)?;
///
/// assert_eq!(morning.bounds(), (9, 12));
/// assert!(morning.contains(9));
/// assert!(!morning.contains(12));
///
/// assert!(Interval::new(12, 12).is_err());
/// # Ok::<(), hoti::InvalidRangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
	start: T,
	end: T,
}

impl<T> Interval<T>
where
	T: PointType,
{
	/// Makes a new `Interval` from the inclusive `start` and the exclusive
	/// `end`.
	///
	/// Returns [`InvalidRangeError`] if `end` is not strictly after
	/// `start`.
	///
	/// # Examples
	/// ```
	/// use hoti::{Interval, InvalidRangeError};
	///
	/// assert!(Interval::new(1, 2).is_ok());
	///
	/// assert_eq!(Interval::new(2, 2), Err(InvalidRangeError));
	/// assert_eq!(Interval::new(3, 2), Err(InvalidRangeError));
	/// ```
	pub fn new(start: T, end: T) -> Result<Self, InvalidRangeError> {
		if end <= start {
			return Err(InvalidRangeError);
		}

		Ok(Interval { start, end })
	}

	/// The start of the interval, inclusive.
	pub fn start(&self) -> T {
		self.start
	}

	/// The end of the interval, exclusive.
	pub fn end(&self) -> T {
		self.end
	}

	/// Returns the `(start, end)` pair of the interval.
	///
	/// # Examples
	/// ```
	/// use hoti::interval::ie;
	///
	/// let (start, end) = ie(4, 10).bounds();
	///
	/// assert_eq!(start, 4);
	/// assert_eq!(end, 10);
	/// ```
	pub fn bounds(&self) -> (T, T) {
		(self.start, self.end)
	}

	/// Returns `true` if the given point lies within `[start, end)`.
	pub fn contains(&self, point: T) -> bool {
		self.start <= point && point < self.end
	}

	/// Classifies the candidate range `[start, end)` relative to this
	/// interval.
	///
	/// The candidate is given as two raw points so it can be checked
	/// without constructing an [`Interval`] first, but it is held to the
	/// same rule: if `end` is not strictly after `start` then
	/// [`InvalidRangeError`] is returned instead of a [`Relationship`].
	///
	/// See [`Relationship`] for the meaning of each variant.
	///
	/// # Examples
	/// ```
	/// use hoti::interval::ie;
	/// use hoti::{InvalidRangeError, Relationship};
	///
	/// let meeting = ie(11, 16);
	///
	/// assert_eq!(meeting.check(9, 11), Ok(Relationship::AdjacentAndLower));
	/// assert_eq!(meeting.check(13, 15), Ok(Relationship::Contained));
	/// assert_eq!(meeting.check(8, 19), Ok(Relationship::Containing));
	///
	/// assert_eq!(meeting.check(15, 13), Err(InvalidRangeError));
	/// ```
	pub fn check(
		&self,
		start: T,
		end: T,
	) -> Result<Relationship, InvalidRangeError> {
		let candidate = Interval::new(start, end)?;

		Ok(self.relation_to(&candidate))
	}

	/// Classifies the `candidate` interval relative to this interval.
	///
	/// This is the infallible version of [`Interval::check()`], as an
	/// [`Interval`] is always well-formed.
	///
	/// # Examples
	/// ```
	/// use hoti::interval::ie;
	/// use hoti::Relationship;
	///
	/// assert_eq!(
	/// 	ie(3, 8).relation_to(&ie(6, 10)),
	/// 	Relationship::OverlappingUpperEnd
	/// );
	/// assert_eq!(
	/// 	ie(3, 8).relation_to(&ie(8, 11)),
	/// 	Relationship::AdjacentAndHigher
	/// );
	/// ```
	pub fn relation_to(&self, candidate: &Interval<T>) -> Relationship {
		classify(self.start, self.end, candidate.start, candidate.end)
	}

	/// Returns `true` if the two intervals share at least one point.
	///
	/// Adjacent intervals such as `[2, 4)` and `[4, 6)` do not overlap.
	pub fn overlaps(&self, other: &Interval<T>) -> bool {
		self.relation_to(other).is_overlapping()
	}
}

impl<T> RangeBounds<T> for Interval<T> {
	fn start_bound(&self) -> Bound<&T> {
		Bound::Included(&self.start)
	}

	fn end_bound(&self) -> Bound<&T> {
		Bound::Excluded(&self.end)
	}
}

impl<T> TryFrom<Range<T>> for Interval<T>
where
	T: PointType,
{
	type Error = InvalidRangeError;

	fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
		Interval::new(range.start, range.end)
	}
}

impl<T> From<Interval<T>> for Range<T> {
	fn from(interval: Interval<T>) -> Self {
		interval.start..interval.end
	}
}

/// Shorthand for [`Interval::new()`] which panics on an invalid interval,
/// used to keep the examples and tests readable.
///
/// # Panics
///
/// Panics if `end` is not strictly after `start`.
///
/// # Examples
/// ```
/// use hoti::interval::ie;
/// use hoti::Interval;
///
/// assert_eq!(ie(1, 5), Interval::new(1, 5).unwrap());
/// ```
pub fn ie<T>(start: T, end: T) -> Interval<T>
where
	T: PointType + Debug,
{
	match Interval::new(start, end) {
		Ok(interval) => interval,
		Err(error) => panic!("{error}: {start:?}..{end:?}"),
	}
}
