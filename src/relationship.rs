//! A module containing [`Relationship`], the result of classifying one
//! interval against another.

use core::cmp::Ordering;

use crate::PointType;

/// How a candidate interval relates to a reference interval `[lower,
/// upper)`.
///
/// Exactly one variant applies to any pair of well-formed intervals. In
/// the diagrams below the reference interval is drawn on the top line and
/// the candidate underneath it.
///
/// See [`Interval::check()`](crate::Interval::check) and
/// [`Interval::relation_to()`](crate::Interval::relation_to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
	/// The candidate ends strictly before `lower`.
	///
	/// ```text
	///         [-------)
	/// [--)
	/// ```
	DisparateAndLower,
	/// The candidate starts before `lower` and ends exactly at `lower`.
	///
	/// ```text
	///         [-------)
	///   [-----)
	/// ```
	AdjacentAndLower,
	/// The candidate starts before `lower` and ends after `lower`, at or
	/// before `upper`.
	///
	/// ```text
	///         [-------)
	///     [-------)
	/// ```
	OverlappingLowerEnd,
	/// The candidate lies within the reference interval without being the
	/// [`Same`](Relationship::Same) interval. It may share one boundary
	/// with it.
	///
	/// ```text
	///         [-------)
	///           [--)
	/// ```
	Contained,
	/// The candidate starts exactly at `lower` and ends exactly at
	/// `upper`.
	///
	/// ```text
	///         [-------)
	///         [-------)
	/// ```
	Same,
	/// The candidate starts at or after `lower`, before `upper`, and ends
	/// strictly after `upper`.
	///
	/// ```text
	///         [-------)
	///             [-------)
	/// ```
	OverlappingUpperEnd,
	/// The candidate starts exactly at `upper`.
	///
	/// ```text
	///         [-------)
	///                 [-----)
	/// ```
	AdjacentAndHigher,
	/// The candidate starts strictly after `upper`.
	///
	/// ```text
	///         [-------)
	///                     [--)
	/// ```
	DisparateAndHigher,
	/// The candidate starts strictly before `lower` and ends strictly
	/// after `upper`.
	///
	/// ```text
	///         [-------)
	///     [---------------)
	/// ```
	Containing,
}

impl Relationship {
	/// Every relationship, in the order a candidate sliding from left to
	/// right would pass through them.
	pub const ALL: [Relationship; 9] = [
		Relationship::DisparateAndLower,
		Relationship::AdjacentAndLower,
		Relationship::OverlappingLowerEnd,
		Relationship::Contained,
		Relationship::Same,
		Relationship::OverlappingUpperEnd,
		Relationship::AdjacentAndHigher,
		Relationship::DisparateAndHigher,
		Relationship::Containing,
	];

	/// Returns `true` if the two intervals share at least one point, which
	/// is what a scheduler would call a conflict.
	///
	/// # Examples
	/// ```
	/// use hoti::Relationship;
	///
	/// assert!(Relationship::Contained.is_overlapping());
	/// assert!(!Relationship::AdjacentAndHigher.is_overlapping());
	/// ```
	pub fn is_overlapping(self) -> bool {
		match self {
			Relationship::OverlappingLowerEnd
			| Relationship::Contained
			| Relationship::Same
			| Relationship::OverlappingUpperEnd
			| Relationship::Containing => true,
			Relationship::DisparateAndLower
			| Relationship::AdjacentAndLower
			| Relationship::AdjacentAndHigher
			| Relationship::DisparateAndHigher => false,
		}
	}

	/// Returns `true` if the two intervals touch without overlapping.
	///
	/// # Examples
	/// ```
	/// use hoti::interval::ie;
	/// use hoti::Relationship;
	///
	/// assert!(Relationship::AdjacentAndLower.is_adjacent());
	/// assert!(!Relationship::Same.is_adjacent());
	/// assert!(ie(2, 4).relation_to(&ie(4, 6)).is_adjacent());
	/// assert!(!ie(2, 4).relation_to(&ie(5, 6)).is_adjacent());
	/// ```
	pub fn is_adjacent(self) -> bool {
		matches!(
			self,
			Relationship::AdjacentAndLower | Relationship::AdjacentAndHigher
		)
	}
}

/// Classifies the candidate `[start, end)` against the reference `[lower,
/// upper)`.
///
/// Both ranges must be well-formed, this is guaranteed by the callers
/// taking [`Interval`](crate::Interval)s.
pub(crate) fn classify<T>(
	lower: T,
	upper: T,
	start: T,
	end: T,
) -> Relationship
where
	T: PointType,
{
	use Ordering::{Equal, Greater, Less};

	match (start.cmp(&lower), start.cmp(&upper)) {
		(_, Greater) => Relationship::DisparateAndHigher,
		(_, Equal) => Relationship::AdjacentAndHigher,
		(Less, Less) => match (end.cmp(&lower), end.cmp(&upper)) {
			(Less, _) => Relationship::DisparateAndLower,
			(Equal, _) => Relationship::AdjacentAndLower,
			(Greater, Greater) => Relationship::Containing,
			(Greater, _) => Relationship::OverlappingLowerEnd,
		},
		(Equal | Greater, Less) => match (start == lower, end.cmp(&upper)) {
			(_, Greater) => Relationship::OverlappingUpperEnd,
			(true, Equal) => Relationship::Same,
			_ => Relationship::Contained,
		},
	}
}
