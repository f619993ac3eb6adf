//! A module containing [`IntervalSet`].

use alloc::vec::{IntoIter as VecIntoIter, Vec};
use core::slice::Iter as SliceIter;

use itertools::Itertools;

use crate::sweep::apply;
use crate::{Interval, InvalidRangeError, PointType};

/// An ordered collection of [`Interval`]s supporting union and subtraction.
///
/// A set built with [`IntervalSet::new()`] (or collected from an iterator)
/// keeps its intervals exactly as given: they may be unsorted, overlap or
/// touch each other. Every set returned by [`IntervalSet::union()`],
/// [`IntervalSet::subtract()`] and [`IntervalSet::canonicalize()`] is
/// canonical instead:
///
/// - the intervals are sorted by start,
/// - no two intervals overlap,
/// - no two intervals touch, touching results are merged into one.
///
/// Equality compares the stored sequences, so two canonical sets are equal
/// exactly when they cover the same points.
///
/// `T` is the generic type parameter for the [`Ord`] point type the
/// intervals are over.
///
/// # Examples
/// ```
/// use hoti::interval::ie;
/// use hoti::IntervalSet;
///
/// let booked = IntervalSet::new(&[ie(9, 10), ie(13, 15)]);
/// let opening_hours = IntervalSet::new(&[ie(8, 12), ie(12, 17)]);
///
/// let free = opening_hours.subtract(&booked)?;
///
/// assert_eq!(free.to_vec(), [ie(8, 9), ie(10, 13), ie(15, 17)]);
/// # Ok::<(), hoti::InvalidRangeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T> {
	inner: Vec<Interval<T>>,
}

impl<T> IntervalSet<T>
where
	T: PointType,
{
	/// Makes a new `IntervalSet` holding a copy of the given intervals.
	///
	/// No sorting, merging or overlap checking is done, see
	/// [`IntervalSet::canonicalize()`] for that.
	///
	/// # Examples
	/// ```
	/// use hoti::interval::ie;
	/// use hoti::IntervalSet;
	///
	/// let mut intervals = vec![ie(5, 8), ie(1, 6)];
	/// let set = IntervalSet::new(&intervals);
	///
	/// intervals.clear();
	///
	/// assert_eq!(set.to_vec(), [ie(5, 8), ie(1, 6)]);
	/// ```
	pub fn new(intervals: &[Interval<T>]) -> Self {
		IntervalSet {
			inner: intervals.to_vec(),
		}
	}

	/// Makes a new `IntervalSet` holding the single interval `[start,
	/// end)`.
	///
	/// Returns [`InvalidRangeError`] if `end` is not strictly after
	/// `start`.
	///
	/// # Examples
	/// ```
	/// use hoti::interval::ie;
	/// use hoti::{IntervalSet, InvalidRangeError};
	///
	/// assert_eq!(
	/// 	IntervalSet::from_range(4, 10),
	/// 	Ok(IntervalSet::new(&[ie(4, 10)]))
	/// );
	/// assert_eq!(IntervalSet::from_range(4, 4), Err(InvalidRangeError));
	/// ```
	pub fn from_range(start: T, end: T) -> Result<Self, InvalidRangeError> {
		let interval = Interval::new(start, end)?;

		Ok(IntervalSet {
			inner: Vec::from([interval]),
		})
	}

	/// Returns the union of `self` and `other` as a new canonical set.
	///
	/// A point is in the result if it is in either set. Neither operand is
	/// modified and neither needs to be canonical.
	///
	/// # Examples
	/// ```
	/// use hoti::interval::ie;
	/// use hoti::IntervalSet;
	///
	/// let a = IntervalSet::new(&[ie(6, 10)]);
	/// let b = IntervalSet::new(&[ie(10, 16)]);
	///
	/// assert_eq!(a.union(&b)?.to_vec(), [ie(6, 16)]);
	/// # Ok::<(), hoti::InvalidRangeError>(())
	/// ```
	pub fn union(
		&self,
		other: &IntervalSet<T>,
	) -> Result<IntervalSet<T>, InvalidRangeError> {
		let inner = apply(&self.inner, &other.inner, 1, 1)?;

		Ok(IntervalSet { inner })
	}

	/// Returns `self` with every point of `other` removed, as a new
	/// canonical set.
	///
	/// A point is in the result if it is in `self` and not in `other`.
	/// Neither operand is modified and neither needs to be canonical.
	///
	/// # Examples
	/// ```
	/// use hoti::interval::ie;
	/// use hoti::IntervalSet;
	///
	/// let requested = IntervalSet::new(&[ie(5, 16)]);
	/// let taken = IntervalSet::new(&[ie(6, 10)]);
	///
	/// assert_eq!(
	/// 	requested.subtract(&taken)?.to_vec(),
	/// 	[ie(5, 6), ie(10, 16)]
	/// );
	/// # Ok::<(), hoti::InvalidRangeError>(())
	/// ```
	pub fn subtract(
		&self,
		other: &IntervalSet<T>,
	) -> Result<IntervalSet<T>, InvalidRangeError> {
		let inner = apply(&self.inner, &other.inner, 1, -1)?;

		Ok(IntervalSet { inner })
	}

	/// Returns the canonical form of the set: the same points, sorted,
	/// with overlapping and touching intervals merged.
	///
	/// # Examples
	/// ```
	/// use hoti::interval::ie;
	/// use hoti::IntervalSet;
	///
	/// let raw = IntervalSet::new(&[ie(8, 9), ie(1, 4), ie(3, 6), ie(6, 7)]);
	///
	/// assert_eq!(raw.canonicalize()?.to_vec(), [ie(1, 7), ie(8, 9)]);
	/// # Ok::<(), hoti::InvalidRangeError>(())
	/// ```
	pub fn canonicalize(&self) -> Result<IntervalSet<T>, InvalidRangeError> {
		let inner = apply(&self.inner, &[], 1, 1)?;

		Ok(IntervalSet { inner })
	}

	/// Returns `true` if the set is already in canonical form.
	///
	/// # Examples
	/// ```
	/// use hoti::interval::ie;
	/// use hoti::IntervalSet;
	///
	/// assert!(IntervalSet::new(&[ie(1, 3), ie(4, 6)]).is_canonical());
	/// assert!(!IntervalSet::new(&[ie(1, 3), ie(3, 6)]).is_canonical());
	/// assert!(!IntervalSet::new(&[ie(4, 6), ie(1, 3)]).is_canonical());
	/// ```
	pub fn is_canonical(&self) -> bool {
		self.inner
			.iter()
			.tuple_windows()
			.all(|(previous, next)| previous.end() < next.start())
	}

	/// Returns `true` if any interval in the set contains the given point.
	pub fn contains_point(&self, point: T) -> bool {
		self.inner.iter().any(|interval| interval.contains(point))
	}
}

impl<T> IntervalSet<T> {
	/// Returns the intervals of the set as a new [`Vec`].
	///
	/// The returned vector is a copy, changing it does not change the set.
	pub fn to_vec(&self) -> Vec<Interval<T>>
	where
		T: Clone,
	{
		self.inner.clone()
	}

	/// Returns an iterator over the intervals of the set in their stored
	/// order.
	pub fn iter(&self) -> SliceIter<'_, Interval<T>> {
		self.inner.iter()
	}

	/// Returns the number of intervals in the set.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the set contains no intervals.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

// Trait Impls ==========================

impl<T> Default for IntervalSet<T> {
	fn default() -> Self {
		IntervalSet { inner: Vec::new() }
	}
}

impl<T> From<Vec<Interval<T>>> for IntervalSet<T> {
	fn from(inner: Vec<Interval<T>>) -> Self {
		IntervalSet { inner }
	}
}

impl<T> FromIterator<Interval<T>> for IntervalSet<T> {
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = Interval<T>>,
	{
		IntervalSet {
			inner: iter.into_iter().collect(),
		}
	}
}

impl<T> IntoIterator for IntervalSet<T> {
	type Item = Interval<T>;
	type IntoIter = VecIntoIter<Interval<T>>;
	fn into_iter(self) -> Self::IntoIter {
		self.inner.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
	type Item = &'a Interval<T>;
	type IntoIter = SliceIter<'a, Interval<T>>;
	fn into_iter(self) -> Self::IntoIter {
		self.inner.iter()
	}
}

#[cfg(test)]
mod tests {
	use alloc::vec;
	use alloc::vec::Vec;

	use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;
	use crate::interval::ie;
	use crate::test_helpers::{bits, from_bits};

	#[rstest]
	#[case::disparate_and_higher(
		"0000001111000000",
		"0000000000001111",
		"0000000000001111",
		"0000001111001111"
	)]
	#[case::adjacent_and_higher(
		"0000001111000000",
		"0000000000111111",
		"0000000000111111",
		"0000001111111111"
	)]
	#[case::overlapping_upper_end(
		"0000001111000000",
		"0000000001111111",
		"0000000000111111",
		"0000001111111111"
	)]
	#[case::containing(
		"0000001111000000",
		"0000001111111111",
		"0000000000111111",
		"0000001111111111"
	)]
	#[case::containing_2(
		"0000001111000000",
		"0000011111111111",
		"0000010000111111",
		"0000011111111111"
	)]
	#[case::containing_3(
		"0000001111000000",
		"0000011111000000",
		"0000010000000000",
		"0000011111000000"
	)]
	#[case::overlapping_lower_end(
		"0000001111000000",
		"0001111000000000",
		"0001110000000000",
		"0001111111000000"
	)]
	#[case::adjacent_and_lower(
		"0000001111000000",
		"0001110000000000",
		"0001110000000000",
		"0001111111000000"
	)]
	#[case::disparate_and_lower(
		"0000001111000000",
		"0011100000000000",
		"0011100000000000",
		"0011101111000000"
	)]
	#[case::containing_4(
		"0000001111000000",
		"0011111111111000",
		"0011110000111000",
		"0011111111111000"
	)]
	#[case::contained(
		"0000001111000000",
		"0000000110000000",
		"0000000000000000",
		"0000001111000000"
	)]
	#[case::second_empty(
		"0000001111000000",
		"0000000000000000",
		"0000000000000000",
		"0000001111000000"
	)]
	#[case::first_empty(
		"0000000000000000",
		"0000001111000000",
		"0000001111000000",
		"0000001111000000"
	)]
	#[case::multiple_1(
		"1111111111111111",
		"0000001000110000",
		"0000000000000000",
		"1111111111111111"
	)]
	#[case::multiple_2(
		"0011001111000000",
		"0001111110000000",
		"0000110000000000",
		"0011111111000000"
	)]
	#[case::multiple_3(
		"0011001111000000",
		"0111111111111100",
		"0100110000111100",
		"0111111111111100"
	)]
	#[case::multiple_4(
		"1011001111011100",
		"0110101001110010",
		"0100100000100010",
		"1111101111111110"
	)]
	fn bit_pattern_operations(
		#[case] a: &str,
		#[case] b: &str,
		#[case] b_subtract_a: &str,
		#[case] a_union_b: &str,
	) {
		let a = bits(a);
		let b = bits(b);

		assert_eq!(b.union(&a), Ok(bits(a_union_b)));
		assert_eq!(a.union(&b), Ok(bits(a_union_b)));
		assert_eq!(b.subtract(&a), Ok(bits(b_subtract_a)));
	}

	#[test]
	fn long_bit_patterns() {
		let a = bits(
			"000101111010110101111100010110101011011010010110001010001001010100100001111111010010010010100101110101010111",
		);
		let b = bits(
			"11011100110101001010101001000101010010111101010101100010101011101011001001010100000001111101010010110",
		);

		assert_eq!(
			a.union(&b),
			Ok(bits(
				"110111111111110111111110010111111111111111010111011010101011111110110011111111010010011111110101111101010111"
			))
		);
		assert_eq!(
			a.subtract(&b),
			Ok(bits(
				"000000110010100101010100000110101011010000000010000010000001000100000001101010010010000000100001010001010111"
			))
		);
	}

	#[test]
	fn stitches_over_real_timestamps() {
		let nine = NaiveDate::from_ymd_opt(2015, 3, 18)
			.and_then(|day| day.and_hms_opt(9, 0, 0))
			.unwrap();
		let at = |minute: i64| -> NaiveDateTime {
			nine + TimeDelta::minutes(minute)
		};

		let a = from_bits("0000001111000000", at);
		let b = from_bits("0000000000111111", at);

		let union = a.union(&b).unwrap();
		assert_eq!(union, from_bits("0000001111111111", at));
		assert_eq!(union.to_vec(), [Interval::new(at(6), at(16)).unwrap()]);

		assert_eq!(
			b.subtract(&a).unwrap(),
			from_bits("0000000000111111", at)
		);
	}

	#[test]
	fn union_is_commutative_and_idempotent() {
		let a = IntervalSet::new(&[ie(7, 9), ie(0, 3), ie(2, 5)]);
		let b = IntervalSet::new(&[ie(5, 6), ie(12, 14)]);

		assert_eq!(a.union(&b), b.union(&a));
		assert_eq!(a.union(&a), a.canonicalize());
		assert_eq!(
			a.union(&b),
			Ok(IntervalSet::new(&[ie(0, 6), ie(7, 9), ie(12, 14)]))
		);
	}

	#[test]
	fn subtract_identities() {
		let a = IntervalSet::new(&[ie(7, 9), ie(0, 3), ie(2, 5)]);
		let empty = IntervalSet::default();

		assert_eq!(a.subtract(&a), Ok(IntervalSet::default()));
		assert_eq!(a.subtract(&empty), a.canonicalize());
		assert_eq!(empty.subtract(&a), Ok(IntervalSet::default()));
		assert_eq!(empty.union(&empty), Ok(IntervalSet::default()));
	}

	#[test]
	fn results_are_canonical() {
		let a = IntervalSet::new(&[ie(4, 6), ie(0, 2), ie(2, 3), ie(5, 9)]);
		let b = IntervalSet::new(&[ie(9, 10), ie(1, 2), ie(12, 13)]);

		assert!(!a.is_canonical());

		for result in [a.union(&b), a.subtract(&b), b.subtract(&a)] {
			assert!(result.unwrap().is_canonical());
		}
		assert_eq!(
			a.canonicalize(),
			Ok(IntervalSet::new(&[ie(0, 3), ie(4, 9)]))
		);
	}

	#[test]
	fn operand_order_does_not_matter() {
		let a: Vec<Interval<i32>> =
			vec![ie(0, 3), ie(3, 5), ie(8, 12), ie(10, 11), ie(20, 22)];
		let b: Vec<Interval<i32>> = vec![ie(2, 4), ie(11, 21), ie(11, 13)];

		let union = IntervalSet::new(&a).union(&IntervalSet::new(&b));
		let difference = IntervalSet::new(&a).subtract(&IntervalSet::new(&b));

		for rotation in 0..a.len() {
			let mut permuted_a = a.clone();
			permuted_a.rotate_left(rotation);
			permuted_a.reverse();
			let permuted_a = IntervalSet::from(permuted_a);

			for b in [b.clone(), b.iter().rev().copied().collect()] {
				let b = IntervalSet::from(b);

				assert_eq!(permuted_a.union(&b), union);
				assert_eq!(permuted_a.subtract(&b), difference);
			}
		}
	}

	#[test]
	fn operands_are_not_modified() {
		let a = IntervalSet::new(&[ie(4, 6), ie(0, 2)]);
		let b = IntervalSet::new(&[ie(1, 5)]);

		let _ = a.union(&b);
		let _ = a.subtract(&b);

		assert_eq!(a.to_vec(), [ie(4, 6), ie(0, 2)]);
		assert_eq!(b.to_vec(), [ie(1, 5)]);
	}

	#[test]
	fn accessors() {
		let set: IntervalSet<i32> =
			[ie(4, 6), ie(0, 2)].into_iter().collect();

		assert_eq!(set.len(), 2);
		assert!(!set.is_empty());
		assert!(IntervalSet::<i32>::default().is_empty());

		assert!(set.contains_point(0));
		assert!(!set.contains_point(2));
		assert!(set.contains_point(5));

		assert_eq!(set.iter().count(), 2);
		assert_eq!((&set).into_iter().next(), Some(&ie(4, 6)));
		let starts: Vec<i32> =
			set.into_iter().map(|interval| interval.start()).collect();
		assert_eq!(starts, [4, 0]);
	}
}
