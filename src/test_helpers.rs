//! Test-only interval domains and bit-pattern set constructors.

use alloc::vec::Vec;

use crate::interval::ie;
use crate::{Interval, IntervalSet, PointType};

//every interval over these is classified against every other one
pub(crate) const NUMBERS: &[i8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//go a bit around on either side of NUMBERS
pub(crate) const NUMBERS_DOMAIN: &[i8] =
	&[-1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
//only every other number so the raw sets stay small enough to pair up
pub(crate) const SET_NUMBERS: &[i8] = &[0, 2, 4, 6, 8];

pub(crate) fn all_valid_intervals() -> Vec<Interval<i8>> {
	intervals_over(NUMBERS)
}

/// Every raw set of up to two intervals over [`SET_NUMBERS`], including
/// unsorted, duplicated, overlapping and touching pairs.
pub(crate) fn all_raw_sets() -> Vec<Vec<Interval<i8>>> {
	let intervals = intervals_over(SET_NUMBERS);

	let mut output = Vec::from([Vec::new()]);
	for first in &intervals {
		output.push(Vec::from([*first]));
		for second in &intervals {
			output.push(Vec::from([*first, *second]));
		}
	}
	output
}

pub(crate) fn covered(intervals: &[Interval<i8>], point: i8) -> bool {
	intervals.iter().any(|interval| interval.contains(point))
}

/// Converts a bit pattern into a set, each character being one step from
/// the origin and `1` meaning the step is covered.
pub(crate) fn from_bits<T>(
	pattern: &str,
	at: impl Fn(i64) -> T,
) -> IntervalSet<T>
where
	T: PointType,
{
	let mut intervals = Vec::new();
	let mut started: Option<i64> = None;

	for (step, bit) in (0..).zip(pattern.chars()) {
		match (bit, started) {
			('1', None) => started = Some(step),
			('1', Some(_)) => {}
			(_, Some(start)) => {
				intervals.push(Interval::new(at(start), at(step)).unwrap());
				started = None;
			}
			(_, None) => {}
		}
	}
	if let Some(start) = started {
		let end = pattern.len() as i64;
		intervals.push(Interval::new(at(start), at(end)).unwrap());
	}

	IntervalSet::from(intervals)
}

/// [`from_bits()`] with plain integer minutes.
pub(crate) fn bits(pattern: &str) -> IntervalSet<i64> {
	from_bits(pattern, |minute| minute)
}

fn intervals_over(numbers: &[i8]) -> Vec<Interval<i8>> {
	let mut output = Vec::new();
	for i in numbers {
		for j in numbers {
			if i < j {
				output.push(ie(*i, *j));
			}
		}
	}
	output
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn bits_to_intervals() {
		assert_eq!(bits("0"), IntervalSet::default());
		assert_eq!(bits("0000000000"), IntervalSet::default());
		assert_eq!(bits("1"), IntervalSet::new(&[ie(0, 1)]));
		assert_eq!(bits("1111111111"), IntervalSet::new(&[ie(0, 10)]));
		assert_eq!(bits("0001111000"), IntervalSet::new(&[ie(3, 7)]));
		assert_eq!(bits("110011"), IntervalSet::new(&[ie(0, 2), ie(4, 6)]));
		assert_eq!(
			bits("1011001101"),
			IntervalSet::new(&[ie(0, 1), ie(2, 4), ie(6, 8), ie(9, 10)])
		);
	}
}
