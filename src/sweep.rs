//! The weighted sweep-line shared by the [`IntervalSet`](crate::IntervalSet)
//! operations.
//!
//! Every operand contributes a signed weight to the running coverage while
//! at least one of its intervals is open. Output intervals span the
//! stretches where the coverage is positive, so choosing the weights picks
//! the operation: `+1, +1` is a union, `+1, -1` keeps the left operand
//! minus the right one.
//!
//! Because an operand's weight counts once however many of its intervals
//! are open, overlapping intervals within one operand never cancel the
//! other operand twice.

use alloc::vec::Vec;

use itertools::Itertools;

use crate::boundary::{boundary_events, BoundaryEvent, BoundaryKind};
use crate::{Interval, InvalidRangeError, PointType};

/// The running signed coverage of the sweep.
#[derive(Debug)]
struct Coverage {
	depths: [usize; 2],
	weights: [i32; 2],
}

impl Coverage {
	fn new(left_weight: i32, right_weight: i32) -> Self {
		Coverage {
			depths: [0, 0],
			weights: [left_weight, right_weight],
		}
	}

	fn apply<T>(&mut self, event: &BoundaryEvent<T>) {
		let depth = &mut self.depths[event.operand.index()];
		match event.kind {
			BoundaryKind::Start => *depth += 1,
			BoundaryKind::End => *depth -= 1,
		}
	}

	fn net(&self) -> i32 {
		self.depths
			.iter()
			.zip(self.weights)
			.filter(|(depth, _)| **depth > 0)
			.map(|(_, weight)| weight)
			.sum()
	}
}

/// Sweeps the boundaries of both operands and returns the canonical
/// intervals where the weighted coverage is positive.
///
/// Returns [`InvalidRangeError`] without a partial result if a zero-length
/// interval would be produced.
pub(crate) fn apply<T>(
	left: &[Interval<T>],
	right: &[Interval<T>],
	left_weight: i32,
	right_weight: i32,
) -> Result<Vec<Interval<T>>, InvalidRangeError>
where
	T: PointType,
{
	let swept = sweep(left, right, left_weight, right_weight);

	stitch_adjacent(swept)
}

/// The raw `(start, end)` runs of positive coverage in chronological
/// order. Touching runs are not merged yet.
fn sweep<T>(
	left: &[Interval<T>],
	right: &[Interval<T>],
	left_weight: i32,
	right_weight: i32,
) -> Vec<(T, T)>
where
	T: PointType,
{
	let mut coverage = Coverage::new(left_weight, right_weight);
	let mut open: Option<T> = None;
	let mut swept = Vec::new();

	for event in boundary_events(left, right) {
		let previous = coverage.net();
		coverage.apply(&event);
		let current = coverage.net();

		if previous <= 0 && current > 0 {
			open = Some(event.time);
		} else if previous > 0 && current <= 0 {
			//a run opened and closed at the same instant is empty
			match open.take() {
				Some(start) if start != event.time => {
					swept.push((start, event.time));
				}
				_ => {}
			}
		}
	}

	return swept;
}

/// Merges every run whose start equals the previous run's end, then
/// validates the results.
fn stitch_adjacent<T>(
	swept: Vec<(T, T)>,
) -> Result<Vec<Interval<T>>, InvalidRangeError>
where
	T: PointType,
{
	swept
		.into_iter()
		.coalesce(|(start, end), (next_start, next_end)| {
			if end == next_start {
				Ok((start, next_end))
			} else {
				Err(((start, end), (next_start, next_end)))
			}
		})
		.map(|(start, end)| Interval::new(start, end))
		.collect()
}
