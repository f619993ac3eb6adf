//! Boundary events, the input of the sweep in [`crate::sweep`].

use alloc::vec::Vec;

use crate::{Interval, PointType};

/// Which side of an interval a [`BoundaryEvent`] marks.
///
/// The declaration order is the tie-break order: at equal timestamps ends
/// are swept before starts, so touching intervals close before the next
/// one opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum BoundaryKind {
	End,
	Start,
}

/// Which operand of a binary set operation an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
	Left,
	Right,
}

impl Operand {
	pub(crate) fn index(self) -> usize {
		match self {
			Operand::Left => 0,
			Operand::Right => 1,
		}
	}
}

/// One endpoint of one input interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BoundaryEvent<T> {
	pub(crate) time: T,
	pub(crate) kind: BoundaryKind,
	pub(crate) operand: Operand,
}

/// Builds the boundary events of both operands, sorted chronologically
/// with ends before starts at equal timestamps.
///
/// The sort is stable so events which compare equal keep the order they
/// were pushed in, left operand first.
pub(crate) fn boundary_events<T>(
	left: &[Interval<T>],
	right: &[Interval<T>],
) -> Vec<BoundaryEvent<T>>
where
	T: PointType,
{
	let mut events = Vec::with_capacity(2 * (left.len() + right.len()));

	push_boundaries(&mut events, left, Operand::Left);
	push_boundaries(&mut events, right, Operand::Right);

	events.sort_by(|a, b| a.time.cmp(&b.time).then(a.kind.cmp(&b.kind)));

	return events;
}

fn push_boundaries<T>(
	events: &mut Vec<BoundaryEvent<T>>,
	intervals: &[Interval<T>],
	operand: Operand,
) where
	T: PointType,
{
	for interval in intervals {
		events.push(BoundaryEvent {
			time: interval.start(),
			kind: BoundaryKind::Start,
			operand,
		});
		events.push(BoundaryEvent {
			time: interval.end(),
			kind: BoundaryKind::End,
			operand,
		});
	}
}
