use std::fmt::Debug;
use std::hash::Hash;

use num_integer::Integer;
use num_traits::{Bounded, One, PrimInt, Signed, Zero};

// Signed measure of displacement between two positions. Whatever integer
// width the underlying sequence counts in qualifies automatically.
pub trait Span:
    PrimInt + Signed + Bounded + Hash + Eq + Copy + Ord + PartialOrd + Integer + Debug
{
}

impl<T: PrimInt + Signed + Bounded + Hash + Eq + Copy + Ord + PartialOrd + Integer + Debug> Span
    for T
{
}

// A place in some sequence. A position only knows how to look at the element
// under it and how to move; it has no notion of where the sequence ends, and
// moving out of the dereferenceable range is a caller bug.
pub trait Position: Clone + PartialEq {
    type Item;
    type Distance: Span;

    // The element under the position. Only valid while the position is on an
    // element; fails fast otherwise.
    fn current(&self) -> Self::Item;

    fn step_forward(&mut self);

    // Move by n elements in one call. The default walks step_forward and
    // rejects negative n; implementations that can do better (random access,
    // or bidirectional ones that accept n < 0) override it.
    fn advance_by(&mut self, n: Self::Distance) {
        assert!(
            !n.is_negative(),
            "cannot advance a forward-only position by a negative distance"
        );
        let mut left = n;
        while left > Self::Distance::zero() {
            self.step_forward();
            left = left - Self::Distance::one();
        }
    }
}

pub trait BidirectionalPosition: Position {
    fn step_back(&mut self);
}

// Adds direct distance measurement. Implementors are expected to override
// advance_by with a constant-time shift that also handles negative n.
pub trait RandomAccessPosition: BidirectionalPosition {
    // Signed distance from self to other, in the sequence's own measure.
    fn distance_to(&self, other: &Self) -> Self::Distance;
}
