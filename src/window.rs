use std::iter::FusedIterator;
use std::ops::Sub;

use num_traits::{One, Signed, ToPrimitive, Zero};
use thiserror::Error;

use crate::position::{BidirectionalPosition, Position, RandomAccessPosition};

// Mutable iteration state: a base position plus the signed number of elements
// still to be produced. Every mutation moves both together, so `remaining`
// always equals the number of forward steps left before the window's logical
// end. `remaining` goes negative only transiently inside distance arithmetic,
// never on a window that is dereferenced.
#[derive(Debug, Clone)]
struct WindowCursor<P: Position> {
    base: P,
    remaining: P::Distance,
}

impl<P: Position> WindowCursor<P> {
    fn bump(&mut self) {
        self.base.step_forward();
        self.remaining = self.remaining - P::Distance::one();
    }

    fn advance(&mut self, n: P::Distance) {
        self.remaining = self.remaining - n;
        self.base.advance_by(n);
    }
}

#[derive(Error, Debug)]
#[error("window count is negative")]
pub struct NegativeCount;

// A bounded window over some sequence: iterates exactly `count` elements
// starting at `base`, no matter where (or whether) the underlying sequence
// itself ends.
#[derive(Debug, Clone)]
pub struct Window<P: Position> {
    cursor: WindowCursor<P>,
}

// Marks the logical end of a window. Compares equal to a window exactly when
// its count has reached zero; never looks at the underlying sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct End;

impl<P: Position> Window<P> {
    pub fn new(base: P, count: P::Distance) -> Self {
        assert!(!count.is_negative(), "window count must be non-negative");
        Window {
            cursor: WindowCursor {
                base,
                remaining: count,
            },
        }
    }

    pub fn try_new(base: P, count: P::Distance) -> Result<Self, NegativeCount> {
        if count.is_negative() {
            return Err(NegativeCount);
        }
        Ok(Window {
            cursor: WindowCursor {
                base,
                remaining: count,
            },
        })
    }

    pub fn base(&self) -> &P {
        &self.cursor.base
    }

    pub fn count(&self) -> P::Distance {
        self.cursor.remaining
    }

    pub fn at_end(&self) -> bool {
        self.cursor.remaining.is_zero()
    }

    // Discard the count and hand back the raw position, e.g. to run an
    // algorithm that only understands the unwrapped type. Pair with `resume`
    // to pick the window back up afterwards.
    pub fn into_base(self) -> P {
        self.cursor.base
    }

    // Rebuild a window from a raw position that was advanced `advanced` steps
    // past this window's base. O(1): the count is adjusted rather than
    // re-derived. The claimed displacement must be truthful; debug builds
    // verify it and abort on a mismatch.
    pub fn resume(&self, base: P, advanced: P::Distance) -> Self {
        debug_assert!(
            displaced(&self.cursor.base, advanced) == base,
            "resumed base does not match the claimed displacement"
        );
        Window {
            cursor: WindowCursor {
                base,
                remaining: self.cursor.remaining - advanced,
            },
        }
    }

    // Like `resume`, but measures the displacement itself. Only positions
    // with native distance measurement can do this; everyone else states the
    // displacement explicitly.
    pub fn resume_from(&self, base: P) -> Self
    where
        P: RandomAccessPosition,
    {
        let advanced = self.cursor.base.distance_to(&base);
        Window {
            cursor: WindowCursor {
                base,
                remaining: self.cursor.remaining - advanced,
            },
        }
    }
}

fn displaced<P: Position>(base: &P, n: P::Distance) -> P {
    let mut probe = base.clone();
    probe.advance_by(n);
    probe
}

impl<P: Position> Position for Window<P> {
    type Item = P::Item;
    type Distance = P::Distance;

    fn current(&self) -> Self::Item {
        assert!(
            self.cursor.remaining > P::Distance::zero(),
            "window is exhausted"
        );
        self.cursor.base.current()
    }

    fn step_forward(&mut self) {
        self.cursor.bump();
    }

    // One bulk call into the base instead of n trips through step_forward.
    // Generic code that advances positions through this trait method gets the
    // fast path without opting in.
    fn advance_by(&mut self, n: Self::Distance) {
        self.cursor.advance(n);
    }
}

impl<P: BidirectionalPosition> BidirectionalPosition for Window<P> {
    fn step_back(&mut self) {
        self.cursor.base.step_back();
        self.cursor.remaining = self.cursor.remaining + P::Distance::one();
    }
}

impl<P: RandomAccessPosition> RandomAccessPosition for Window<P> {
    // Measured between the bases, in the underlying sequence's own distance,
    // not from the counts.
    fn distance_to(&self, other: &Self) -> Self::Distance {
        self.cursor.base.distance_to(&other.cursor.base)
    }
}

// Two windows are at the same place exactly when the same amount of work
// remains; the bases are not consulted, so windows over sequences whose
// positions are not mutually comparable still compare fine.
impl<P: Position> PartialEq for Window<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor.remaining == other.cursor.remaining
    }
}

impl<P: Position> Eq for Window<P> {}

impl<P: Position> PartialEq<End> for Window<P> {
    fn eq(&self, _: &End) -> bool {
        self.at_end()
    }
}

impl<P: Position> PartialEq<Window<P>> for End {
    fn eq(&self, other: &Window<P>) -> bool {
        other.at_end()
    }
}

// end - begin, in elements. Count-based, so it works even when the underlying
// positions have no native distance; random-access callers wanting the
// sequence's own measure use distance_to instead (the two agree in value).
impl<'a, 'b, P: Position> Sub<&'b Window<P>> for &'a Window<P> {
    type Output = P::Distance;

    fn sub(self, begin: &'b Window<P>) -> P::Distance {
        begin.count() - self.count()
    }
}

// Distance from a window forward to its own end is exactly the count.
impl<'a, P: Position> Sub<&'a Window<P>> for End {
    type Output = P::Distance;

    fn sub(self, begin: &'a Window<P>) -> P::Distance {
        begin.count()
    }
}

impl<'a, P: Position> Sub<End> for &'a Window<P> {
    type Output = P::Distance;

    fn sub(self, _: End) -> P::Distance {
        -self.count()
    }
}

impl Sub for End {
    // No window on either side to borrow a distance width from.
    type Output = isize;

    fn sub(self, _: End) -> isize {
        0
    }
}

impl<P: Position> Iterator for Window<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at_end() {
            return None;
        }
        let item = self.cursor.base.current();
        self.cursor.bump();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.count().to_usize() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<P: Position> FusedIterator for Window<P> {}
