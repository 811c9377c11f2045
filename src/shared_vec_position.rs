use std::sync::Arc;

use crate::position::{BidirectionalPosition, Position, RandomAccessPosition};

// Random-access position into a shared vec. Yields elements by value, so it
// has no borrow tying it to the storage and can be held across 'static
// boundaries; the Arc keeps the storage alive.
#[derive(Debug)]
pub struct SharedVecPosition<T> {
    vec: Arc<Vec<T>>,
    index: usize,
}

impl<T> SharedVecPosition<T> {
    pub fn at_start(vec: Arc<Vec<T>>) -> Self {
        Self::check_size(&vec);
        SharedVecPosition { vec, index: 0 }
    }

    pub fn at_end(vec: Arc<Vec<T>>) -> Self {
        Self::check_size(&vec);
        SharedVecPosition {
            index: vec.len(),
            vec,
        }
    }

    pub fn with_index(vec: Arc<Vec<T>>, index: usize) -> Self {
        Self::check_size(&vec);
        assert!(index <= vec.len(), "index out of bounds");
        SharedVecPosition { vec, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn shared_vec(&self) -> Arc<Vec<T>> {
        self.vec.clone()
    }

    fn check_size(vec: &[T]) {
        assert!(vec.len() <= isize::MAX as usize, "vec too large");
    }
}

impl<T> Clone for SharedVecPosition<T> {
    fn clone(&self) -> Self {
        SharedVecPosition {
            vec: self.vec.clone(),
            index: self.index,
        }
    }
}

impl<T> PartialEq for SharedVecPosition<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.vec, &other.vec) && self.index == other.index
    }
}

impl<T: Clone> Position for SharedVecPosition<T> {
    type Item = T;
    type Distance = isize;

    fn current(&self) -> T {
        self.vec[self.index].clone()
    }

    fn step_forward(&mut self) {
        assert!(
            self.index < self.vec.len(),
            "stepped past the end of the vec"
        );
        self.index += 1;
    }

    fn advance_by(&mut self, n: isize) {
        let target = self.index as isize + n;
        assert!(
            target >= 0 && target <= self.vec.len() as isize,
            "shifted out of bounds"
        );
        self.index = target as usize;
    }
}

impl<T: Clone> BidirectionalPosition for SharedVecPosition<T> {
    fn step_back(&mut self) {
        assert!(self.index > 0, "stepped before the start of the vec");
        self.index -= 1;
    }
}

impl<T: Clone> RandomAccessPosition for SharedVecPosition<T> {
    fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(
            Arc::ptr_eq(&self.vec, &other.vec),
            "positions into different vecs"
        );
        other.index as isize - self.index as isize
    }
}
