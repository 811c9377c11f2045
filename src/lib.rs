pub use position::{BidirectionalPosition, Position, RandomAccessPosition, Span};
pub use shared_vec_position::SharedVecPosition;
pub use slice_position::SlicePosition;
pub use window::{End, NegativeCount, Window};

mod position;
mod shared_vec_position;
mod slice_position;
mod window;
