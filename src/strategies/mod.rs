//! Strategy implementations.

pub mod first_empty;
pub mod minimax;
pub mod parallel;
pub mod random;
