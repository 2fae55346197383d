mod error;
pub mod vector;

pub use error::{DistanceError, Result};
pub use vector::{distance, DistanceCalculator, EuclideanDistance, VectorItem};
