use serde::{Deserialize, Serialize};

use crate::error::{DistanceError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VectorItem {
    pub id: usize,
    pub vector: Vec<f64>,
}

pub trait DistanceCalculator {
    fn calculate(&self, item1: &VectorItem, item2: &VectorItem) -> Result<f64>;
}

pub struct EuclideanDistance;

impl DistanceCalculator for EuclideanDistance {
    fn calculate(&self, item1: &VectorItem, item2: &VectorItem) -> Result<f64> {
        distance(&item1.vector, &item2.vector)
    }
}

/// Euclidean (L2) distance between two vectors of equal length.
///
/// Elements are widened to `f64` before subtracting, so integer pixel data
/// cannot overflow. Fails with [`DistanceError::InvalidArgument`] when the
/// lengths differ.
pub fn distance<T>(a: &[T], b: &[T]) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    if a.len() != b.len() {
        log::warn!("rejecting distance between vectors of length {} and {}", a.len(), b.len());
        return Err(DistanceError::InvalidArgument { left: a.len(), right: b.len() });
    }

    let dist = a.iter().zip(b.iter())
        .map(|(&x, &y)| (x.into() - y.into()).powi(2))
        .sum::<f64>()
        .sqrt();
    log::trace!("distance over {} dimensions: {}", a.len(), dist);
    Ok(dist)
}
