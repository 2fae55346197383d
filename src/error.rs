use thiserror::Error;

pub type Result<T> = std::result::Result<T, DistanceError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    #[error("invalid argument: vector lengths differ (left: {left}, right: {right})")]
    InvalidArgument { left: usize, right: usize },
}
