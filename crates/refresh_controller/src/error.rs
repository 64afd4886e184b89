use refresh_core::Edge;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ControllerError {
    #[error("{0} refresh control is already attached")]
    AlreadyAttached(Edge),
    #[error("rest distance must be finite and non-negative, got {0}")]
    InvalidRestDistance(f32),
}
