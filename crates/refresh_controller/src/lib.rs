//! Refresh controller: binds the pure state machine to caller flags and callbacks.
mod animator;
mod config;
mod controller;
mod error;
mod flag;

pub use animator::PaddingAnimator;
pub use config::RefreshConfig;
pub use controller::{RefreshCallback, RefreshController};
pub use error::ControllerError;
pub use flag::RefreshFlag;
pub use refresh_core::{
    Edge, EdgeView, PaddingTransition, Presentation, PullViewModel, Rect, RefreshData,
    RefreshState, Size,
};
