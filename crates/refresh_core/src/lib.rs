//! Refresh core: pure pull-to-refresh state machine and view-model helpers.
mod effect;
mod geometry;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, PaddingTransition};
pub use geometry::{content_offset, is_at_rest, Edge, Point, Rect, SentinelSample, Size};
pub use msg::Msg;
pub use state::{PullState, RefreshData, RefreshState};
pub use update::update;
pub use view_model::{EdgeView, Presentation, PullViewModel};
