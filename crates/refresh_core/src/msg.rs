use crate::{Edge, SentinelSample};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Host re-laid-out the scroll surface and measured a sentinel.
    /// `None` means the sentinel has not been measured yet.
    GeometryChanged {
        edge: Edge,
        sample: Option<SentinelSample>,
    },
    /// The externally bound refreshing flag of an edge changed value.
    RefreshingChanged { edge: Edge, refreshing: bool },
    /// Fallback for placeholder wiring.
    NoOp,
}
