use crate::{Edge, RefreshData, RefreshState};

/// What the host applies to a sentinel view each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Presentation {
    pub opacity: f32,
    pub padding: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeView {
    pub edge: Edge,
    pub state: RefreshState,
    pub progress: f32,
    pub presentation: Presentation,
    pub label: &'static str,
}

impl EdgeView {
    pub(crate) fn new(edge: Edge, data: &RefreshData) -> Self {
        Self {
            edge,
            state: data.state,
            progress: data.progress,
            presentation: data.presentation(),
            label: label(edge, data.state),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PullViewModel {
    pub header: EdgeView,
    pub footer: EdgeView,
    pub dirty: bool,
}

impl PullViewModel {
    pub fn edge(&self, edge: Edge) -> &EdgeView {
        match edge {
            Edge::Header => &self.header,
            Edge::Footer => &self.footer,
        }
    }
}

fn label(edge: Edge, state: RefreshState) -> &'static str {
    match (edge, state) {
        (_, RefreshState::Idle) => "",
        (Edge::Header, RefreshState::Resting) => "Pull down to refresh",
        (Edge::Header, RefreshState::Triggered) => "Release to refresh",
        (Edge::Header, RefreshState::Loading) => "Refreshing…",
        (Edge::Footer, RefreshState::Resting) => "Pull up to load more",
        (Edge::Footer, RefreshState::Triggered) => "Release to load more",
        (Edge::Footer, RefreshState::Loading) => "Loading more…",
    }
}
