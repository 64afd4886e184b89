use crate::view_model::{EdgeView, Presentation, PullViewModel};
use crate::Edge;

/// Progress model of one edge. Transitions are only those applied by `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshState {
    /// Sentinel not measured yet, or never seen at its rest anchor.
    #[default]
    Idle,
    /// Armed; progress follows the drag distance.
    Resting,
    /// Pulled past the threshold; waiting for the release.
    Triggered,
    /// Callback fired; samples are ignored until the flag is cleared.
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RefreshData {
    pub threshold: f32,
    pub progress: f32,
    pub state: RefreshState,
}

impl RefreshData {
    pub fn opacity(&self) -> f32 {
        match self.state {
            RefreshState::Idle => 0.0,
            RefreshState::Resting => self.progress,
            RefreshState::Triggered | RefreshState::Loading => 1.0,
        }
    }

    /// Outward offset that keeps the sentinel clipped away unless loading.
    pub fn padding(&self) -> f32 {
        if self.state == RefreshState::Loading {
            0.0
        } else {
            -self.threshold
        }
    }

    pub fn presentation(&self) -> Presentation {
        Presentation {
            opacity: self.opacity(),
            padding: self.padding(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PullState {
    header: RefreshData,
    footer: RefreshData,
    rest_distance: f32,
    dirty: bool,
}

impl PullState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offsets at or under `rest_distance` count as "not pulling yet".
    pub fn with_rest_distance(rest_distance: f32) -> Self {
        Self {
            rest_distance: rest_distance.max(0.0),
            ..Self::default()
        }
    }

    pub fn rest_distance(&self) -> f32 {
        self.rest_distance
    }

    pub fn data(&self, edge: Edge) -> &RefreshData {
        match edge {
            Edge::Header => &self.header,
            Edge::Footer => &self.footer,
        }
    }

    pub(crate) fn data_mut(&mut self, edge: Edge) -> &mut RefreshData {
        match edge {
            Edge::Header => &mut self.header,
            Edge::Footer => &mut self.footer,
        }
    }

    pub fn view(&self) -> PullViewModel {
        PullViewModel {
            header: EdgeView::new(Edge::Header, &self.header),
            footer: EdgeView::new(Edge::Footer, &self.footer),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything observable changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
