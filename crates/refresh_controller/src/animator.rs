use refresh_core::{Edge, PaddingTransition};

/// Receives every change of an edge's sentinel padding.
///
/// Hosts without implicit animation implement this to start an explicit
/// animation (or to apply `to` directly for `PaddingTransition::Immediate`).
pub trait PaddingAnimator {
    fn animate_padding(&mut self, edge: Edge, from: f32, to: f32, transition: PaddingTransition);
}

impl<F> PaddingAnimator for F
where
    F: FnMut(Edge, f32, f32, PaddingTransition),
{
    fn animate_padding(&mut self, edge: Edge, from: f32, to: f32, transition: PaddingTransition) {
        self(edge, from, to, transition)
    }
}
