use crate::Edge;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The edge entered `Loading`: raise its refreshing flag and run its callback once.
    BeginRefresh { edge: Edge },
    /// The sentinel padding of an edge changed and should be applied by the host.
    AnimatePadding {
        edge: Edge,
        from: f32,
        to: f32,
        transition: PaddingTransition,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingTransition {
    /// Ease in towards the target; used when the sentinel is tucked away.
    EaseIn,
    /// Jump straight to the target.
    Immediate,
}

impl PaddingTransition {
    /// Only padding that hides the sentinel (negative) is animated.
    pub fn for_target(to: f32) -> Self {
        if to < 0.0 {
            PaddingTransition::EaseIn
        } else {
            PaddingTransition::Immediate
        }
    }
}
