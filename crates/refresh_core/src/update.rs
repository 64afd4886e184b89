use crate::geometry::{content_offset, is_at_rest};
use crate::{
    Edge, Effect, Msg, PaddingTransition, PullState, RefreshData, RefreshState, SentinelSample,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PullState, msg: Msg) -> (PullState, Vec<Effect>) {
    let effects = match msg {
        Msg::GeometryChanged { edge, sample } => {
            let Some(sample) = sample.filter(SentinelSample::is_valid) else {
                return (state, Vec::new());
            };
            let before = *state.data(edge);
            let rest_distance = state.rest_distance();
            let began = apply_sample(state.data_mut(edge), edge, &sample, rest_distance);
            settle(&mut state, edge, before, began)
        }
        Msg::RefreshingChanged { edge, refreshing } => {
            if refreshing {
                return (state, Vec::new());
            }
            // Back to Resting rather than Idle so the next pull counts immediately.
            let before = *state.data(edge);
            state.data_mut(edge).state = RefreshState::Resting;
            settle(&mut state, edge, before, false)
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Runs one sample through the edge's machine. Returns true when the sample
/// moved the edge into `Loading`.
fn apply_sample(
    data: &mut RefreshData,
    edge: Edge,
    sample: &SentinelSample,
    rest_distance: f32,
) -> bool {
    if data.state == RefreshState::Loading {
        return false;
    }

    let threshold = sample.extent();
    if threshold != data.threshold {
        data.threshold = threshold;
    }

    if data.state == RefreshState::Idle && is_at_rest(edge, sample, data.threshold) {
        data.state = RefreshState::Resting;
    }

    let offset = content_offset(edge, sample);
    if offset == 0.0 {
        data.progress = 0.0;
    }
    if offset <= rest_distance {
        return false;
    }
    let offset = offset - rest_distance;

    // A collapsed sentinel can never be pulled past.
    if data.threshold <= 0.0 {
        data.progress = 0.0;
        return false;
    }

    if data.state == RefreshState::Resting {
        let candidate = (offset / data.threshold).min(1.0);
        if candidate < data.progress {
            return false;
        }
        data.progress = candidate;
    }

    if offset > data.threshold && data.state == RefreshState::Resting {
        data.state = RefreshState::Triggered;
        data.progress = 1.0;
    }

    if offset <= data.threshold && data.state == RefreshState::Triggered {
        data.state = RefreshState::Loading;
        data.progress = 1.0;
        return true;
    }

    false
}

fn settle(state: &mut PullState, edge: Edge, before: RefreshData, began: bool) -> Vec<Effect> {
    let after = *state.data(edge);
    if after != before {
        state.mark_dirty();
    }

    let mut effects = Vec::new();
    let (from, to) = (before.padding(), after.padding());
    if from != to {
        effects.push(Effect::AnimatePadding {
            edge,
            from,
            to,
            transition: PaddingTransition::for_target(to),
        });
    }
    if began {
        effects.push(Effect::BeginRefresh { edge });
    }
    effects
}
