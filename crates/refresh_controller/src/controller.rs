use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use refresh_core::{
    content_offset, update, Edge, Effect, Msg, PaddingTransition, Presentation, PullState,
    PullViewModel, Rect, RefreshData, SentinelSample, Size,
};
use refresh_logging::{refresh_debug, refresh_error, refresh_info, refresh_trace};

use crate::{ControllerError, PaddingAnimator, RefreshConfig, RefreshFlag};

pub type RefreshCallback = Box<dyn FnMut()>;

struct Binding {
    flag: RefreshFlag,
    last_seen: bool,
    on_trigger: RefreshCallback,
}

/// Owns the header and footer state machines of one scrollable list.
///
/// The host reports sentinel geometry on every layout pass and reads back a
/// [`Presentation`] per edge. Triggers raise the bound [`RefreshFlag`] and run
/// the registered callback; lowering the flag re-arms the edge.
pub struct RefreshController {
    state: PullState,
    header: Option<Binding>,
    footer: Option<Binding>,
    animator: Option<Box<dyn PaddingAnimator>>,
    config: RefreshConfig,
}

impl RefreshController {
    pub fn new(config: RefreshConfig) -> Result<Self, ControllerError> {
        config.validate()?;
        Ok(Self {
            state: PullState::with_rest_distance(config.rest_distance),
            header: None,
            footer: None,
            animator: None,
            config,
        })
    }

    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    pub fn attach_refresh_control(
        &mut self,
        edge: Edge,
        flag: RefreshFlag,
        on_trigger: impl FnMut() + 'static,
    ) -> Result<(), ControllerError> {
        let slot = self.binding_mut(edge);
        if slot.is_some() {
            return Err(ControllerError::AlreadyAttached(edge));
        }
        *slot = Some(Binding {
            last_seen: flag.get(),
            flag,
            on_trigger: Box::new(on_trigger),
        });
        refresh_debug!("{} refresh control attached", edge);
        Ok(())
    }

    pub fn set_padding_animator(&mut self, animator: Box<dyn PaddingAnimator>) {
        self.animator = Some(animator);
    }

    /// Feeds one layout measurement of an edge's sentinel into its machine.
    /// `None` means the sentinel has not been laid out yet.
    pub fn report_geometry(&mut self, edge: Edge, sentinel: Option<Rect>, viewport: Size) {
        self.sync_flags();
        let sample = sentinel.map(|rect| SentinelSample::new(rect, viewport));
        if let Some(sample) = &sample {
            refresh_trace!(
                "{} sentinel {:?} viewport {:?} offset {}",
                edge,
                sample.rect,
                viewport,
                content_offset(edge, sample)
            );
        }
        self.dispatch(Msg::GeometryChanged { edge, sample });
    }

    /// Observes every bound flag and re-arms edges whose flag was lowered.
    pub fn sync_flags(&mut self) {
        for edge in Edge::ALL {
            let changed = self.binding_mut(edge).as_mut().and_then(|binding| {
                let now = binding.flag.get();
                if now == binding.last_seen {
                    return None;
                }
                binding.last_seen = now;
                Some(now)
            });
            if let Some(refreshing) = changed {
                refresh_info!("{} refreshing flag changed to {}", edge, refreshing);
                self.dispatch(Msg::RefreshingChanged { edge, refreshing });
            }
        }
    }

    pub fn presentation_state(&mut self, edge: Edge) -> Presentation {
        self.sync_flags();
        self.state.data(edge).presentation()
    }

    pub fn refresh_data(&self, edge: Edge) -> RefreshData {
        *self.state.data(edge)
    }

    pub fn view(&self) -> PullViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn is_refreshing(&self, edge: Edge) -> bool {
        self.binding(edge)
            .map(|binding| binding.flag.get())
            .unwrap_or(false)
    }

    fn dispatch(&mut self, msg: Msg) {
        let before = [
            self.state.data(Edge::Header).state,
            self.state.data(Edge::Footer).state,
        ];
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        for (edge, previous) in Edge::ALL.into_iter().zip(before) {
            let current = self.state.data(edge).state;
            if current != previous {
                refresh_debug!("{} state {:?} -> {:?}", edge, previous, current);
            }
        }
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::BeginRefresh { edge } => self.begin_refresh(edge),
                Effect::AnimatePadding {
                    edge,
                    from,
                    to,
                    transition,
                } => {
                    let transition = if self.config.animate_padding {
                        transition
                    } else {
                        PaddingTransition::Immediate
                    };
                    if let Some(animator) = self.animator.as_mut() {
                        animator.animate_padding(edge, from, to, transition);
                    }
                }
            }
        }
    }

    fn begin_refresh(&mut self, edge: Edge) {
        let Some(binding) = self.binding_mut(edge).as_mut() else {
            refresh_debug!("{} triggered without an attached refresh control", edge);
            return;
        };
        // Raised before the callback so a panicking callback still leaves the
        // edge waiting for the caller to lower the flag.
        binding.flag.set(true);
        binding.last_seen = true;
        refresh_info!("{} refresh triggered", edge);

        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| (binding.on_trigger)())) {
            refresh_error!(
                "{} refresh callback panicked: {}",
                edge,
                panic_message(&*payload)
            );
        }
    }

    fn binding(&self, edge: Edge) -> Option<&Binding> {
        match edge {
            Edge::Header => self.header.as_ref(),
            Edge::Footer => self.footer.as_ref(),
        }
    }

    fn binding_mut(&mut self, edge: Edge) -> &mut Option<Binding> {
        match edge {
            Edge::Header => &mut self.header,
            Edge::Footer => &mut self.footer,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
