use refresh_core::{
    update, Edge, Msg, Presentation, PullState, Rect, RefreshData, RefreshState, SentinelSample,
    Size,
};

#[test]
fn presentation_projects_each_state() {
    let data = |state, progress| RefreshData {
        threshold: 60.0,
        progress,
        state,
    };

    assert_eq!(
        data(RefreshState::Idle, 0.4).presentation(),
        Presentation {
            opacity: 0.0,
            padding: -60.0
        }
    );
    assert_eq!(
        data(RefreshState::Resting, 0.4).presentation(),
        Presentation {
            opacity: 0.4,
            padding: -60.0
        }
    );
    assert_eq!(
        data(RefreshState::Triggered, 1.0).presentation(),
        Presentation {
            opacity: 1.0,
            padding: -60.0
        }
    );
    assert_eq!(
        data(RefreshState::Loading, 1.0).presentation(),
        Presentation {
            opacity: 1.0,
            padding: 0.0
        }
    );
}

#[test]
fn view_reports_both_edges() {
    let viewport = Size::new(320.0, 480.0);
    let header = SentinelSample::new(Rect::new(0.0, -50.0, 320.0, 60.0), viewport);
    let (state, _) = update(
        PullState::new(),
        Msg::GeometryChanged {
            edge: Edge::Header,
            sample: Some(SentinelSample::new(Rect::new(0.0, -60.0, 320.0, 60.0), viewport)),
        },
    );
    let (state, _) = update(
        state,
        Msg::GeometryChanged {
            edge: Edge::Header,
            sample: Some(header),
        },
    );

    let view = state.view();
    assert!(view.dirty);
    assert_eq!(view.edge(Edge::Header).state, RefreshState::Resting);
    assert_eq!(view.edge(Edge::Header).label, "Pull down to refresh");
    assert!((view.header.presentation.opacity - 10.0 / 60.0).abs() < 1e-6);
    assert_eq!(view.footer.state, RefreshState::Idle);
    assert_eq!(view.footer.label, "");
    assert_eq!(view.footer.presentation.opacity, 0.0);
}
