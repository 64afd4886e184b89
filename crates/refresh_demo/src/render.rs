use refresh_controller::{EdgeView, PullViewModel, RefreshState};

const BAR_WIDTH: usize = 10;

/// One status line for a frame in which something observable changed.
pub fn status_line(frame: u64, view: &PullViewModel, item_count: usize) -> String {
    format!(
        "#{frame:<5} header {} | footer {} | items {item_count}",
        edge_summary(&view.header),
        edge_summary(&view.footer),
    )
}

fn edge_summary(edge: &EdgeView) -> String {
    let state = match edge.state {
        RefreshState::Idle => "idle",
        RefreshState::Resting => "resting",
        RefreshState::Triggered => "triggered",
        RefreshState::Loading => "loading",
    };
    let summary = format!(
        "{state:<9} {} a={:.2} pad={:>4.0}",
        progress_bar(edge.progress),
        edge.presentation.opacity,
        edge.presentation.padding,
    );
    if edge.label.is_empty() {
        summary
    } else {
        format!("{summary} \"{}\"", edge.label)
    }
}

fn progress_bar(progress: f32) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0), "[----------]");
        assert_eq!(progress_bar(0.25), "[###-------]");
        assert_eq!(progress_bar(1.0), "[##########]");
        assert_eq!(progress_bar(3.0), "[##########]");
    }
}
