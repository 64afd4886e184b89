use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use refresh_controller::{Edge, RefreshController, RefreshFlag, RefreshState};
use refresh_logging::{refresh_debug, refresh_info, refresh_warn};

use crate::config::DemoConfig;
use crate::feed::Feed;
use crate::render;
use crate::surface::ScrollSurface;
use crate::worker::{Completion, Job, Worker};

/// Frames spent pulling in one gesture.
const PULL_FRAMES: u32 = 12;
/// Frames to idle between and after the scripted gestures.
const PAUSE_FRAMES: u32 = 20;

#[derive(Debug, Clone, Copy)]
enum Step {
    Drag { dy: f32, frames: u32 },
    Release,
    ScrollToEnd,
    Pause { frames: u32 },
    AwaitSettled(Edge),
}

/// Pull down on the header, then scroll to the end and pull up on the footer.
fn script(config: &DemoConfig) -> Vec<Step> {
    let header_pull = config.header_height * 2.0 + config.refresh.rest_distance;
    let footer_pull = config.footer_height * 2.0 + config.refresh.rest_distance;
    vec![
        Step::Pause {
            frames: PAUSE_FRAMES,
        },
        Step::Drag {
            dy: header_pull / PULL_FRAMES as f32,
            frames: PULL_FRAMES,
        },
        Step::Release,
        Step::AwaitSettled(Edge::Header),
        Step::ScrollToEnd,
        Step::Pause {
            frames: PAUSE_FRAMES,
        },
        Step::Drag {
            dy: -footer_pull / PULL_FRAMES as f32,
            frames: PULL_FRAMES,
        },
        Step::Release,
        Step::AwaitSettled(Edge::Footer),
        Step::Pause {
            frames: PAUSE_FRAMES,
        },
    ]
}

pub fn run(config: DemoConfig) -> anyhow::Result<()> {
    let mut app = DemoApp::new(&config)?;
    for step in script(&config) {
        app.perform(step);
    }
    refresh_info!(
        "Demo finished after {} frames with {} items",
        app.frame,
        app.feed.len()
    );
    Ok(())
}

struct DemoApp {
    controller: RefreshController,
    surface: ScrollSurface,
    feed: Feed,
    header_flag: RefreshFlag,
    footer_flag: RefreshFlag,
    done_rx: mpsc::Receiver<Completion>,
    frame: u64,
    frame_interval: Duration,
    max_wait_frames: u64,
    item_count: Rc<Cell<usize>>,
}

impl DemoApp {
    fn new(config: &DemoConfig) -> anyhow::Result<Self> {
        let feed = Feed::with_first_page(config.initial_items);
        let surface = ScrollSurface::new(config, feed.len());
        let mut controller = RefreshController::new(config.refresh.clone())?;
        controller.set_padding_animator(surface.animator());

        let (done_tx, done_rx) = mpsc::channel();
        let worker = Worker::spawn(
            Duration::from_millis(config.load_delay_ms),
            config.page_size,
            done_tx,
        );
        let item_count = Rc::new(Cell::new(feed.len()));

        let header_flag = RefreshFlag::default();
        let reload = worker.clone();
        controller.attach_refresh_control(Edge::Header, header_flag.clone(), move || {
            reload.submit(Job::Reload)
        })?;

        let footer_flag = RefreshFlag::default();
        let count = item_count.clone();
        controller.attach_refresh_control(Edge::Footer, footer_flag.clone(), move || {
            worker.submit(Job::LoadMore { start: count.get() })
        })?;

        let frame_interval = Duration::from_millis(config.frame_interval_ms);
        let max_wait_frames = config.load_delay_ms / config.frame_interval_ms.max(1) * 2 + 600;

        Ok(Self {
            controller,
            surface,
            feed,
            header_flag,
            footer_flag,
            done_rx,
            frame: 0,
            frame_interval,
            max_wait_frames,
            item_count,
        })
    }

    fn perform(&mut self, step: Step) {
        refresh_debug!("Step {:?}", step);
        match step {
            Step::Drag { dy, frames } => {
                for _ in 0..frames {
                    self.surface.drag_by(dy);
                    self.frame();
                }
            }
            Step::Release => {
                self.surface.release();
                self.frame();
            }
            Step::ScrollToEnd => {
                self.surface.scroll_to_end();
                refresh_debug!("Scrolled to {}", self.surface.scroll_y());
                self.frame();
            }
            Step::Pause { frames } => {
                for _ in 0..frames {
                    self.frame();
                }
            }
            Step::AwaitSettled(edge) => {
                let mut waited = 0;
                while !self.is_settled(edge) {
                    if waited == self.max_wait_frames {
                        refresh_warn!("{} did not settle after {} frames", edge, waited);
                        return;
                    }
                    self.frame();
                    waited += 1;
                }
            }
        }
    }

    fn is_settled(&self, edge: Edge) -> bool {
        !self.controller.is_refreshing(edge)
            && self.controller.refresh_data(edge).state == RefreshState::Resting
            && self.surface.is_settled()
    }

    /// One layout pass: animate, apply finished work, measure, render.
    fn frame(&mut self) {
        self.frame += 1;
        refresh_logging::set_frame(self.frame);

        self.surface.tick();
        self.apply_completions();

        let viewport = self.surface.viewport();
        for edge in Edge::ALL {
            let rect = self.surface.sentinel_rect(edge);
            self.controller.report_geometry(edge, Some(rect), viewport);
        }

        if self.controller.consume_dirty() {
            println!(
                "{}",
                render::status_line(self.frame, &self.controller.view(), self.feed.len())
            );
        }
        thread::sleep(self.frame_interval);
    }

    fn apply_completions(&mut self) {
        while let Ok(completion) = self.done_rx.try_recv() {
            match completion.edge {
                Edge::Header => self.feed.replace(completion.items),
                Edge::Footer => self.feed.append(completion.items),
            }
            self.item_count.set(self.feed.len());
            self.surface.set_item_count(self.feed.len());
            if let Some(last) = self.feed.last() {
                refresh_info!(
                    "{} work done, {} items (last {:?} loaded at {})",
                    completion.edge,
                    self.feed.len(),
                    last.name,
                    last.loaded_at.format("%H:%M:%S%.3f")
                );
            }
            let flag = match completion.edge {
                Edge::Header => &self.header_flag,
                Edge::Footer => &self.footer_flag,
            };
            flag.set(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> DemoConfig {
        DemoConfig {
            load_delay_ms: 0,
            frame_interval_ms: 1,
            ..DemoConfig::default()
        }
    }

    #[test]
    fn scripted_session_refreshes_and_loads_more() {
        let config = fast_config();
        let mut app = DemoApp::new(&config).unwrap();
        for step in script(&config) {
            app.perform(step);
        }

        assert_eq!(app.feed.len(), config.initial_items + config.page_size);
        assert!(!app.header_flag.get());
        assert!(!app.footer_flag.get());
        assert_eq!(
            app.controller.refresh_data(Edge::Footer).state,
            RefreshState::Resting
        );
        assert_eq!(
            app.controller.refresh_data(Edge::Header).state,
            RefreshState::Resting
        );
    }

    #[test]
    fn header_arms_once_initial_padding_settles() {
        let config = fast_config();
        let mut app = DemoApp::new(&config).unwrap();

        app.perform(Step::Pause { frames: 1 });
        assert_eq!(
            app.controller.refresh_data(Edge::Header).state,
            RefreshState::Idle
        );
        assert_eq!(
            app.controller.refresh_data(Edge::Footer).state,
            RefreshState::Resting
        );

        app.perform(Step::Pause {
            frames: config.animation_frames + 1,
        });
        assert_eq!(
            app.controller.refresh_data(Edge::Header).state,
            RefreshState::Resting
        );
    }
}
