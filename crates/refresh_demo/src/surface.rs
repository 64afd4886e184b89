//! Simulated vertical scroll view hosting a header sentinel, the feed rows and
//! a footer sentinel.

use std::cell::RefCell;
use std::rc::Rc;

use refresh_controller::{Edge, PaddingAnimator, PaddingTransition, Rect, Size};

use crate::config::DemoConfig;

/// Fraction of the overscroll recovered per frame after release.
const SPRING: f32 = 0.25;
const MIN_SPRING_STEP: f32 = 1.0;

#[derive(Debug, Clone, Copy, Default)]
struct Track {
    current: f32,
    from: f32,
    target: f32,
    frame: u32,
    frames: u32,
}

impl Track {
    fn start(&mut self, to: f32, transition: PaddingTransition, frames: u32) {
        self.from = self.current;
        self.target = to;
        self.frame = 0;
        match transition {
            PaddingTransition::Immediate => {
                self.current = to;
                self.frames = 0;
            }
            PaddingTransition::EaseIn => self.frames = frames.max(1),
        }
    }

    fn tick(&mut self) {
        if self.is_done() {
            return;
        }
        self.frame += 1;
        if self.frame >= self.frames {
            self.current = self.target;
            return;
        }
        let t = self.frame as f32 / self.frames as f32;
        self.current = self.from + (self.target - self.from) * t * t;
    }

    fn is_done(&self) -> bool {
        self.current == self.target
    }
}

#[derive(Debug, Default)]
struct Paddings {
    top: Track,
    bottom: Track,
    frames: u32,
}

impl Paddings {
    fn track_mut(&mut self, edge: Edge) -> &mut Track {
        match edge {
            Edge::Header => &mut self.top,
            Edge::Footer => &mut self.bottom,
        }
    }
}

/// Applies padding effects from the controller onto the surface's tracks.
struct SurfaceAnimator(Rc<RefCell<Paddings>>);

impl PaddingAnimator for SurfaceAnimator {
    fn animate_padding(&mut self, edge: Edge, _from: f32, to: f32, transition: PaddingTransition) {
        let mut paddings = self.0.borrow_mut();
        let frames = paddings.frames;
        paddings.track_mut(edge).start(to, transition, frames);
    }
}

pub struct ScrollSurface {
    viewport: Size,
    item_height: f32,
    header_height: f32,
    footer_height: f32,
    item_count: usize,
    scroll_y: f32,
    dragging: bool,
    paddings: Rc<RefCell<Paddings>>,
}

impl ScrollSurface {
    pub fn new(config: &DemoConfig, item_count: usize) -> Self {
        Self {
            viewport: Size::new(config.viewport_width, config.viewport_height),
            item_height: config.item_height,
            header_height: config.header_height,
            footer_height: config.footer_height,
            item_count,
            scroll_y: 0.0,
            dragging: false,
            paddings: Rc::new(RefCell::new(Paddings {
                frames: config.animation_frames,
                ..Paddings::default()
            })),
        }
    }

    pub fn animator(&self) -> Box<dyn PaddingAnimator> {
        Box::new(SurfaceAnimator(self.paddings.clone()))
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    /// Finger moved by `dy` (positive = down). Overscroll is allowed while dragging.
    pub fn drag_by(&mut self, dy: f32) {
        self.dragging = true;
        self.scroll_y -= dy;
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_y = self.max_scroll();
    }

    /// Advances padding animations and, once released, springs back into range.
    pub fn tick(&mut self) {
        {
            let mut paddings = self.paddings.borrow_mut();
            paddings.top.tick();
            paddings.bottom.tick();
        }
        if self.dragging {
            return;
        }
        let target = self.scroll_y.clamp(0.0, self.max_scroll());
        let overshoot = self.scroll_y - target;
        let step = (overshoot.abs() * SPRING).max(MIN_SPRING_STEP);
        if overshoot.abs() <= step {
            self.scroll_y = target;
        } else {
            self.scroll_y -= step * overshoot.signum();
        }
    }

    pub fn is_settled(&self) -> bool {
        let paddings = self.paddings.borrow();
        !self.dragging
            && paddings.top.is_done()
            && paddings.bottom.is_done()
            && self.scroll_y == self.scroll_y.clamp(0.0, self.max_scroll())
    }

    pub fn header_rect(&self) -> Rect {
        Rect::new(
            0.0,
            self.padding_top() - self.scroll_y,
            self.viewport.width,
            self.header_height,
        )
    }

    pub fn footer_rect(&self) -> Rect {
        Rect::new(
            0.0,
            self.padding_top() + self.header_height + self.items_height() - self.scroll_y,
            self.viewport.width,
            self.footer_height,
        )
    }

    pub fn sentinel_rect(&self, edge: Edge) -> Rect {
        match edge {
            Edge::Header => self.header_rect(),
            Edge::Footer => self.footer_rect(),
        }
    }

    fn padding_top(&self) -> f32 {
        self.paddings.borrow().top.current
    }

    fn padding_bottom(&self) -> f32 {
        self.paddings.borrow().bottom.current
    }

    fn items_height(&self) -> f32 {
        self.item_count as f32 * self.item_height
    }

    fn content_height(&self) -> f32 {
        self.padding_top()
            + self.header_height
            + self.items_height()
            + self.footer_height
            + self.padding_bottom()
    }

    fn max_scroll(&self) -> f32 {
        (self.content_height() - self.viewport.height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> ScrollSurface {
        let config = DemoConfig {
            viewport_width: 300.0,
            viewport_height: 500.0,
            item_height: 100.0,
            header_height: 50.0,
            footer_height: 50.0,
            animation_frames: 4,
            ..DemoConfig::default()
        };
        let surface = ScrollSurface::new(&config, 10);
        let mut animator = surface.animator();
        animator.animate_padding(Edge::Header, 0.0, -50.0, PaddingTransition::Immediate);
        animator.animate_padding(Edge::Footer, 0.0, -50.0, PaddingTransition::Immediate);
        surface
    }

    #[test]
    fn hidden_sentinels_sit_on_their_anchors() {
        let mut surface = surface();
        assert_eq!(surface.header_rect().y, -50.0);

        surface.scroll_to_end();
        assert_eq!(surface.scroll_y(), 500.0);
        assert_eq!(surface.footer_rect().y, 500.0);
        assert!(surface.is_settled());
    }

    #[test]
    fn release_springs_back_exactly_to_the_edge() {
        let mut surface = surface();
        surface.drag_by(90.0);
        assert_eq!(surface.header_rect().y, 40.0);

        surface.tick();
        assert_eq!(surface.scroll_y(), -90.0);

        surface.release();
        for _ in 0..100 {
            surface.tick();
        }
        assert_eq!(surface.scroll_y(), 0.0);
        assert!(surface.is_settled());
    }

    #[test]
    fn ease_in_reaches_target_after_configured_frames() {
        let mut surface = surface();
        let mut animator = surface.animator();
        animator.animate_padding(Edge::Header, -50.0, 0.0, PaddingTransition::Immediate);
        assert_eq!(surface.header_rect().y, 0.0);

        animator.animate_padding(Edge::Header, 0.0, -50.0, PaddingTransition::EaseIn);
        surface.tick();
        let y = surface.header_rect().y;
        assert!(y < 0.0 && y > -50.0, "mid-animation y {y}");
        assert!(!surface.is_settled());

        for _ in 0..3 {
            surface.tick();
        }
        assert_eq!(surface.header_rect().y, -50.0);
    }
}
