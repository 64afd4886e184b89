//! Geometric primitives and the sentinel-to-offset reduction.

use std::fmt;

/// The two symmetric pull edges of a vertical list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Pull down above the first item.
    Header,
    /// Pull up beyond the last item.
    Footer,
}

impl Edge {
    pub const ALL: [Edge; 2] = [Edge::Header, Edge::Footer];

    pub fn name(self) -> &'static str {
        match self {
            Edge::Header => "header",
            Edge::Footer => "footer",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// Axis-aligned rectangle in the coordinate space of the scroll viewport.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

/// One measurement of a sentinel taken during a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SentinelSample {
    pub rect: Rect,
    pub viewport: Size,
}

impl SentinelSample {
    pub fn new(rect: Rect, viewport: Size) -> Self {
        Self { rect, viewport }
    }

    /// Samples with non-finite coordinates are treated as unmeasured.
    pub fn is_valid(&self) -> bool {
        [
            self.rect.x,
            self.rect.y,
            self.rect.width,
            self.rect.height,
            self.viewport.width,
            self.viewport.height,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Natural extent of the sentinel along the pull axis.
    pub fn extent(&self) -> f32 {
        self.rect.height
    }

    fn spans_viewport(&self) -> bool {
        self.rect.width == self.viewport.width
    }
}

/// Distance the sentinel has been dragged past its resting anchor, in the
/// pull direction of `edge`. Positive means the user is pulling.
pub fn content_offset(edge: Edge, sample: &SentinelSample) -> f32 {
    match edge {
        Edge::Header => sample.rect.min_y() + sample.rect.height,
        Edge::Footer => sample.viewport.height - sample.rect.min_y(),
    }
}

/// True when the sentinel sits exactly at its hidden anchor and spans the
/// full viewport width. This is the condition that arms an idle edge.
pub fn is_at_rest(edge: Edge, sample: &SentinelSample, threshold: f32) -> bool {
    let anchored = match edge {
        Edge::Header => -sample.rect.min_y() == threshold,
        Edge::Footer => sample.rect.min_y() >= sample.viewport.height,
    };
    anchored && sample.spans_viewport()
}
