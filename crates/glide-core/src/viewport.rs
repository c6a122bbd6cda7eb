//! Read-only viewport scroll metrics.
//!
//! The scroll tracker never mutates the viewport; it only samples the current
//! vertical offset and the document/viewport heights. Hosts implement
//! [`Viewport`] over whatever windowing layer they use; tests and headless
//! hosts use [`FixedViewport`].

/// Read-only view of the host viewport's vertical scroll state.
pub trait Viewport {
    /// Current vertical scroll offset in pixels.
    fn scroll_y(&self) -> f32;

    /// Total document (content) height in pixels.
    fn document_height(&self) -> f32;

    /// Visible viewport height in pixels.
    fn viewport_height(&self) -> f32;

    /// Total scrollable distance: document height minus viewport height,
    /// never negative.
    fn scrollable_height(&self) -> f32 {
        (self.document_height() - self.viewport_height()).max(0.0)
    }
}

/// Plain-value viewport for tests and headless hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport {
    /// Current vertical scroll offset in pixels.
    pub scroll_y: f32,
    /// Total document height in pixels.
    pub document_height: f32,
    /// Visible viewport height in pixels.
    pub viewport_height: f32,
}

impl FixedViewport {
    /// Create a viewport at scroll offset zero.
    pub fn new(document_height: f32, viewport_height: f32) -> Self {
        Self {
            scroll_y: 0.0,
            document_height,
            viewport_height,
        }
    }

    /// Set the vertical scroll offset.
    pub fn set_scroll_y(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
    }
}

impl Viewport for FixedViewport {
    fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    fn document_height(&self) -> f32 {
        self.document_height
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }
}
