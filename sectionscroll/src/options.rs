use alloc::sync::Arc;

use crate::dimensions::{DEFAULT_SCROLLBAR_THICKNESS, ScrollbarThickness};
use crate::layout::DEFAULT_PARTITION_SIZE;
use crate::{Easing, HeaderMode, Side};

/// Default width of a gutter's drag handle.
pub const DEFAULT_HANDLE_WIDTH: u32 = 4;

/// Default duration of an animated `scroll_to`.
pub const DEFAULT_SCROLL_DURATION_MS: u64 = 1000;

/// Default minimum spacing between animation ticks and wheel updates (120 per second).
pub const DEFAULT_THROTTLE_MS: u64 = 1000 / 120;

/// A callback that receives the new width while a gutter is being dragged.
pub type GutterResizeCallback = Arc<dyn Fn(u32) + Send + Sync>;

/// A resizable gutter on one side of every row.
#[derive(Clone)]
pub struct GutterConfig {
    pub width: u32,
    pub min_width: u32,
    pub handle_width: u32,
    /// Receives computed widths during a resize. The engine never stores them: the host owns
    /// the gutter width and feeds it back through the options.
    pub on_gutter_resize: Option<GutterResizeCallback>,
}

impl GutterConfig {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            min_width: 0,
            handle_width: DEFAULT_HANDLE_WIDTH,
            on_gutter_resize: None,
        }
    }

    pub fn with_min_width(mut self, min_width: u32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_handle_width(mut self, handle_width: u32) -> Self {
        self.handle_width = handle_width;
        self
    }

    pub fn with_on_gutter_resize(
        mut self,
        on_gutter_resize: Option<impl Fn(u32) + Send + Sync + 'static>,
    ) -> Self {
        self.on_gutter_resize = on_gutter_resize.map(|f| Arc::new(f) as _);
        self
    }

    /// Width the gutter and its handle add to a row.
    pub fn total_width(&self) -> u64 {
        self.width as u64 + self.handle_width as u64
    }
}

impl core::fmt::Debug for GutterConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GutterConfig")
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("handle_width", &self.handle_width)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Gutters {
    pub left: Option<GutterConfig>,
    pub right: Option<GutterConfig>,
}

impl Gutters {
    pub fn get(&self, side: Side) -> Option<&GutterConfig> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    pub fn total_width(&self) -> u64 {
        self.left.as_ref().map_or(0, GutterConfig::total_width)
            + self.right.as_ref().map_or(0, GutterConfig::total_width)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalScrollConfig {
    /// Width of the row content, excluding gutters.
    pub content_width: u64,
    pub scrollbar_height: u32,
}

impl HorizontalScrollConfig {
    pub fn new(content_width: u64) -> Self {
        Self {
            content_width,
            scrollbar_height: DEFAULT_SCROLLBAR_THICKNESS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerticalScrollConfig {
    pub scrollbar_width: u32,
}

impl Default for VerticalScrollConfig {
    fn default() -> Self {
        Self {
            scrollbar_width: DEFAULT_SCROLLBAR_THICKNESS,
        }
    }
}

/// Configuration for a scrollable list.
///
/// Cheap to clone: the only heavy fields are gutter callbacks, which live in `Arc`s.
#[derive(Clone, Debug)]
pub struct ScrollableOptions {
    /// Rows per partition. Values below 1 are treated as 1.
    pub offset: usize,
    pub header_mode: HeaderMode,
    pub gutters: Gutters,
    /// Enables horizontal scrolling when set.
    pub horizontal_scroll: Option<HorizontalScrollConfig>,
    pub vertical_scroll: VerticalScrollConfig,
    pub scroll_duration_ms: u64,
    pub throttle_ms: u64,
    pub easing: Easing,
}

impl Default for ScrollableOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollableOptions {
    pub fn new() -> Self {
        Self {
            offset: DEFAULT_PARTITION_SIZE,
            header_mode: HeaderMode::None,
            gutters: Gutters::default(),
            horizontal_scroll: None,
            vertical_scroll: VerticalScrollConfig::default(),
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            throttle_ms: DEFAULT_THROTTLE_MS,
            easing: Easing::EaseOutCubic,
        }
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_header_mode(mut self, header_mode: HeaderMode) -> Self {
        self.header_mode = header_mode;
        self
    }

    pub fn with_left_gutter(mut self, gutter: Option<GutterConfig>) -> Self {
        self.gutters.left = gutter;
        self
    }

    pub fn with_right_gutter(mut self, gutter: Option<GutterConfig>) -> Self {
        self.gutters.right = gutter;
        self
    }

    pub fn with_horizontal_scroll(mut self, config: Option<HorizontalScrollConfig>) -> Self {
        self.horizontal_scroll = config;
        self
    }

    pub fn with_vertical_scroll(mut self, config: VerticalScrollConfig) -> Self {
        self.vertical_scroll = config;
        self
    }

    pub fn with_scroll_duration_ms(mut self, duration_ms: u64) -> Self {
        self.scroll_duration_ms = duration_ms;
        self
    }

    pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Partition size actually used for layouts.
    pub fn partition_size(&self) -> usize {
        self.offset.max(1)
    }

    pub fn stacking_headers(&self) -> bool {
        self.header_mode.is_stacking()
    }

    pub fn scrollbar_thickness(&self) -> ScrollbarThickness {
        ScrollbarThickness {
            vertical: self.vertical_scroll.scrollbar_width,
            horizontal: self
                .horizontal_scroll
                .map_or(DEFAULT_SCROLLBAR_THICKNESS, |h| h.scrollbar_height),
        }
    }

    /// Full scrollable width: row content plus both gutters and their handles.
    pub fn content_width(&self) -> u64 {
        self.horizontal_scroll.map_or(0, |h| h.content_width) + self.gutters.total_width()
    }
}
