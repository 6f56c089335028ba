use crate::{Dimensions, ResizeState, ScrollValues, Size};

/// The minimal state that determines the visible window.
///
/// `vertical_transform` stays within `[0, max_vertical_scroll]` and `top_partition_index` is the
/// partition containing it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub horizontal_transform: u64,
    pub vertical_transform: u64,
    pub top_partition_index: usize,
}

impl ScrollState {
    pub fn apply_vertical(&mut self, values: ScrollValues) {
        self.vertical_transform = values.vertical_transform;
        self.top_partition_index = values.top_partition_index;
    }
}

/// A read-only snapshot of everything the presentation layer needs besides the row tables.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSnapshot {
    pub scroll: ScrollState,
    pub viewport: Size,
    /// `viewport` minus the rendered scrollbars.
    pub contents: Size,
    pub content: Size,
    pub dimensions: Dimensions,
    pub resize: ResizeState,
}
